use std::sync::Arc;

use backend_domain::ports::{EventRepository, SavedEventRepository};
use backend_domain::{RuntimeConfig, ShakeDetector, UserId};
use tokio::sync::Mutex;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    /// Resolved once at startup by the identity provider; every saved-event
    /// operation is scoped to this user.
    pub user: UserId,
    pub event_repo: Arc<dyn EventRepository>,
    pub saved_repo: Arc<dyn SavedEventRepository>,
    pub shake_detector: Arc<Mutex<ShakeDetector>>,
    pub metrics: Arc<Metrics>,
}
