use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::info;

use backend_application::{AppState, Metrics};
use backend_domain::{IdentityProvider, ShakeDetector};
use backend_infrastructure::{AppConfig, FileIdentityProvider, HttpDocumentStore};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();
        let store_config = config.to_store_config();

        let store = Arc::new(HttpDocumentStore::new(&store_config)?);

        // Identity is resolved exactly once; every request runs as this user.
        let identity = FileIdentityProvider::new(runtime_config.session_path.clone());
        let user = identity.resolve().await?;
        info!("session resolved for user {}", user.as_str());

        let state = AppState {
            config: runtime_config,
            user,
            event_repo: store.clone(),
            saved_repo: store,
            shake_detector: Arc::new(Mutex::new(ShakeDetector::new())),
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
