use async_trait::async_trait;

use crate::entities::Event;
use crate::errors::StoreError;
use crate::value_objects::UserId;

/// Shared `events` collection. All operations are single-attempt; callers
/// decide what a failure falls back to.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn fetch_events(&self) -> Result<Vec<Event>, StoreError>;
    /// All-or-nothing batch insert used by the seed path.
    async fn insert_events(&self, events: &[Event]) -> Result<(), StoreError>;
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Per-user `users/{uid}/saved_events` subcollection, keyed by event name.
/// Records are full denormalized copies, not references.
#[async_trait]
pub trait SavedEventRepository: Send + Sync {
    /// Last write wins; saving the same name twice leaves one record.
    async fn upsert_saved(&self, user: &UserId, event: &Event) -> Result<(), StoreError>;
    async fn saved_exists(&self, user: &UserId, name: &str) -> Result<bool, StoreError>;
    async fn fetch_saved(&self, user: &UserId) -> Result<Vec<Event>, StoreError>;
    async fn delete_saved(&self, user: &UserId, name: &str) -> Result<(), StoreError>;
}

/// Resolves the acting user exactly once at startup: an existing persisted
/// session if present, otherwise a freshly minted anonymous identity.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn resolve(&self) -> anyhow::Result<UserId>;
}
