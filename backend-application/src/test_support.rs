// In-memory port implementations backing the application-layer tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use backend_domain::{
    Event, EventRepository, RuntimeConfig, SavedEventRepository, ShakeDetector, StoreError,
    UserId,
};

use crate::{AppState, Metrics};

#[derive(Default)]
pub struct MemoryEventStore {
    events: Mutex<Vec<Event>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryEventStore {
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
            ..Default::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
            ..Default::default()
        }
    }

    pub fn write_only_failure() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    pub async fn stored(&self) -> Vec<Event> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl EventRepository for MemoryEventStore {
    async fn fetch_events(&self) -> Result<Vec<Event>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        Ok(self.events.lock().await.clone())
    }

    async fn insert_events(&self, events: &[Event]) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        self.events.lock().await.extend_from_slice(events);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.fail_reads {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        Ok(())
    }
}

/// Keeps insertion order so "last saved" behaves like the real store.
#[derive(Default)]
pub struct MemorySavedStore {
    records: Mutex<Vec<(String, Event)>>,
    fail: bool,
}

impl MemorySavedStore {
    pub fn unavailable() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SavedEventRepository for MemorySavedStore {
    async fn upsert_saved(&self, _user: &UserId, event: &Event) -> Result<(), StoreError> {
        self.check()?;
        let mut records = self.records.lock().await;
        if let Some(slot) = records.iter_mut().find(|(name, _)| *name == event.name) {
            slot.1 = event.clone();
        } else {
            records.push((event.name.clone(), event.clone()));
        }
        Ok(())
    }

    async fn saved_exists(&self, _user: &UserId, name: &str) -> Result<bool, StoreError> {
        self.check()?;
        let records = self.records.lock().await;
        Ok(records.iter().any(|(key, _)| key == name))
    }

    async fn fetch_saved(&self, _user: &UserId) -> Result<Vec<Event>, StoreError> {
        self.check()?;
        let records = self.records.lock().await;
        Ok(records.iter().map(|(_, event)| event.clone()).collect())
    }

    async fn delete_saved(&self, _user: &UserId, name: &str) -> Result<(), StoreError> {
        self.check()?;
        let mut records = self.records.lock().await;
        records.retain(|(key, _)| key != name);
        Ok(())
    }
}

pub fn test_state(
    event_repo: Arc<MemoryEventStore>,
    saved_repo: Arc<MemorySavedStore>,
) -> AppState {
    AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_token: None,
            session_path: "./session".to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
        },
        user: UserId("test-user".to_string()),
        event_repo,
        saved_repo,
        shake_detector: Arc::new(Mutex::new(ShakeDetector::new())),
        metrics: Arc::new(Metrics::default()),
    }
}
