// File-backed anonymous session
// Reuses the uid persisted from an earlier run, otherwise mints a fresh
// anonymous identity. Two runs pointing at different (or unwritable)
// session files end up with disjoint saved-event sets.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::warn;
use uuid::Uuid;

use backend_domain::{IdentityProvider, UserId};

#[derive(Debug, Serialize, Deserialize)]
struct SessionRecord {
    uid: String,
    created_at: String,
}

pub struct FileIdentityProvider {
    path: PathBuf,
}

impl FileIdentityProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_existing(&self) -> Option<UserId> {
        let content = fs::read_to_string(&self.path).await.ok()?;
        let record: SessionRecord = toml::from_str(&content).ok()?;
        let uid = record.uid.trim().to_string();
        if uid.is_empty() {
            None
        } else {
            Some(UserId(uid))
        }
    }
}

#[async_trait]
impl IdentityProvider for FileIdentityProvider {
    async fn resolve(&self) -> anyhow::Result<UserId> {
        if let Some(existing) = self.read_existing().await {
            return Ok(existing);
        }
        let uid = Uuid::new_v4().to_string();
        let record = SessionRecord {
            uid: uid.clone(),
            created_at: Utc::now().to_rfc3339(),
        };
        let content = toml::to_string(&record)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        // Write failure is non-fatal; the identity then lives only for this run.
        if let Err(err) = fs::write(&self.path, content).await {
            warn!("could not persist session file: {err}");
        }
        Ok(UserId(uid))
    }
}
