use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{RuntimeConfig, StoreConfig};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub store_url: String,
    pub store_database: String,
    pub store_user: Option<String>,
    pub store_password: Option<String>,
    pub session_path: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3380".to_string(),
            api_token: None,
            store_url: "http://127.0.0.1:8787".to_string(),
            store_database: "eventboard".to_string(),
            store_user: None,
            store_password: None,
            session_path: "./session.toml".to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("EVENTBOARD_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.resolve_paths(base_dir);
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
        if let Some(user) = &self.store_user {
            if user.trim().is_empty() {
                self.store_user = None;
            }
        }
        if let Some(password) = &self.store_password {
            if password.trim().is_empty() {
                self.store_password = None;
            }
        }
        self.store_url = self.store_url.trim_end_matches('/').to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.session_path = resolve_path(base, &self.session_path);
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.store_url.trim().is_empty() {
            return Err(anyhow!("store_url must not be empty"));
        }
        if self.store_database.trim().is_empty() {
            return Err(anyhow!("store_database must not be empty"));
        }
        if self.session_path.trim().is_empty() {
            return Err(anyhow!("session_path must not be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            session_path: self.session_path.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    pub fn to_store_config(&self) -> StoreConfig {
        StoreConfig {
            store_url: self.store_url.clone(),
            store_database: self.store_database.clone(),
            store_user: self.store_user.clone(),
            store_password: self.store_password.clone(),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("EVENTBOARD_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("EVENTBOARD_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("EVENTBOARD_STORE_URL") {
            self.store_url = value;
        }
        if let Ok(value) = env::var("EVENTBOARD_STORE_DATABASE") {
            self.store_database = value;
        }
        if let Ok(value) = env::var("EVENTBOARD_STORE_USER") {
            self.store_user = Some(value);
        }
        if let Ok(value) = env::var("EVENTBOARD_STORE_PASSWORD") {
            self.store_password = Some(value);
        }
        if let Ok(value) = env::var("EVENTBOARD_SESSION_PATH") {
            self.session_path = value;
        }
        if let Ok(value) = env::var("EVENTBOARD_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("EVENTBOARD_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_drops_blank_optionals_and_trailing_slash() {
        let mut config = AppConfig {
            api_token: Some("  ".to_string()),
            store_user: Some("".to_string()),
            store_url: "http://store.local/".to_string(),
            ..AppConfig::default()
        };
        config.normalize();
        assert!(config.api_token.is_none());
        assert!(config.store_user.is_none());
        assert_eq!(config.store_url, "http://store.local");
    }

    #[test]
    fn validate_rejects_bad_bind_addr() {
        let config = AppConfig {
            bind_addr: "not-an-addr".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_body_limit() {
        let config = AppConfig {
            max_body_bytes: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
