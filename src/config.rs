use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

const CONFIG_DIR: &str = "config";
pub const DEFAULT_BASE_URL: &str = "https://backend.hyperial.my.id";

#[derive(Debug, Error)]
pub enum AdminConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Runtime settings for the admin client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminConfig {
    /// Backend origin every endpoint path is resolved against.
    pub base_url: String,
    /// File holding the persisted `token` and `role`.
    pub session_path: PathBuf,
    pub request_timeout_secs: u64,
    /// Queue depth of each resource service.
    pub channel_buffer: usize,
}

impl AdminConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> Result<(), AdminConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AdminConfigError::Invalid(format!(
                "base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }
        if self.channel_buffer == 0 {
            return Err(AdminConfigError::Invalid("channel_buffer must be at least 1".into()));
        }
        Ok(())
    }
}

/// Loads configuration from defaults, `config/default.*` and `HYPERIAL__*`
/// environment variables, later sources winning.
pub fn load_config() -> Result<AdminConfig, AdminConfigError> {
    load_config_from(Path::new(CONFIG_DIR))
}

pub fn load_config_from(dir: &Path) -> Result<AdminConfig, AdminConfigError> {
    if !dir.exists() {
        debug!(dir = %dir.display(), "Config directory not found; using defaults and environment");
    }

    let config = Config::builder()
        .set_default("base_url", DEFAULT_BASE_URL)?
        .set_default("session_path", ".hyperial-session.json")?
        .set_default("request_timeout_secs", 30)?
        .set_default("channel_buffer", 32)?
        .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
        .add_source(Environment::with_prefix("HYPERIAL").separator("__"))
        .build()?;

    let admin_config: AdminConfig = config.try_deserialize()?;
    admin_config.validate()?;

    info!(base_url = %admin_config.base_url, "Configuration loaded");
    Ok(admin_config)
}
