//! Server configuration: defaults, then YAML file, then `TRAVEL__*` environment

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Prefix of environment overrides, e.g. `TRAVEL__SERVER__BIND`
pub const ENV_PREFIX: &str = "TRAVEL__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub travel: travel_service::Config,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,
    /// Requests running longer are answered with 408
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SeaORM connection url (`sqlite://...` or `postgres://...`)
    pub url: String,
    pub max_connections: u32,
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://travel.db?mode=rwc".to_string(),
            max_connections: 10,
            connect_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info,travel_service=debug,sqlx=warn".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Layer defaults, the optional YAML file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        Ok(config)
    }
}
