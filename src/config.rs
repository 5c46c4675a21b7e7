//! Configuration management for the Biblion admin client

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::credentials::TokenFile;

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Origin the client talks to; the upstream itself sits behind the
    /// proxy rewrite at the edge.
    pub base_url: String,
    /// Fixed segment prefixed to every logical path.
    pub proxy_prefix: String,
    pub timeout_ms: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Path of the persisted bearer token; empty means the per-user default.
    pub token_file: String,
}

impl AuthConfig {
    pub fn token_path(&self) -> PathBuf {
        if self.token_file.is_empty() {
            TokenFile::default_path()
        } else {
            PathBuf::from(&self.token_file)
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix BIBLION_)
            .add_source(
                Environment::with_prefix("BIBLION")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override upstream base from API_URL env var if present
            .set_override_option("api.base_url", env::var("API_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            proxy_prefix: "/proxy/api".to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_file: String::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
