//! Application configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite connection URL for character storage
    pub database_url: String,

    /// Rules API base URL (D&D 5e SRD API layout)
    pub rules_api_base_url: String,
    /// Upper bound on a single rules API call
    pub rules_api_timeout: Duration,
    /// Keep resolved features for the process lifetime
    pub feature_cache_enabled: bool,

    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:./data/levelguide.db".to_string()),

            rules_api_base_url: env::var("RULES_API_BASE_URL")
                .unwrap_or_else(|_| "https://www.dnd5eapi.co/api".to_string()),
            rules_api_timeout: Duration::from_secs(
                env::var("RULES_API_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .context("RULES_API_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            feature_cache_enabled: env::var("FEATURE_CACHE_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .context("FEATURE_CACHE_ENABLED must be true or false")?,

            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}
