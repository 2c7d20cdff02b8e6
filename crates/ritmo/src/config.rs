use std::{env, time::Duration};

use thiserror::Error;

use ritmo_core::auth::AdminAllowList;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backing store project identifier (required).
    pub project_id: String,
    /// Comma-separated admin email addresses (default: empty).
    pub admin_emails: String,
    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Read-query timeout in seconds (default: 10)
    pub query_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FIRESTORE_PROJECT_ID` - Backing store project id (required)
    /// - `ADMIN_EMAILS` - Comma-separated admin allow-list (default: empty)
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 300)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 10,000)
    /// - `QUERY_TIMEOUT_SECONDS` - Read-query timeout (default: 10)
    ///
    /// A missing project id is a hard error; everything else falls back to
    /// its default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let project_id = env::var("FIRESTORE_PROJECT_ID")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar("FIRESTORE_PROJECT_ID"))?;

        Ok(Self {
            project_id,
            admin_emails: env::var("ADMIN_EMAILS").unwrap_or_default(),
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            query_timeout_seconds: env::var("QUERY_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the read-query timeout as a Duration.
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_seconds)
    }

    /// Parse the admin allow-list out of `admin_emails`.
    pub fn admin_allow_list(&self) -> AdminAllowList {
        AdminAllowList::from_csv(&self.admin_emails)
    }
}
