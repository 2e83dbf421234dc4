//! Ledger database configuration
//!
//! The ledger keeps three tables (`clients`, `logs`, `cycles`). The dashboard
//! reads all three concurrently, so the pool should hold at least
//! [`DASHBOARD_QUERIES`] connections to serve one snapshot without queueing.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Number of list queries a dashboard snapshot runs at once.
pub const DASHBOARD_QUERIES: u32 = 3;

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL, falling back to `DATABASE_URL`
    #[serde(default)]
    pub url: String,

    /// Maximum connections allowed
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds a request waits for a free connection before failing with a 500
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Create the `clients`, `logs` and `cycles` tables from `migrations/` on
    /// startup. Leave off when the schema is managed outside this service.
    #[serde(default)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Get acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Whether a dashboard snapshot has to wait on its own queries.
    pub fn serializes_dashboard(&self) -> bool {
        self.max_connections < DASHBOARD_QUERIES
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URL"));
        }
        if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections == 0 {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.max_connections > 100 {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        if self.acquire_timeout_secs == 0 {
            return Err(ValidationError::InvalidAcquireTimeout);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            run_migrations: false,
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    10
}
