//! Work log repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, LogId, Timestamp};
use crate::domain::{LogFields, LogWithClient, WorkLog};

/// Repository port for log rows.
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// List every log with its client name, newest date first.
    async fn list_with_client(&self) -> Result<Vec<LogWithClient>, DomainError>;

    /// Insert a log stamped with `timestamp` and return the stored row.
    async fn create(&self, fields: &LogFields, timestamp: Timestamp)
        -> Result<WorkLog, DomainError>;

    /// Whether a log with the given id is stored.
    async fn exists(&self, id: LogId) -> Result<bool, DomainError>;

    /// Replace every writable column of a log.
    ///
    /// Returns `None` when no log has the given id. The creation timestamp is
    /// left untouched.
    async fn update(&self, id: LogId, fields: &LogFields) -> Result<Option<WorkLog>, DomainError>;

    /// Delete a log. Deleting an unknown id is not an error.
    async fn delete(&self, id: LogId) -> Result<(), DomainError>;
}
