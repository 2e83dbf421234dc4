//! ListLogsHandler - Query handler returning logs joined with client names.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::LogWithClient;
use crate::ports::LogRepository;

/// Handler for listing logs, newest date first.
pub struct ListLogsHandler {
    repository: Arc<dyn LogRepository>,
}

impl ListLogsHandler {
    pub fn new(repository: Arc<dyn LogRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<LogWithClient>, DomainError> {
        self.repository.list_with_client().await
    }
}
