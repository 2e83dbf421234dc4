//! DeleteLogHandler - Command handler removing a single log.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, LogId};
use crate::ports::LogRepository;

/// Command to delete a log.
#[derive(Debug, Clone, Default)]
pub struct DeleteLogCommand {
    pub id: Option<LogId>,
}

/// Handler for deleting logs.
pub struct DeleteLogHandler {
    repository: Arc<dyn LogRepository>,
}

impl DeleteLogHandler {
    pub fn new(repository: Arc<dyn LogRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteLogCommand) -> Result<(), DomainError> {
        let id = cmd
            .id
            .ok_or_else(|| DomainError::validation("Log ID is required"))?;

        self.repository.delete(id).await?;

        tracing::info!(log_id = %id, "Log deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryLedger;

    #[tokio::test]
    async fn deleting_unknown_log_succeeds() {
        let handler = DeleteLogHandler::new(Arc::new(InMemoryLedger::new()));
        assert!(handler
            .handle(DeleteLogCommand { id: Some(LogId::new(77)) })
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn missing_id_is_a_validation_error() {
        let handler = DeleteLogHandler::new(Arc::new(InMemoryLedger::new()));
        let err = handler.handle(DeleteLogCommand::default()).await.unwrap_err();
        assert_eq!(err.message, "Log ID is required");
    }
}
