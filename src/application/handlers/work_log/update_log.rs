//! UpdateLogHandler - Command handler replacing a log's columns.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, LogId};
use crate::domain::{LogFields, LogInput, WorkLog};
use crate::ports::LogRepository;

/// Command to update a log. Every writable column is replaced.
#[derive(Debug, Clone, Default)]
pub struct UpdateLogCommand {
    pub id: Option<LogId>,
    pub input: LogInput,
}

/// Handler for updating logs.
pub struct UpdateLogHandler {
    repository: Arc<dyn LogRepository>,
}

impl UpdateLogHandler {
    pub fn new(repository: Arc<dyn LogRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateLogCommand) -> Result<WorkLog, DomainError> {
        let id = cmd
            .id
            .ok_or_else(|| DomainError::validation("Log ID is required"))?;
        // An unknown id wins over an incomplete body.
        let fields = match LogFields::from_input(cmd.input) {
            Ok(fields) => fields,
            Err(err) => {
                if self.repository.exists(id).await? {
                    return Err(err);
                }
                return Err(log_not_found());
            }
        };

        let log = self
            .repository
            .update(id, &fields)
            .await?
            .ok_or_else(log_not_found)?;

        tracing::info!(log_id = %id, paid = log.paid, "Log updated");
        Ok(log)
    }
}

fn log_not_found() -> DomainError {
    DomainError::new(ErrorCode::LogNotFound, "Log not found")
}
