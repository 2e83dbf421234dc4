//! CreateLogHandler - Command handler recording a unit of billable work.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::{LogFields, LogInput, WorkLog};
use crate::ports::LogRepository;

/// Command to create a log.
#[derive(Debug, Clone, Default)]
pub struct CreateLogCommand {
    pub input: LogInput,
}

/// Handler for creating logs. The creation timestamp is assigned here.
pub struct CreateLogHandler {
    repository: Arc<dyn LogRepository>,
}

impl CreateLogHandler {
    pub fn new(repository: Arc<dyn LogRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateLogCommand) -> Result<WorkLog, DomainError> {
        let fields = LogFields::from_input(cmd.input)?;
        let log = self.repository.create(&fields, Timestamp::now()).await?;

        tracing::info!(log_id = %log.id, client_id = %log.client_id, "Log created");
        Ok(log)
    }
}
