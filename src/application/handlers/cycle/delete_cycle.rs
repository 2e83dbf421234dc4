//! DeleteCycleHandler - Command handler reopening a cycle's logs.

use std::sync::Arc;

use crate::domain::foundation::{CycleId, DomainError};
use crate::ports::CycleRepository;

/// Command to delete a cycle.
#[derive(Debug, Clone, Default)]
pub struct DeleteCycleCommand {
    pub id: Option<CycleId>,
}

/// Handler for deleting cycles.
///
/// Succeeds whether or not the cycle existed.
pub struct DeleteCycleHandler {
    repository: Arc<dyn CycleRepository>,
}

impl DeleteCycleHandler {
    pub fn new(repository: Arc<dyn CycleRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteCycleCommand) -> Result<(), DomainError> {
        let id = cmd
            .id
            .ok_or_else(|| DomainError::validation("Cycle ID is required"))?;

        if self.repository.delete_and_unmark_paid(id).await? {
            tracing::info!(cycle_id = %id, "Cycle deleted and logs marked unpaid");
        } else {
            tracing::debug!(cycle_id = %id, "Cycle to delete was not found");
        }
        Ok(())
    }
}
