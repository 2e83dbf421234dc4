//! UpdateCycleHandler - Command handler replacing a cycle's columns.

use std::sync::Arc;

use crate::domain::foundation::{CycleId, DomainError, ErrorCode};
use crate::domain::{Cycle, CycleFields, CycleInput};
use crate::ports::CycleRepository;

/// Command to update a cycle. Paid flags of the referenced logs are left as-is.
#[derive(Debug, Clone, Default)]
pub struct UpdateCycleCommand {
    pub id: Option<CycleId>,
    pub input: CycleInput,
}

/// Handler for updating cycles.
pub struct UpdateCycleHandler {
    repository: Arc<dyn CycleRepository>,
}

impl UpdateCycleHandler {
    pub fn new(repository: Arc<dyn CycleRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateCycleCommand) -> Result<Cycle, DomainError> {
        let id = cmd
            .id
            .ok_or_else(|| DomainError::validation("Cycle ID is required"))?;
        // An unknown id wins over an incomplete body.
        let fields = match CycleFields::from_input(cmd.input) {
            Ok(fields) => fields,
            Err(err) => {
                if self.repository.exists(id).await? {
                    return Err(err);
                }
                return Err(cycle_not_found());
            }
        };

        let cycle = self
            .repository
            .update(id, &fields)
            .await?
            .ok_or_else(cycle_not_found)?;

        tracing::info!(cycle_id = %id, log_count = cycle.log_ids.len(), "Cycle updated");
        Ok(cycle)
    }
}

fn cycle_not_found() -> DomainError {
    DomainError::new(ErrorCode::CycleNotFound, "Cycle not found")
}
