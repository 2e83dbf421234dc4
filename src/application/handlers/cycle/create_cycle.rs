//! CreateCycleHandler - Command handler settling a batch of logs.
//!
//! Storing the cycle and flagging its logs paid happen in one repository call.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::{Cycle, CycleFields, CycleInput};
use crate::ports::CycleRepository;

/// Command to create a cycle.
#[derive(Debug, Clone, Default)]
pub struct CreateCycleCommand {
    pub input: CycleInput,
}

/// Handler for creating cycles.
pub struct CreateCycleHandler {
    repository: Arc<dyn CycleRepository>,
}

impl CreateCycleHandler {
    pub fn new(repository: Arc<dyn CycleRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateCycleCommand) -> Result<Cycle, DomainError> {
        let fields = CycleFields::from_input(cmd.input)?;
        let cycle = self.repository.create_and_mark_paid(&fields).await?;

        tracing::info!(
            cycle_id = %cycle.id,
            client_id = %cycle.client_id,
            log_count = cycle.log_ids.len(),
            total = cycle.total,
            "Cycle created and logs marked paid"
        );
        Ok(cycle)
    }
}
