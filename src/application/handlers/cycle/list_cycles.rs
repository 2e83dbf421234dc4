//! ListCyclesHandler - Query handler returning cycles joined with client names.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::CycleWithClient;
use crate::ports::CycleRepository;

/// Handler for listing cycles, newest date first.
pub struct ListCyclesHandler {
    repository: Arc<dyn CycleRepository>,
}

impl ListCyclesHandler {
    pub fn new(repository: Arc<dyn CycleRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<CycleWithClient>, DomainError> {
        self.repository.list_with_client().await
    }
}
