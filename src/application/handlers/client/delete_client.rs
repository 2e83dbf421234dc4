//! DeleteClientHandler - Command handler removing a client and its dependents.

use std::sync::Arc;

use crate::domain::foundation::{ClientId, DomainError};
use crate::ports::ClientRepository;

/// Command to delete a client together with its logs and cycles.
#[derive(Debug, Clone, Default)]
pub struct DeleteClientCommand {
    pub id: Option<ClientId>,
}

/// Handler for deleting clients.
pub struct DeleteClientHandler {
    repository: Arc<dyn ClientRepository>,
}

impl DeleteClientHandler {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteClientCommand) -> Result<(), DomainError> {
        let id = cmd
            .id
            .ok_or_else(|| DomainError::validation("Client ID is required"))?;

        self.repository.delete_with_dependents(id).await?;

        tracing::info!(client_id = %id, "Client and associated data deleted");
        Ok(())
    }
}
