//! ListClientsHandler - Query handler returning every client by name.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::Client;
use crate::ports::ClientRepository;

/// Handler for listing clients.
pub struct ListClientsHandler {
    repository: Arc<dyn ClientRepository>,
}

impl ListClientsHandler {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Client>, DomainError> {
        self.repository.list().await
    }
}
