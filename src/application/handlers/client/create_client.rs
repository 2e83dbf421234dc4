//! CreateClientHandler - Command handler for registering a new client.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::{Client, ClientFields};
use crate::ports::ClientRepository;

/// Command to create a client.
#[derive(Debug, Clone, Default)]
pub struct CreateClientCommand {
    pub name: Option<String>,
    pub client_type: Option<String>,
    pub domain: Option<String>,
}

/// Handler for creating clients.
pub struct CreateClientHandler {
    repository: Arc<dyn ClientRepository>,
}

impl CreateClientHandler {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateClientCommand) -> Result<Client, DomainError> {
        let fields = ClientFields::for_create(cmd.name, cmd.client_type, cmd.domain)?;
        let client = self.repository.create(&fields).await?;

        tracing::info!(client_id = %client.id, name = %client.name, "Client created");
        Ok(client)
    }
}
