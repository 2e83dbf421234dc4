//! UpdateClientHandler - Command handler replacing a client's columns.

use std::sync::Arc;

use crate::domain::foundation::{ClientId, DomainError, ErrorCode};
use crate::domain::{Client, ClientFields};
use crate::ports::ClientRepository;

/// Command to update a client. Every column is replaced.
#[derive(Debug, Clone, Default)]
pub struct UpdateClientCommand {
    pub id: Option<ClientId>,
    pub name: Option<String>,
    pub client_type: Option<String>,
    pub domain: Option<String>,
}

/// Handler for updating clients.
pub struct UpdateClientHandler {
    repository: Arc<dyn ClientRepository>,
}

impl UpdateClientHandler {
    pub fn new(repository: Arc<dyn ClientRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateClientCommand) -> Result<Client, DomainError> {
        let id = cmd
            .id
            .ok_or_else(|| DomainError::validation("Client ID is required"))?;
        // An unknown id wins over an incomplete body.
        let fields = match ClientFields::for_update(cmd.name, cmd.client_type, cmd.domain) {
            Ok(fields) => fields,
            Err(err) => {
                if self.repository.exists(id).await? {
                    return Err(err);
                }
                return Err(client_not_found());
            }
        };

        let client = self
            .repository
            .update(id, &fields)
            .await?
            .ok_or_else(client_not_found)?;

        tracing::info!(client_id = %id, "Client updated");
        Ok(client)
    }
}

fn client_not_found() -> DomainError {
    DomainError::new(ErrorCode::ClientNotFound, "Client not found")
}
