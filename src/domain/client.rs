//! Client entity - the party work is logged and billed against.

use serde::{Deserialize, Serialize};

use super::foundation::{present_text, ClientId, DomainError};

/// Type assigned to clients created without one.
pub const DEFAULT_CLIENT_TYPE: &str = "Website";

/// A persisted client row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    #[serde(rename = "type")]
    pub client_type: String,
    pub domain: Option<String>,
}

/// Writable client columns, used for both insert and full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientFields {
    pub name: String,
    pub client_type: String,
    pub domain: Option<String>,
}

impl ClientFields {
    /// Builds the values for a new client.
    ///
    /// `name` is required. A missing `client_type` falls back to
    /// [`DEFAULT_CLIENT_TYPE`] and a blank `domain` becomes `None`.
    pub fn for_create(
        name: Option<String>,
        client_type: Option<String>,
        domain: Option<String>,
    ) -> Result<Self, DomainError> {
        let name = present_text(name)
            .ok_or_else(|| DomainError::validation("Client name is required"))?;

        Ok(Self {
            name,
            client_type: present_text(client_type)
                .unwrap_or_else(|| DEFAULT_CLIENT_TYPE.to_string()),
            domain: present_text(domain),
        })
    }

    /// Builds the replacement values for an existing client.
    ///
    /// Every column is overwritten: an absent `domain` clears it, while the
    /// non-nullable `name` and `type` must be supplied.
    pub fn for_update(
        name: Option<String>,
        client_type: Option<String>,
        domain: Option<String>,
    ) -> Result<Self, DomainError> {
        match (present_text(name), present_text(client_type)) {
            (Some(name), Some(client_type)) => Ok(Self {
                name,
                client_type,
                domain: present_text(domain),
            }),
            _ => Err(DomainError::validation("Client name and type are required")),
        }
    }

    /// Materializes a row with the given id.
    pub fn into_client(self, id: ClientId) -> Client {
        Client {
            id,
            name: self.name,
            client_type: self.client_type,
            domain: self.domain,
        }
    }
}
