//! HTTP DTOs for client endpoints.

use serde::Deserialize;

use crate::adapters::http::dto::number_or_string;
use crate::application::handlers::{CreateClientCommand, UpdateClientCommand};
use crate::domain::foundation::present_id;

/// Body of POST and PUT /clients.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientRequest {
    #[serde(default, deserialize_with = "number_or_string")]
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub client_type: Option<String>,
    pub domain: Option<String>,
}

impl ClientRequest {
    pub fn into_create_command(self) -> CreateClientCommand {
        CreateClientCommand {
            name: self.name,
            client_type: self.client_type,
            domain: self.domain,
        }
    }

    pub fn into_update_command(self) -> UpdateClientCommand {
        UpdateClientCommand {
            id: present_id(self.id),
            name: self.name,
            client_type: self.client_type,
            domain: self.domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ClientId;

    #[test]
    fn type_field_maps_to_client_type() {
        let req: ClientRequest =
            serde_json::from_str(r#"{"id": 3, "name": "Acme", "type": "Retainer"}"#).unwrap();
        let cmd = req.into_update_command();
        assert_eq!(cmd.id, Some(ClientId::new(3)));
        assert_eq!(cmd.client_type.as_deref(), Some("Retainer"));
        assert_eq!(cmd.domain, None);
    }

    #[test]
    fn zero_id_reads_as_missing() {
        let req = ClientRequest {
            id: Some(0),
            ..Default::default()
        };
        assert_eq!(req.into_update_command().id, None);
    }

    #[test]
    fn string_id_is_read() {
        let req: ClientRequest = serde_json::from_str(r#"{"id": "3", "name": "Acme"}"#).unwrap();
        assert_eq!(req.into_update_command().id, Some(ClientId::new(3)));
    }
}
