//! Client repository port.
//!
//! Defines the contract for persisting and listing clients. Implementations
//! own the cascade from a client to its logs and cycles.

use async_trait::async_trait;

use crate::domain::foundation::{ClientId, DomainError};
use crate::domain::{Client, ClientFields};

/// Repository port for client rows.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// List every client ordered by name.
    async fn list(&self) -> Result<Vec<Client>, DomainError>;

    /// Insert a client and return the stored row.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, fields: &ClientFields) -> Result<Client, DomainError>;

    /// Whether a client with the given id is stored.
    async fn exists(&self, id: ClientId) -> Result<bool, DomainError>;

    /// Replace every writable column of a client.
    ///
    /// Returns `None` when no client has the given id.
    async fn update(
        &self,
        id: ClientId,
        fields: &ClientFields,
    ) -> Result<Option<Client>, DomainError>;

    /// Delete a client together with all of its logs and cycles.
    ///
    /// Deleting an unknown id is not an error.
    async fn delete_with_dependents(&self, id: ClientId) -> Result<(), DomainError>;
}
