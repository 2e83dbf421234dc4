//! Client command and query handlers.

mod create_client;
mod delete_client;
mod list_clients;
mod update_client;

pub use create_client::{CreateClientCommand, CreateClientHandler};
pub use delete_client::{DeleteClientCommand, DeleteClientHandler};
pub use list_clients::ListClientsHandler;
pub use update_client::{UpdateClientCommand, UpdateClientHandler};
