//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum JSON API
//! - `postgres` - PostgreSQL repositories
//! - `memory` - In-memory ledger for tests and local runs

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryLedger;
