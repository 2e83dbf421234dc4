//! In-memory adapters - Repository implementations without a database.
//!
//! Useful for testing and local development.

mod ledger;

pub use ledger::InMemoryLedger;
