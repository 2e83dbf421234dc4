//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application layer and storage. Adapters implement these ports.
//!
//! - `ClientRepository` - Clients, including the cascade to dependents
//! - `LogRepository` - Work logs
//! - `CycleRepository` - Payment cycles and the paid flags they drive

mod client_repository;
mod cycle_repository;
mod log_repository;

pub use client_repository::ClientRepository;
pub use cycle_repository::CycleRepository;
pub use log_repository::LogRepository;
