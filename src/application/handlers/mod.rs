//! Application handlers.
//!
//! Command and query handlers that validate input and orchestrate ports.

pub mod client;
pub mod cycle;
pub mod dashboard;
pub mod work_log;

pub use client::{
    CreateClientCommand, CreateClientHandler, DeleteClientCommand, DeleteClientHandler,
    ListClientsHandler, UpdateClientCommand, UpdateClientHandler,
};
pub use cycle::{
    CreateCycleCommand, CreateCycleHandler, DeleteCycleCommand, DeleteCycleHandler,
    ListCyclesHandler, UpdateCycleCommand, UpdateCycleHandler,
};
pub use dashboard::{DashboardError, GetDashboardHandler};
pub use work_log::{
    CreateLogCommand, CreateLogHandler, DeleteLogCommand, DeleteLogHandler, ListLogsHandler,
    UpdateLogCommand, UpdateLogHandler,
};
