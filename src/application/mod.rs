//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer validates caller input against domain rules and coordinates
//! repository ports. Command handlers (write) are separate from query
//! handlers (read).

pub mod handlers;

pub use handlers::{
    CreateClientCommand, CreateClientHandler, CreateCycleCommand, CreateCycleHandler,
    CreateLogCommand, CreateLogHandler, DashboardError, DeleteClientCommand, DeleteClientHandler,
    DeleteCycleCommand, DeleteCycleHandler, DeleteLogCommand, DeleteLogHandler,
    GetDashboardHandler, ListClientsHandler, ListCyclesHandler, ListLogsHandler,
    UpdateClientCommand, UpdateClientHandler, UpdateCycleCommand, UpdateCycleHandler,
    UpdateLogCommand, UpdateLogHandler,
};
