//! Work log command and query handlers.

mod create_log;
mod delete_log;
mod list_logs;
mod update_log;

pub use create_log::{CreateLogCommand, CreateLogHandler};
pub use delete_log::{DeleteLogCommand, DeleteLogHandler};
pub use list_logs::ListLogsHandler;
pub use update_log::{UpdateLogCommand, UpdateLogHandler};
