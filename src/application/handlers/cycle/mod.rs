//! Payment cycle command and query handlers.

mod create_cycle;
mod delete_cycle;
mod list_cycles;
mod update_cycle;

pub use create_cycle::{CreateCycleCommand, CreateCycleHandler};
pub use delete_cycle::{DeleteCycleCommand, DeleteCycleHandler};
pub use list_cycles::ListCyclesHandler;
pub use update_cycle::{UpdateCycleCommand, UpdateCycleHandler};
