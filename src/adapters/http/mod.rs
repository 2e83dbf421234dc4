//! HTTP adapter - JSON API over the ledger.
//!
//! Each resource has its own module with DTOs, handlers, and routes.

pub mod clients;
pub mod cycles;
pub mod dashboard;
pub mod dto;
pub mod error;
pub mod extract;
pub mod logs;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use router::{app_router, LedgerApp};
pub use state::AppState;
