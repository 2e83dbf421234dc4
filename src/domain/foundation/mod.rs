//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, field helpers, and error types
//! that form the vocabulary of the billing ledger.

mod errors;
mod fields;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use fields::{parse_date, present_amount, present_id, present_text};
pub use ids::{ClientId, CycleId, LogId};
pub use timestamp::Timestamp;
