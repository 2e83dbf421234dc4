//! Domain layer containing ledger entities and validation rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, field helpers, errors)
//! - `client` - Billed clients
//! - `work_log` - Billable work entries
//! - `cycle` - Payment cycles grouping logs
//! - `dashboard` - Combined read model for the dashboard

pub mod client;
pub mod cycle;
pub mod dashboard;
pub mod foundation;
pub mod work_log;

pub use client::{Client, ClientFields, DEFAULT_CLIENT_TYPE};
pub use cycle::{Cycle, CycleFields, CycleInput, CycleWithClient};
pub use dashboard::DashboardSnapshot;
pub use work_log::{LogFields, LogInput, LogWithClient, WorkLog};
