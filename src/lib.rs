//! Billing Ledger - Client, work log, and payment cycle tracking API
//!
//! Records billable work per client, groups paid work into payment cycles,
//! and serves everything to a dashboard over a small JSON API backed by
//! PostgreSQL.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
