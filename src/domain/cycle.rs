//! Payment cycle entity - a batch of logs settled together for one client.
//!
//! Creating a cycle marks its logs paid and deleting it marks them unpaid
//! again. Nothing prevents one log from appearing in several cycles.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::foundation::{
    parse_date, present_amount, present_id, present_text, ClientId, CycleId, DomainError, LogId,
};

/// A persisted cycle row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    pub id: CycleId,
    pub client_id: ClientId,
    pub log_ids: Vec<LogId>,
    pub total: f64,
    pub date: NaiveDate,
}

/// A cycle row joined with its client's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleWithClient {
    #[serde(flatten)]
    pub cycle: Cycle,
    pub client_name: Option<String>,
}

/// Raw cycle values as supplied by a caller, before validation.
#[derive(Debug, Clone, Default)]
pub struct CycleInput {
    pub client_id: Option<i64>,
    pub log_ids: Option<Vec<i64>>,
    pub total: Option<f64>,
    pub date: Option<String>,
}

/// Writable cycle columns, used for both insert and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleFields {
    pub client_id: ClientId,
    pub log_ids: Vec<LogId>,
    pub total: f64,
    pub date: NaiveDate,
}

const REQUIRED_MESSAGE: &str = "Client ID, log IDs, total, and date are required";

impl CycleFields {
    /// Validates caller input. Every column is required and `log_ids` must
    /// not be empty.
    pub fn from_input(input: CycleInput) -> Result<Self, DomainError> {
        let log_ids = input.log_ids.filter(|ids| !ids.is_empty());
        let (client_id, log_ids, total, raw_date) = match (
            present_id::<ClientId>(input.client_id),
            log_ids,
            present_amount(input.total),
            present_text(input.date),
        ) {
            (Some(client_id), Some(log_ids), Some(total), Some(date)) => {
                (client_id, log_ids, total, date)
            }
            _ => return Err(DomainError::validation(REQUIRED_MESSAGE)),
        };

        Ok(Self {
            client_id,
            log_ids: log_ids.into_iter().map(LogId::new).collect(),
            total,
            date: parse_date("date", &raw_date)?,
        })
    }

    /// Raw log keys, in the order they were supplied.
    pub fn raw_log_ids(&self) -> Vec<i64> {
        self.log_ids.iter().map(LogId::value).collect()
    }

    /// Materializes a row with the given id.
    pub fn into_cycle(self, id: CycleId) -> Cycle {
        Cycle {
            id,
            client_id: self.client_id,
            log_ids: self.log_ids,
            total: self.total,
            date: self.date,
        }
    }
}
