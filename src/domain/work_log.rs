//! Work log entity - a billable unit of work for a client on a given date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::foundation::{parse_date, present_id, present_text, ClientId, DomainError, LogId, Timestamp};

/// A persisted log row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkLog {
    pub id: LogId,
    pub client_id: ClientId,
    pub task_type: String,
    pub details: Option<String>,
    pub date: NaiveDate,
    pub amount: f64,
    pub paid: bool,
    pub timestamp: Timestamp,
}

/// A log row joined with its client's name.
///
/// `client_name` is `None` when the referenced client no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogWithClient {
    #[serde(flatten)]
    pub log: WorkLog,
    pub client_name: Option<String>,
}

/// Raw log values as supplied by a caller, before validation.
#[derive(Debug, Clone, Default)]
pub struct LogInput {
    pub client_id: Option<i64>,
    pub task_type: Option<String>,
    pub details: Option<String>,
    pub date: Option<String>,
    pub amount: Option<f64>,
    pub paid: Option<bool>,
}

/// Writable log columns, used for both insert and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct LogFields {
    pub client_id: ClientId,
    pub task_type: String,
    pub details: Option<String>,
    pub date: NaiveDate,
    pub amount: f64,
    pub paid: bool,
}

const REQUIRED_MESSAGE: &str = "Client ID, task type, and date are required";

impl LogFields {
    /// Validates caller input.
    ///
    /// `client_id`, `task_type` and `date` are required; `amount` defaults to
    /// zero and `paid` to false.
    pub fn from_input(input: LogInput) -> Result<Self, DomainError> {
        let (client_id, task_type, raw_date) = match (
            present_id::<ClientId>(input.client_id),
            present_text(input.task_type),
            present_text(input.date),
        ) {
            (Some(client_id), Some(task_type), Some(date)) => (client_id, task_type, date),
            _ => return Err(DomainError::validation(REQUIRED_MESSAGE)),
        };

        Ok(Self {
            client_id,
            task_type,
            details: present_text(input.details),
            date: parse_date("date", &raw_date)?,
            amount: input.amount.unwrap_or(0.0),
            paid: input.paid.unwrap_or(false),
        })
    }

    /// Materializes a row with the given id and creation time.
    pub fn into_log(self, id: LogId, timestamp: Timestamp) -> WorkLog {
        WorkLog {
            id,
            client_id: self.client_id,
            task_type: self.task_type,
            details: self.details,
            date: self.date,
            amount: self.amount,
            paid: self.paid,
            timestamp,
        }
    }
}
