//! HTTP DTOs for log endpoints.

use serde::Deserialize;

use crate::adapters::http::dto::number_or_string;
use crate::application::handlers::{CreateLogCommand, UpdateLogCommand};
use crate::domain::foundation::present_id;
use crate::domain::LogInput;

/// Body of POST and PUT /logs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRequest {
    #[serde(default, deserialize_with = "number_or_string")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub client_id: Option<i64>,
    pub task_type: Option<String>,
    pub details: Option<String>,
    pub date: Option<String>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub amount: Option<f64>,
    pub paid: Option<bool>,
}

impl LogRequest {
    fn input(self) -> LogInput {
        LogInput {
            client_id: self.client_id,
            task_type: self.task_type,
            details: self.details,
            date: self.date,
            amount: self.amount,
            paid: self.paid,
        }
    }

    pub fn into_create_command(self) -> CreateLogCommand {
        CreateLogCommand { input: self.input() }
    }

    pub fn into_update_command(self) -> UpdateLogCommand {
        UpdateLogCommand {
            id: present_id(self.id),
            input: self.input(),
        }
    }
}
