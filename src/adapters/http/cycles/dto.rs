//! HTTP DTOs for cycle endpoints.

use serde::Deserialize;

use crate::adapters::http::dto::{number_or_string, numbers_or_strings};
use crate::application::handlers::{CreateCycleCommand, UpdateCycleCommand};
use crate::domain::foundation::present_id;
use crate::domain::CycleInput;

/// Body of POST and PUT /cycles.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleRequest {
    #[serde(default, deserialize_with = "number_or_string")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub client_id: Option<i64>,
    #[serde(default, deserialize_with = "numbers_or_strings")]
    pub log_ids: Option<Vec<i64>>,
    #[serde(default, deserialize_with = "number_or_string")]
    pub total: Option<f64>,
    pub date: Option<String>,
}

impl CycleRequest {
    fn input(self) -> CycleInput {
        CycleInput {
            client_id: self.client_id,
            log_ids: self.log_ids,
            total: self.total,
            date: self.date,
        }
    }

    pub fn into_create_command(self) -> CreateCycleCommand {
        CreateCycleCommand { input: self.input() }
    }

    pub fn into_update_command(self) -> UpdateCycleCommand {
        UpdateCycleCommand {
            id: present_id(self.id),
            input: self.input(),
        }
    }
}
