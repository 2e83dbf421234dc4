//! Dashboard snapshot - every list the dashboard renders, fetched together.

use serde::{Deserialize, Serialize};

use super::client::Client;
use super::cycle::CycleWithClient;
use super::work_log::LogWithClient;

/// Combined view returned by the aggregate read.
///
/// Each list carries the same ordering as its individual list operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub clients: Vec<Client>,
    pub logs: Vec<LogWithClient>,
    pub cycles: Vec<CycleWithClient>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_has_exactly_three_keys() {
        let json = serde_json::to_value(DashboardSnapshot::default()).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert!(json["clients"].is_array());
        assert!(json["logs"].is_array());
        assert!(json["cycles"].is_array());
    }
}
