//! GetDashboardHandler - Query handler fetching every list in one request.
//!
//! The three list queries run concurrently. Any one failing fails the whole
//! snapshot; partial results are never returned.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::DashboardSnapshot;
use crate::ports::{ClientRepository, CycleRepository, LogRepository};

/// The snapshot could not be assembled.
///
/// Does not say which query failed.
#[derive(Debug, thiserror::Error)]
#[error("Failed to fetch data")]
pub struct DashboardError {
    #[source]
    source: DomainError,
}

/// Handler for the aggregate dashboard read.
pub struct GetDashboardHandler {
    clients: Arc<dyn ClientRepository>,
    logs: Arc<dyn LogRepository>,
    cycles: Arc<dyn CycleRepository>,
}

impl GetDashboardHandler {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        logs: Arc<dyn LogRepository>,
        cycles: Arc<dyn CycleRepository>,
    ) -> Self {
        Self {
            clients,
            logs,
            cycles,
        }
    }

    pub async fn handle(&self) -> Result<DashboardSnapshot, DashboardError> {
        let (clients, logs, cycles) = tokio::try_join!(
            self.clients.list(),
            self.logs.list_with_client(),
            self.cycles.list_with_client(),
        )
        .map_err(|source| {
            tracing::error!(error = %source, "Error fetching dashboard data");
            DashboardError { source }
        })?;

        Ok(DashboardSnapshot {
            clients,
            logs,
            cycles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryLedger;
    use crate::domain::ClientFields;

    fn handler(ledger: &InMemoryLedger) -> GetDashboardHandler {
        GetDashboardHandler::new(
            Arc::new(ledger.clone()),
            Arc::new(ledger.clone()),
            Arc::new(ledger.clone()),
        )
    }

    #[tokio::test]
    async fn snapshot_matches_individual_lists() {
        let ledger = InMemoryLedger::new();
        ClientRepository::create(
            &ledger,
            &ClientFields::for_create(Some("Acme".to_string()), None, None).unwrap(),
        )
        .await
        .unwrap();

        let snapshot = handler(&ledger).handle().await.unwrap();

        assert_eq!(snapshot.clients, ClientRepository::list(&ledger).await.unwrap());
        assert_eq!(snapshot.logs, LogRepository::list_with_client(&ledger).await.unwrap());
        assert_eq!(snapshot.cycles, CycleRepository::list_with_client(&ledger).await.unwrap());
    }

    #[tokio::test]
    async fn any_failure_fails_the_snapshot_generically() {
        let ledger = InMemoryLedger::new();
        ledger.set_unavailable(true);

        let err = handler(&ledger).handle().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch data");
    }
}
