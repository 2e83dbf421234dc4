//! Shared application state for the ledger routes.

use std::sync::Arc;

use sqlx::PgPool;

use crate::adapters::memory::InMemoryLedger;
use crate::adapters::postgres::{
    PostgresClientRepository, PostgresCycleRepository, PostgresLogRepository,
};
use crate::application::handlers::{
    CreateClientHandler, CreateCycleHandler, CreateLogHandler, DeleteClientHandler,
    DeleteCycleHandler, DeleteLogHandler, GetDashboardHandler, ListClientsHandler,
    ListCyclesHandler, ListLogsHandler, UpdateClientHandler, UpdateCycleHandler, UpdateLogHandler,
};
use crate::domain::foundation::DomainError;
use crate::ports::{ClientRepository, CycleRepository, LogRepository};

use super::error::ApiError;

/// Repositories behind the API plus response settings.
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<dyn ClientRepository>,
    pub logs: Arc<dyn LogRepository>,
    pub cycles: Arc<dyn CycleRepository>,
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        logs: Arc<dyn LogRepository>,
        cycles: Arc<dyn CycleRepository>,
    ) -> Self {
        Self {
            clients,
            logs,
            cycles,
            expose_error_details: true,
        }
    }

    /// State backed by PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresClientRepository::new(pool.clone())),
            Arc::new(PostgresLogRepository::new(pool.clone())),
            Arc::new(PostgresCycleRepository::new(pool)),
        )
    }

    /// State backed by a single in-memory ledger.
    pub fn in_memory(ledger: InMemoryLedger) -> Self {
        let ledger = Arc::new(ledger);
        Self::new(ledger.clone(), ledger.clone(), ledger)
    }

    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.expose_error_details = expose;
        self
    }

    /// Converts a domain error using this state's detail setting.
    pub fn reject(&self, err: DomainError) -> ApiError {
        ApiError::from_domain(err, self.expose_error_details)
    }

    pub fn list_clients_handler(&self) -> ListClientsHandler {
        ListClientsHandler::new(self.clients.clone())
    }

    pub fn create_client_handler(&self) -> CreateClientHandler {
        CreateClientHandler::new(self.clients.clone())
    }

    pub fn update_client_handler(&self) -> UpdateClientHandler {
        UpdateClientHandler::new(self.clients.clone())
    }

    pub fn delete_client_handler(&self) -> DeleteClientHandler {
        DeleteClientHandler::new(self.clients.clone())
    }

    pub fn list_logs_handler(&self) -> ListLogsHandler {
        ListLogsHandler::new(self.logs.clone())
    }

    pub fn create_log_handler(&self) -> CreateLogHandler {
        CreateLogHandler::new(self.logs.clone())
    }

    pub fn update_log_handler(&self) -> UpdateLogHandler {
        UpdateLogHandler::new(self.logs.clone())
    }

    pub fn delete_log_handler(&self) -> DeleteLogHandler {
        DeleteLogHandler::new(self.logs.clone())
    }

    pub fn list_cycles_handler(&self) -> ListCyclesHandler {
        ListCyclesHandler::new(self.cycles.clone())
    }

    pub fn create_cycle_handler(&self) -> CreateCycleHandler {
        CreateCycleHandler::new(self.cycles.clone())
    }

    pub fn update_cycle_handler(&self) -> UpdateCycleHandler {
        UpdateCycleHandler::new(self.cycles.clone())
    }

    pub fn delete_cycle_handler(&self) -> DeleteCycleHandler {
        DeleteCycleHandler::new(self.cycles.clone())
    }

    pub fn dashboard_handler(&self) -> GetDashboardHandler {
        GetDashboardHandler::new(self.clients.clone(), self.logs.clone(), self.cycles.clone())
    }
}
