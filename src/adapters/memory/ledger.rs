//! In-Memory Ledger Adapter
//!
//! Stores clients, logs, and cycles in one set of tables behind a single lock,
//! so multi-table writes are applied atomically. Foreign keys are checked the
//! way the PostgreSQL schema checks them.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ClientId, CycleId, DomainError, ErrorCode, LogId, Timestamp};
use crate::domain::{
    Client, ClientFields, Cycle, CycleFields, CycleWithClient, LogFields, LogWithClient, WorkLog,
};
use crate::ports::{ClientRepository, CycleRepository, LogRepository};

#[derive(Debug, Default)]
struct LedgerTables {
    clients: BTreeMap<ClientId, Client>,
    logs: BTreeMap<LogId, WorkLog>,
    cycles: BTreeMap<CycleId, Cycle>,
    last_client_id: i64,
    last_log_id: i64,
    last_cycle_id: i64,
}

impl LedgerTables {
    fn client_name(&self, id: ClientId) -> Option<String> {
        self.clients.get(&id).map(|c| c.name.clone())
    }

    fn ensure_client(&self, id: ClientId, table: &str) -> Result<(), DomainError> {
        if self.clients.contains_key(&id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!(
                    "insert or update on table \"{}\" violates foreign key constraint: client {} does not exist",
                    table, id
                ),
            ))
        }
    }

    fn set_paid(&mut self, ids: &[LogId], paid: bool) {
        for id in ids {
            if let Some(log) = self.logs.get_mut(id) {
                log.paid = paid;
            }
        }
    }
}

/// In-memory storage for the whole ledger.
///
/// Cloning shares the underlying tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    tables: Arc<RwLock<LedgerTables>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation fail with a database error (useful for tests).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(DomainError::new(
                ErrorCode::DatabaseError,
                "connection refused: ledger storage unavailable",
            ))
        } else {
            Ok(())
        }
    }

    /// Fetch a single log by id.
    pub async fn log(&self, id: LogId) -> Option<WorkLog> {
        self.tables.read().await.logs.get(&id).cloned()
    }

    /// Fetch a single cycle by id.
    pub async fn cycle(&self, id: CycleId) -> Option<Cycle> {
        self.tables.read().await.cycles.get(&id).cloned()
    }

    /// Number of stored clients, logs, and cycles.
    pub async fn row_counts(&self) -> (usize, usize, usize) {
        let tables = self.tables.read().await;
        (tables.clients.len(), tables.logs.len(), tables.cycles.len())
    }
}

#[async_trait]
impl ClientRepository for InMemoryLedger {
    async fn list(&self) -> Result<Vec<Client>, DomainError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        let mut clients: Vec<Client> = tables.clients.values().cloned().collect();
        clients.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(clients)
    }

    async fn create(&self, fields: &ClientFields) -> Result<Client, DomainError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        tables.last_client_id += 1;
        let client = fields.clone().into_client(ClientId::new(tables.last_client_id));
        tables.clients.insert(client.id, client.clone());
        Ok(client)
    }

    async fn exists(&self, id: ClientId) -> Result<bool, DomainError> {
        self.check_available()?;
        Ok(self.tables.read().await.clients.contains_key(&id))
    }

    async fn update(
        &self,
        id: ClientId,
        fields: &ClientFields,
    ) -> Result<Option<Client>, DomainError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        match tables.clients.get_mut(&id) {
            Some(existing) => {
                *existing = fields.clone().into_client(id);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_with_dependents(&self, id: ClientId) -> Result<(), DomainError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        tables.logs.retain(|_, log| log.client_id != id);
        tables.cycles.retain(|_, cycle| cycle.client_id != id);
        tables.clients.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl LogRepository for InMemoryLedger {
    async fn list_with_client(&self) -> Result<Vec<LogWithClient>, DomainError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        let mut logs: Vec<LogWithClient> = tables
            .logs
            .values()
            .map(|log| LogWithClient {
                client_name: tables.client_name(log.client_id),
                log: log.clone(),
            })
            .collect();
        logs.sort_by_key(|row| (Reverse(row.log.date), Reverse(row.log.id)));
        Ok(logs)
    }

    async fn create(
        &self,
        fields: &LogFields,
        timestamp: Timestamp,
    ) -> Result<WorkLog, DomainError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        tables.ensure_client(fields.client_id, "logs")?;
        tables.last_log_id += 1;
        let log = fields.clone().into_log(LogId::new(tables.last_log_id), timestamp);
        tables.logs.insert(log.id, log.clone());
        Ok(log)
    }

    async fn exists(&self, id: LogId) -> Result<bool, DomainError> {
        self.check_available()?;
        Ok(self.tables.read().await.logs.contains_key(&id))
    }

    async fn update(&self, id: LogId, fields: &LogFields) -> Result<Option<WorkLog>, DomainError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        let Some(timestamp) = tables.logs.get(&id).map(|log| log.timestamp) else {
            return Ok(None);
        };
        tables.ensure_client(fields.client_id, "logs")?;
        let log = fields.clone().into_log(id, timestamp);
        tables.logs.insert(id, log.clone());
        Ok(Some(log))
    }

    async fn delete(&self, id: LogId) -> Result<(), DomainError> {
        self.check_available()?;
        self.tables.write().await.logs.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CycleRepository for InMemoryLedger {
    async fn list_with_client(&self) -> Result<Vec<CycleWithClient>, DomainError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        let mut cycles: Vec<CycleWithClient> = tables
            .cycles
            .values()
            .map(|cycle| CycleWithClient {
                client_name: tables.client_name(cycle.client_id),
                cycle: cycle.clone(),
            })
            .collect();
        cycles.sort_by_key(|row| (Reverse(row.cycle.date), Reverse(row.cycle.id)));
        Ok(cycles)
    }

    async fn create_and_mark_paid(&self, fields: &CycleFields) -> Result<Cycle, DomainError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        tables.ensure_client(fields.client_id, "cycles")?;
        tables.last_cycle_id += 1;
        let cycle = fields.clone().into_cycle(CycleId::new(tables.last_cycle_id));
        tables.cycles.insert(cycle.id, cycle.clone());
        tables.set_paid(&cycle.log_ids, true);
        Ok(cycle)
    }

    async fn exists(&self, id: CycleId) -> Result<bool, DomainError> {
        self.check_available()?;
        Ok(self.tables.read().await.cycles.contains_key(&id))
    }

    async fn update(
        &self,
        id: CycleId,
        fields: &CycleFields,
    ) -> Result<Option<Cycle>, DomainError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        if !tables.cycles.contains_key(&id) {
            return Ok(None);
        }
        tables.ensure_client(fields.client_id, "cycles")?;
        let cycle = fields.clone().into_cycle(id);
        tables.cycles.insert(id, cycle.clone());
        Ok(Some(cycle))
    }

    async fn delete_and_unmark_paid(&self, id: CycleId) -> Result<bool, DomainError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        match tables.cycles.remove(&id) {
            Some(cycle) => {
                tables.set_paid(&cycle.log_ids, false);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
