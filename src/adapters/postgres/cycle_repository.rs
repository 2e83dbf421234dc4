//! PostgreSQL implementation of CycleRepository.
//!
//! Cycles store their log keys as a JSONB array. The paid flags of those logs
//! are updated in the same transaction as the cycle row.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{ClientId, CycleId, DomainError, LogId};
use crate::domain::{Cycle, CycleFields, CycleWithClient};
use crate::ports::CycleRepository;

/// PostgreSQL implementation of CycleRepository.
#[derive(Clone)]
pub struct PostgresCycleRepository {
    pool: PgPool,
}

impl PostgresCycleRepository {
    /// Creates a new PostgresCycleRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CycleRepository for PostgresCycleRepository {
    async fn list_with_client(&self) -> Result<Vec<CycleWithClient>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT cy.id, cy.client_id, cy.log_ids, cy.total, cy."date",
                   c.name AS client_name
            FROM cycles cy
            LEFT JOIN clients c ON c.id = cy.client_id
            ORDER BY cy."date" DESC, cy.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list cycles", e))?;

        rows.iter()
            .map(|row| {
                Ok(CycleWithClient {
                    cycle: row_to_cycle(row)?,
                    client_name: column(row, "client_name")?,
                })
            })
            .collect()
    }

    async fn create_and_mark_paid(&self, fields: &CycleFields) -> Result<Cycle, DomainError> {
        let log_ids = fields.raw_log_ids();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let row = sqlx::query(
            r#"
            INSERT INTO cycles (client_id, log_ids, total, "date")
            VALUES ($1, $2, $3, $4)
            RETURNING id, client_id, log_ids, total, "date"
            "#,
        )
        .bind(fields.client_id.value())
        .bind(Json(&log_ids))
        .bind(fields.total)
        .bind(fields.date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert cycle", e))?;

        sqlx::query("UPDATE logs SET paid = TRUE WHERE id = ANY($1)")
            .bind(&log_ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to mark logs paid", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        row_to_cycle(&row)
    }

    async fn exists(&self, id: CycleId) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM cycles WHERE id = $1)")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check cycle", e))
    }

    async fn update(
        &self,
        id: CycleId,
        fields: &CycleFields,
    ) -> Result<Option<Cycle>, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE cycles
            SET client_id = $1, log_ids = $2, total = $3, "date" = $4
            WHERE id = $5
            RETURNING id, client_id, log_ids, total, "date"
            "#,
        )
        .bind(fields.client_id.value())
        .bind(Json(fields.raw_log_ids()))
        .bind(fields.total)
        .bind(fields.date)
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update cycle", e))?;

        row.as_ref().map(row_to_cycle).transpose()
    }

    async fn delete_and_unmark_paid(&self, id: CycleId) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let row = sqlx::query("SELECT log_ids FROM cycles WHERE id = $1 FOR UPDATE")
            .bind(id.value())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to fetch cycle", e))?;

        let Some(row) = row else {
            return Ok(false);
        };
        let Json(log_ids): Json<Vec<i64>> = column(&row, "log_ids")?;

        sqlx::query("UPDATE logs SET paid = FALSE WHERE id = ANY($1)")
            .bind(&log_ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to mark logs unpaid", e))?;

        sqlx::query("DELETE FROM cycles WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete cycle", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        Ok(true)
    }
}

fn row_to_cycle(row: &PgRow) -> Result<Cycle, DomainError> {
    let Json(log_ids): Json<Vec<i64>> = column(row, "log_ids")?;

    Ok(Cycle {
        id: CycleId::new(column(row, "id")?),
        client_id: ClientId::new(column(row, "client_id")?),
        log_ids: log_ids.into_iter().map(LogId::new).collect(),
        total: column(row, "total")?,
        date: column(row, "date")?,
    })
}
