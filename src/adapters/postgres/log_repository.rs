//! PostgreSQL implementation of LogRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{ClientId, DomainError, LogId, Timestamp};
use crate::domain::{LogFields, LogWithClient, WorkLog};
use crate::ports::LogRepository;

/// PostgreSQL implementation of LogRepository.
#[derive(Clone)]
pub struct PostgresLogRepository {
    pool: PgPool,
}

impl PostgresLogRepository {
    /// Creates a new PostgresLogRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogRepository for PostgresLogRepository {
    async fn list_with_client(&self) -> Result<Vec<LogWithClient>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT l.id, l.client_id, l.task_type, l.details, l."date",
                   l.amount, l.paid, l."timestamp", c.name AS client_name
            FROM logs l
            LEFT JOIN clients c ON c.id = l.client_id
            ORDER BY l."date" DESC, l.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list logs", e))?;

        rows.iter()
            .map(|row| {
                Ok(LogWithClient {
                    log: row_to_log(row)?,
                    client_name: column(row, "client_name")?,
                })
            })
            .collect()
    }

    async fn create(
        &self,
        fields: &LogFields,
        timestamp: Timestamp,
    ) -> Result<WorkLog, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO logs (client_id, task_type, details, "date", amount, paid, "timestamp")
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, client_id, task_type, details, "date", amount, paid, "timestamp"
            "#,
        )
        .bind(fields.client_id.value())
        .bind(&fields.task_type)
        .bind(&fields.details)
        .bind(fields.date)
        .bind(fields.amount)
        .bind(fields.paid)
        .bind(timestamp.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert log", e))?;

        row_to_log(&row)
    }

    async fn exists(&self, id: LogId) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM logs WHERE id = $1)")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check log", e))
    }

    async fn update(&self, id: LogId, fields: &LogFields) -> Result<Option<WorkLog>, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE logs
            SET client_id = $1, task_type = $2, details = $3, "date" = $4,
                amount = $5, paid = $6
            WHERE id = $7
            RETURNING id, client_id, task_type, details, "date", amount, paid, "timestamp"
            "#,
        )
        .bind(fields.client_id.value())
        .bind(&fields.task_type)
        .bind(&fields.details)
        .bind(fields.date)
        .bind(fields.amount)
        .bind(fields.paid)
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update log", e))?;

        row.as_ref().map(row_to_log).transpose()
    }

    async fn delete(&self, id: LogId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM logs WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete log", e))?;

        Ok(())
    }
}

fn row_to_log(row: &PgRow) -> Result<WorkLog, DomainError> {
    let date: NaiveDate = column(row, "date")?;
    let timestamp: DateTime<Utc> = column(row, "timestamp")?;

    Ok(WorkLog {
        id: LogId::new(column(row, "id")?),
        client_id: ClientId::new(column(row, "client_id")?),
        task_type: column(row, "task_type")?,
        details: column(row, "details")?,
        date,
        amount: column(row, "amount")?,
        paid: column(row, "paid")?,
        timestamp: Timestamp::from_datetime(timestamp),
    })
}
