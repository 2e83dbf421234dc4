//! PostgreSQL implementation of ClientRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{ClientId, DomainError};
use crate::domain::{Client, ClientFields};
use crate::ports::ClientRepository;

/// PostgreSQL implementation of ClientRepository.
#[derive(Clone)]
pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    /// Creates a new PostgresClientRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn list(&self) -> Result<Vec<Client>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, "type", domain
            FROM clients
            ORDER BY name ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list clients", e))?;

        rows.iter().map(row_to_client).collect()
    }

    async fn create(&self, fields: &ClientFields) -> Result<Client, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO clients (name, "type", domain)
            VALUES ($1, $2, $3)
            RETURNING id, name, "type", domain
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.client_type)
        .bind(&fields.domain)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert client", e))?;

        row_to_client(&row)
    }

    async fn exists(&self, id: ClientId) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
            .bind(id.value())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to check client", e))
    }

    async fn update(
        &self,
        id: ClientId,
        fields: &ClientFields,
    ) -> Result<Option<Client>, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE clients
            SET name = $1, "type" = $2, domain = $3
            WHERE id = $4
            RETURNING id, name, "type", domain
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.client_type)
        .bind(&fields.domain)
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update client", e))?;

        row.as_ref().map(row_to_client).transpose()
    }

    async fn delete_with_dependents(&self, id: ClientId) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        // Children first; the foreign keys carry no ON DELETE CASCADE.
        sqlx::query("DELETE FROM logs WHERE client_id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete client logs", e))?;

        sqlx::query("DELETE FROM cycles WHERE client_id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete client cycles", e))?;

        sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete client", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))
    }
}

fn row_to_client(row: &PgRow) -> Result<Client, DomainError> {
    Ok(Client {
        id: ClientId::new(column(row, "id")?),
        name: column(row, "name")?,
        client_type: column(row, "type")?,
        domain: column(row, "domain")?,
    })
}
