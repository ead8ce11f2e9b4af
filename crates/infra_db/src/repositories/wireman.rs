//! Wireman repository implementation
//!
//! Registration CRUD for referral partners. Deleting a wireman removes
//! the dependent bills and points record inside the same transaction:
//! child rows first, then the wireman, so the foreign keys hold at every
//! step and nothing survives a partial failure.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::WiremanId;
use domain_referral::Wireman;

use crate::error::DatabaseError;

/// Repository for managing wiremen
#[derive(Debug, Clone)]
pub struct WiremanRepository {
    pool: PgPool,
}

/// Database row for a wireman
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WiremanRow {
    pub wireman_id: Uuid,
    pub name: String,
    pub contact_info: String,
    pub date_registered: NaiveDate,
}

impl WiremanRow {
    pub fn into_domain(self) -> Wireman {
        Wireman {
            id: WiremanId::from(self.wireman_id),
            name: self.name,
            contact_info: self.contact_info,
            date_registered: self.date_registered,
        }
    }
}

const WIREMAN_COLUMNS: &str = "wireman_id, name, contact_info, date_registered";

impl WiremanRepository {
    /// Creates a new WiremanRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registers a new wireman
    pub async fn insert(&self, wireman: &Wireman) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO wiremen (wireman_id, name, contact_info, date_registered)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(Uuid::from(wireman.id))
        .bind(&wireman.name)
        .bind(&wireman.contact_info)
        .bind(wireman.date_registered)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(())
    }

    /// Retrieves a wireman by id
    pub async fn get(&self, id: WiremanId) -> Result<Wireman, DatabaseError> {
        let row = sqlx::query_as::<_, WiremanRow>(&format!(
            "SELECT {WIREMAN_COLUMNS} FROM wiremen WHERE wireman_id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Wireman", id))?;

        Ok(row.into_domain())
    }

    /// Lists all wiremen ordered by name
    pub async fn list(&self) -> Result<Vec<Wireman>, DatabaseError> {
        let rows = sqlx::query_as::<_, WiremanRow>(&format!(
            "SELECT {WIREMAN_COLUMNS} FROM wiremen ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(WiremanRow::into_domain).collect())
    }

    /// Returns true if the wireman exists
    pub async fn exists(&self, id: WiremanId) -> Result<bool, DatabaseError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM wiremen WHERE wireman_id = $1)")
                .bind(Uuid::from(id))
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Updates a wireman's name and contact info
    pub async fn update(
        &self,
        id: WiremanId,
        name: &str,
        contact_info: &str,
    ) -> Result<Wireman, DatabaseError> {
        let row = sqlx::query_as::<_, WiremanRow>(&format!(
            r#"
            UPDATE wiremen SET name = $2, contact_info = $3
            WHERE wireman_id = $1
            RETURNING {WIREMAN_COLUMNS}
            "#
        ))
        .bind(Uuid::from(id))
        .bind(name)
        .bind(contact_info)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Wireman", id))?;

        Ok(row.into_domain())
    }

    /// Deletes a wireman together with all associated bills and the
    /// points record
    pub async fn delete(&self, id: WiremanId) -> Result<(), DatabaseError> {
        let wireman_id = Uuid::from(id);
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM points WHERE wireman_id = $1")
            .bind(wireman_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM bills WHERE wireman_id = $1")
            .bind(wireman_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM wiremen WHERE wireman_id = $1")
            .bind(wireman_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls back the child deletes
            return Err(DatabaseError::not_found("Wireman", id));
        }

        tx.commit().await?;
        tracing::info!(%id, "wireman deleted with bills and points");
        Ok(())
    }

    /// Counts registered wiremen
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM wiremen")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
