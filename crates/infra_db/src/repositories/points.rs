//! Points repository implementation
//!
//! Read access to the per-wireman ledger records. An absent row is the
//! Absent ledger state and surfaces as `None`, never as a default row.
//! Mutations go through the ledger engine.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::WiremanId;
use domain_referral::PointsLedger;

use crate::error::DatabaseError;

/// Repository for reading points ledger records
#[derive(Debug, Clone)]
pub struct PointsRepository {
    pool: PgPool,
}

/// Database row for a ledger record
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct LedgerRow {
    pub total_points: Decimal,
    pub redeemed_points: Decimal,
    pub balance_points: Decimal,
}

impl LedgerRow {
    pub fn into_ledger(self) -> PointsLedger {
        PointsLedger {
            total_points: self.total_points,
            redeemed_points: self.redeemed_points,
            balance_points: self.balance_points,
        }
    }
}

impl PointsRepository {
    /// Creates a new PointsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves the ledger record of a wireman, or `None` if no bill has
    /// ever been submitted for them
    pub async fn for_wireman(
        &self,
        wireman_id: WiremanId,
    ) -> Result<Option<PointsLedger>, DatabaseError> {
        let row = sqlx::query_as::<_, LedgerRow>(
            r#"
            SELECT total_points, redeemed_points, balance_points
            FROM points
            WHERE wireman_id = $1
            "#,
        )
        .bind(Uuid::from(wireman_id))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(LedgerRow::into_ledger))
    }
}
