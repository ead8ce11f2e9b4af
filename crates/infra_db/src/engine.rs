//! The transactional points ledger engine
//!
//! Applies bill lifecycle events (create, update, delete) and redemption
//! events (specific, all, reset) to the bills table and the per-wireman
//! points ledger. Every public operation runs in one database
//! transaction: the bill write and the compensating points write commit
//! together, and any failure before commit rolls both back. Callers never
//! see partial state and never need to compensate manually.
//!
//! Concurrent operations on the same wireman are serialized by a
//! `SELECT ... FOR UPDATE` lock on the points row; racing first-bill
//! inserts are serialized by the unique constraint on
//! `points.wireman_id`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use thiserror::Error;
use uuid::Uuid;

use core_kernel::{BillId, Money, PointsRecordId, WiremanId};
use domain_referral::{
    points_for_amount, validate_bill_input, Bill, PaymentStatus, PointsLedger, ReferralError,
};

use crate::error::DatabaseError;
use crate::repositories::bill::{BillRepository, BillRow, BILL_COLUMNS};
use crate::repositories::points::{LedgerRow, PointsRepository};

/// Errors surfaced by ledger engine operations
///
/// `Validation`, `NotFound`, and `InvalidRedemption` are rejected before
/// any mutation; `Storage` means the transaction failed and was rolled
/// back in full.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Cannot redeem {requested} points: only {available} available")]
    InvalidRedemption {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),
}

impl From<ReferralError> for EngineError {
    fn from(err: ReferralError) -> Self {
        match err {
            ReferralError::Validation(msg) => EngineError::Validation(msg),
            ReferralError::NotFound(msg) => EngineError::NotFound(msg),
            ReferralError::InvalidRedemption {
                requested,
                available,
            } => EngineError::InvalidRedemption {
                requested,
                available,
            },
        }
    }
}

impl From<sqlx::Error> for EngineError {
    fn from(err: sqlx::Error) -> Self {
        EngineError::Storage(DatabaseError::from(&err))
    }
}

/// The points ledger engine
///
/// Owns the connection pool handle and is the only writer of the bills
/// and points tables. Cheap to clone; one instance is shared across
/// request handlers.
#[derive(Debug, Clone)]
pub struct LedgerEngine {
    pool: PgPool,
    bills: BillRepository,
    points: PointsRepository,
}

impl LedgerEngine {
    /// Creates a new LedgerEngine on the given connection pool
    pub fn new(pool: PgPool) -> Self {
        let bills = BillRepository::new(pool.clone());
        let points = PointsRepository::new(pool.clone());
        Self {
            pool,
            bills,
            points,
        }
    }

    // ------------------------------------------------------------------
    // Bill lifecycle
    // ------------------------------------------------------------------

    /// Submits a new bill and accrues its points
    ///
    /// Validates input before touching storage, verifies the wireman
    /// exists, inserts the bill with its points snapshot, and upserts the
    /// wireman's ledger record: created on the first bill, otherwise the
    /// earned points are added to total and balance. The returned bill
    /// carries `points_earned`.
    pub async fn create_bill(
        &self,
        wireman_id: WiremanId,
        client_name: &str,
        amount: Money,
        date: NaiveDate,
        payment_status: PaymentStatus,
    ) -> Result<Bill, EngineError> {
        validate_bill_input(client_name, amount)?;

        let wid = Uuid::from(wireman_id);
        let mut tx = self.pool.begin().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM wiremen WHERE wireman_id = $1)")
                .bind(wid)
                .fetch_one(&mut *tx)
                .await?;
        if !exists {
            return Err(EngineError::NotFound(format!(
                "Wireman with id '{wireman_id}' not found"
            )));
        }

        let bill = Bill::new(wireman_id, client_name, amount, date, payment_status);

        sqlx::query(
            r#"
            INSERT INTO bills (bill_id, wireman_id, client_name, amount, bill_date,
                               payment_status, points_earned)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(Uuid::from(bill.id))
        .bind(wid)
        .bind(&bill.client_name)
        .bind(bill.amount.amount())
        .bind(bill.date)
        .bind(bill.payment_status.as_str())
        .bind(bill.points_earned)
        .execute(&mut *tx)
        .await?;

        match fetch_ledger_for_update(&mut tx, wid).await? {
            Some(mut ledger) => {
                ledger.accrue(bill.points_earned);
                store_ledger(&mut tx, wid, ledger).await?;
            }
            None => {
                let ledger = PointsLedger::opened_with(bill.points_earned);
                insert_ledger(&mut tx, wid, ledger).await?;
            }
        }

        tx.commit().await?;
        tracing::info!(
            %wireman_id,
            bill_id = %bill.id,
            points = %bill.points_earned,
            "bill created"
        );
        Ok(bill)
    }

    /// Overwrites a bill and applies the points delta to the ledger
    ///
    /// `delta = points(new amount) - stored snapshot`; the delta may be
    /// negative and is applied without clamping. A wireman without a
    /// points record is tolerated silently: there is no ledger to adjust.
    pub async fn update_bill(
        &self,
        bill_id: BillId,
        client_name: &str,
        amount: Money,
        date: NaiveDate,
        payment_status: PaymentStatus,
    ) -> Result<Bill, EngineError> {
        // The update path takes the same gate as creation, so a zero or
        // negative amount cannot slip in as a negative delta.
        validate_bill_input(client_name, amount)?;

        let mut tx = self.pool.begin().await?;

        let row = fetch_bill_for_update(&mut tx, Uuid::from(bill_id))
            .await?
            .ok_or_else(|| {
                EngineError::NotFound(format!("Bill with id '{bill_id}' not found"))
            })?;

        let new_points = points_for_amount(amount);
        let delta = new_points - row.points_earned;

        sqlx::query(
            r#"
            UPDATE bills
            SET client_name = $2, amount = $3, bill_date = $4, payment_status = $5,
                points_earned = $6
            WHERE bill_id = $1
            "#,
        )
        .bind(row.bill_id)
        .bind(client_name)
        .bind(amount.amount())
        .bind(date)
        .bind(payment_status.as_str())
        .bind(new_points)
        .execute(&mut *tx)
        .await?;

        if let Some(mut ledger) = fetch_ledger_for_update(&mut tx, row.wireman_id).await? {
            ledger.apply_delta(delta);
            store_ledger(&mut tx, row.wireman_id, ledger).await?;
        }

        tx.commit().await?;
        tracing::info!(%bill_id, %delta, "bill updated");

        Ok(Bill {
            id: bill_id,
            wireman_id: WiremanId::from(row.wireman_id),
            client_name: client_name.to_string(),
            amount,
            date,
            payment_status,
            points_earned: new_points,
        })
    }

    /// Deletes a bill, reclaiming its points snapshot from the ledger
    pub async fn delete_bill(&self, bill_id: BillId) -> Result<(), EngineError> {
        let mut tx = self.pool.begin().await?;

        let row = fetch_bill_for_update(&mut tx, Uuid::from(bill_id))
            .await?
            .ok_or_else(|| {
                EngineError::NotFound(format!("Bill with id '{bill_id}' not found"))
            })?;

        if let Some(mut ledger) = fetch_ledger_for_update(&mut tx, row.wireman_id).await? {
            ledger.apply_delta(-row.points_earned);
            store_ledger(&mut tx, row.wireman_id, ledger).await?;
        }

        sqlx::query("DELETE FROM bills WHERE bill_id = $1")
            .bind(row.bill_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(%bill_id, points = %row.points_earned, "bill deleted");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Redemption
    // ------------------------------------------------------------------

    /// Redeems a specific number of points from a wireman's balance
    ///
    /// The `0 <= points <= balance` guard runs before any mutation;
    /// exceeding the balance is rejected as `InvalidRedemption`.
    pub async fn redeem_specific(
        &self,
        wireman_id: WiremanId,
        points: Decimal,
    ) -> Result<(), EngineError> {
        let wid = Uuid::from(wireman_id);
        let mut tx = self.pool.begin().await?;

        let mut ledger = fetch_ledger_for_update(&mut tx, wid)
            .await?
            .ok_or_else(|| points_record_not_found(wireman_id))?;

        ledger.redeem(points)?;
        store_ledger(&mut tx, wid, ledger).await?;

        tx.commit().await?;
        tracing::info!(%wireman_id, %points, "points redeemed");
        Ok(())
    }

    /// Redeems a wireman's entire balance
    pub async fn redeem_all(&self, wireman_id: WiremanId) -> Result<(), EngineError> {
        let wid = Uuid::from(wireman_id);
        let mut tx = self.pool.begin().await?;

        let mut ledger = fetch_ledger_for_update(&mut tx, wid)
            .await?
            .ok_or_else(|| points_record_not_found(wireman_id))?;

        ledger.redeem_all();
        store_ledger(&mut tx, wid, ledger).await?;

        tx.commit().await?;
        tracing::info!(%wireman_id, "all points redeemed");
        Ok(())
    }

    /// Zeroes a wireman's entire points record. Irreversible.
    pub async fn reset_points(&self, wireman_id: WiremanId) -> Result<(), EngineError> {
        let wid = Uuid::from(wireman_id);
        let mut tx = self.pool.begin().await?;

        let mut ledger = fetch_ledger_for_update(&mut tx, wid)
            .await?
            .ok_or_else(|| points_record_not_found(wireman_id))?;

        ledger.reset();
        store_ledger(&mut tx, wid, ledger).await?;

        tx.commit().await?;
        tracing::info!(%wireman_id, "points reset");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// The wireman's ledger record, or `None` while no bill has been
    /// submitted for them
    pub async fn ledger(&self, wireman_id: WiremanId) -> Result<Option<PointsLedger>, EngineError> {
        Ok(self.points.for_wireman(wireman_id).await?)
    }

    /// The wireman's bills, most recent date first
    pub async fn bills_for_wireman(&self, wireman_id: WiremanId) -> Result<Vec<Bill>, EngineError> {
        Ok(self.bills.list_for_wireman(wireman_id).await?)
    }

    /// Every bill, most recent date first
    pub async fn all_bills(&self) -> Result<Vec<Bill>, EngineError> {
        Ok(self.bills.list_all().await?)
    }

    /// Sum of billed amounts across all wiremen
    pub async fn total_billed_amount(&self) -> Result<Money, EngineError> {
        Ok(self.bills.total_billed_amount().await?)
    }
}

fn points_record_not_found(wireman_id: WiremanId) -> EngineError {
    EngineError::NotFound(format!(
        "Points record for wireman '{wireman_id}' not found"
    ))
}

/// Reads a bill row under a row lock, keeping the snapshot stable until
/// the transaction ends
async fn fetch_bill_for_update(
    tx: &mut Transaction<'_, Postgres>,
    bill_id: Uuid,
) -> Result<Option<BillRow>, EngineError> {
    let row = sqlx::query_as::<_, BillRow>(&format!(
        "SELECT {BILL_COLUMNS} FROM bills WHERE bill_id = $1 FOR UPDATE"
    ))
    .bind(bill_id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(row)
}

/// Reads the wireman's ledger under a row lock, serializing concurrent
/// accruals and redemptions on the same record
async fn fetch_ledger_for_update(
    tx: &mut Transaction<'_, Postgres>,
    wireman_id: Uuid,
) -> Result<Option<PointsLedger>, EngineError> {
    let row = sqlx::query_as::<_, LedgerRow>(
        r#"
        SELECT total_points, redeemed_points, balance_points
        FROM points
        WHERE wireman_id = $1
        FOR UPDATE
        "#,
    )
    .bind(wireman_id)
    .fetch_optional(&mut **tx)
    .await?;

    Ok(row.map(LedgerRow::into_ledger))
}

async fn store_ledger(
    tx: &mut Transaction<'_, Postgres>,
    wireman_id: Uuid,
    ledger: PointsLedger,
) -> Result<(), EngineError> {
    sqlx::query(
        r#"
        UPDATE points
        SET total_points = $2, redeemed_points = $3, balance_points = $4
        WHERE wireman_id = $1
        "#,
    )
    .bind(wireman_id)
    .bind(ledger.total_points)
    .bind(ledger.redeemed_points)
    .bind(ledger.balance_points)
    .execute(&mut **tx)
    .await?;

    Ok(())
}

async fn insert_ledger(
    tx: &mut Transaction<'_, Postgres>,
    wireman_id: Uuid,
    ledger: PointsLedger,
) -> Result<(), EngineError> {
    sqlx::query(
        r#"
        INSERT INTO points (points_id, wireman_id, total_points, redeemed_points, balance_points)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(Uuid::from(PointsRecordId::new()))
    .bind(wireman_id)
    .bind(ledger.total_points)
    .bind(ledger.redeemed_points)
    .bind(ledger.balance_points)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
