//! Bill repository implementation
//!
//! Read access to the bills table. All bill mutations go through the
//! ledger engine so the compensating points writes stay in the same
//! transaction; this repository only answers queries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{BillId, Money, WiremanId};
use domain_referral::Bill;

use crate::error::DatabaseError;

/// Repository for reading bills
#[derive(Debug, Clone)]
pub struct BillRepository {
    pool: PgPool,
}

/// Database row for a bill
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BillRow {
    pub bill_id: Uuid,
    pub wireman_id: Uuid,
    pub client_name: String,
    pub amount: Decimal,
    pub bill_date: NaiveDate,
    pub payment_status: String,
    pub points_earned: Decimal,
}

impl BillRow {
    pub fn into_domain(self) -> Result<Bill, DatabaseError> {
        let payment_status = self
            .payment_status
            .parse()
            .map_err(|e| DatabaseError::SerializationError(format!("{e}")))?;

        Ok(Bill {
            id: BillId::from(self.bill_id),
            wireman_id: WiremanId::from(self.wireman_id),
            client_name: self.client_name,
            amount: Money::new(self.amount),
            date: self.bill_date,
            payment_status,
            points_earned: self.points_earned,
        })
    }
}

pub(crate) const BILL_COLUMNS: &str =
    "bill_id, wireman_id, client_name, amount, bill_date, payment_status, points_earned";

impl BillRepository {
    /// Creates a new BillRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves a bill by id
    pub async fn get(&self, id: BillId) -> Result<Bill, DatabaseError> {
        let row = sqlx::query_as::<_, BillRow>(&format!(
            "SELECT {BILL_COLUMNS} FROM bills WHERE bill_id = $1"
        ))
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Bill", id))?;

        row.into_domain()
    }

    /// Lists every bill, most recent date first
    pub async fn list_all(&self) -> Result<Vec<Bill>, DatabaseError> {
        let rows = sqlx::query_as::<_, BillRow>(&format!(
            "SELECT {BILL_COLUMNS} FROM bills ORDER BY bill_date DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(BillRow::into_domain).collect()
    }

    /// Lists the bills of one wireman, most recent date first
    pub async fn list_for_wireman(&self, wireman_id: WiremanId) -> Result<Vec<Bill>, DatabaseError> {
        let rows = sqlx::query_as::<_, BillRow>(&format!(
            "SELECT {BILL_COLUMNS} FROM bills WHERE wireman_id = $1 ORDER BY bill_date DESC"
        ))
        .bind(Uuid::from(wireman_id))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(BillRow::into_domain).collect()
    }

    /// Sums the billed amount across all wiremen
    pub async fn total_billed_amount(&self) -> Result<Money, DatabaseError> {
        let total: Decimal = sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0) FROM bills")
            .fetch_one(&self.pool)
            .await?;

        Ok(Money::new(total))
    }

    /// Counts stored bills
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bills")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_referral::PaymentStatus;
    use rust_decimal_macros::dec;

    fn sample_row() -> BillRow {
        BillRow {
            bill_id: Uuid::new_v4(),
            wireman_id: Uuid::new_v4(),
            client_name: "Acme Wiring".to_string(),
            amount: dec!(2500.00),
            bill_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            payment_status: "Partially Paid".to_string(),
            points_earned: dec!(2),
        }
    }

    #[test]
    fn test_row_maps_to_domain() {
        let row = sample_row();
        let bill = row.clone().into_domain().unwrap();

        assert_eq!(bill.id.as_uuid(), &row.bill_id);
        assert_eq!(bill.amount, Money::new(dec!(2500)));
        assert_eq!(bill.payment_status, PaymentStatus::PartiallyPaid);
        assert_eq!(bill.points_earned, dec!(2));
    }

    #[test]
    fn test_row_rejects_unknown_status() {
        let mut row = sample_row();
        row.payment_status = "Overdue".to_string();

        let result = row.into_domain();
        assert!(matches!(
            result,
            Err(DatabaseError::SerializationError(_))
        ));
    }
}
