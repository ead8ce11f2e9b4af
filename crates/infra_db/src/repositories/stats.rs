//! Aggregate statistics over wiremen, bills, and points
//!
//! Backs the summary page, the per-wireman dashboard, the leaderboard,
//! and the filtered wiremen list. Aggregation happens in SQL; these
//! queries never page through rows in application code.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{Money, WiremanId};

use crate::error::DatabaseError;

/// Category by which the leaderboard ranks wiremen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardCategory {
    TotalBillAmount,
    NumberOfBills,
    BalancePoints,
    TotalPointsScored,
}

/// Key by which the wiremen list can be filtered to a value range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiremanFilterKey {
    BalancePoints,
    TotalBillAmount,
}

/// Top-level metrics across the whole system
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_wiremen: i64,
    pub total_bills: i64,
    pub total_business: Money,
}

/// Per-wireman dashboard metrics
#[derive(Debug, Clone, Serialize)]
pub struct WiremanDashboard {
    pub total_bills: i64,
    pub total_business: Money,
    pub latest_bill_date: Option<NaiveDate>,
    pub total_points: Decimal,
    pub balance_points: Decimal,
}

/// One ranked row of the leaderboard or the filtered wiremen list
#[derive(Debug, Clone, Serialize)]
pub struct RankedWireman {
    pub wireman_id: WiremanId,
    pub name: String,
    pub value: Decimal,
}

#[derive(Debug, sqlx::FromRow)]
struct RankedRow {
    wireman_id: Uuid,
    name: String,
    value: Decimal,
}

impl RankedRow {
    fn into_domain(self) -> RankedWireman {
        RankedWireman {
            wireman_id: WiremanId::from(self.wireman_id),
            name: self.name,
            value: self.value,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SummaryRow {
    total_wiremen: i64,
    total_bills: i64,
    total_business: Decimal,
}

#[derive(Debug, sqlx::FromRow)]
struct BillStatsRow {
    total_bills: i64,
    total_business: Decimal,
    latest_bill_date: Option<NaiveDate>,
}

/// Repository for aggregate statistics
#[derive(Debug, Clone)]
pub struct StatsRepository {
    pool: PgPool,
}

impl StatsRepository {
    /// Creates a new StatsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// System-wide totals: wiremen registered, bills stored, business
    /// billed
    pub async fn summary(&self) -> Result<Summary, DatabaseError> {
        let row = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM wiremen) AS total_wiremen,
                (SELECT COUNT(*) FROM bills) AS total_bills,
                (SELECT COALESCE(SUM(amount), 0) FROM bills) AS total_business
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(Summary {
            total_wiremen: row.total_wiremen,
            total_bills: row.total_bills,
            total_business: Money::new(row.total_business),
        })
    }

    /// Dashboard metrics for one wireman
    ///
    /// Wiremen without bills or without a points record report zeros; the
    /// caller decides whether the wireman itself exists.
    pub async fn wireman_dashboard(
        &self,
        wireman_id: WiremanId,
    ) -> Result<WiremanDashboard, DatabaseError> {
        let id = Uuid::from(wireman_id);

        let bill_stats = sqlx::query_as::<_, BillStatsRow>(
            r#"
            SELECT
                COUNT(bill_id) AS total_bills,
                COALESCE(SUM(amount), 0) AS total_business,
                MAX(bill_date) AS latest_bill_date
            FROM bills
            WHERE wireman_id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        let points: Option<(Decimal, Decimal)> = sqlx::query_as(
            "SELECT total_points, balance_points FROM points WHERE wireman_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let (total_points, balance_points) = points.unwrap_or((Decimal::ZERO, Decimal::ZERO));

        Ok(WiremanDashboard {
            total_bills: bill_stats.total_bills,
            total_business: Money::new(bill_stats.total_business),
            latest_bill_date: bill_stats.latest_bill_date,
            total_points,
            balance_points,
        })
    }

    /// Wiremen ranked by the given category, best first
    pub async fn leaderboard(
        &self,
        category: LeaderboardCategory,
    ) -> Result<Vec<RankedWireman>, DatabaseError> {
        let sql = match category {
            LeaderboardCategory::TotalBillAmount => {
                r#"
                SELECT w.wireman_id, w.name, COALESCE(SUM(b.amount), 0) AS value
                FROM wiremen w
                LEFT JOIN bills b ON b.wireman_id = w.wireman_id
                GROUP BY w.wireman_id, w.name
                ORDER BY value DESC, w.name
                "#
            }
            LeaderboardCategory::NumberOfBills => {
                r#"
                SELECT w.wireman_id, w.name, COUNT(b.bill_id)::numeric AS value
                FROM wiremen w
                LEFT JOIN bills b ON b.wireman_id = w.wireman_id
                GROUP BY w.wireman_id, w.name
                ORDER BY value DESC, w.name
                "#
            }
            LeaderboardCategory::BalancePoints => {
                r#"
                SELECT w.wireman_id, w.name, COALESCE(p.balance_points, 0) AS value
                FROM wiremen w
                LEFT JOIN points p ON p.wireman_id = w.wireman_id
                ORDER BY value DESC, w.name
                "#
            }
            LeaderboardCategory::TotalPointsScored => {
                r#"
                SELECT w.wireman_id, w.name, COALESCE(p.total_points, 0) AS value
                FROM wiremen w
                LEFT JOIN points p ON p.wireman_id = w.wireman_id
                ORDER BY value DESC, w.name
                "#
            }
        };

        let rows = sqlx::query_as::<_, RankedRow>(sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(RankedRow::into_domain).collect())
    }

    /// Wiremen whose value for the given key falls inside `[min, max]`
    pub async fn filter_wiremen(
        &self,
        key: WiremanFilterKey,
        min: Decimal,
        max: Decimal,
    ) -> Result<Vec<RankedWireman>, DatabaseError> {
        let sql = match key {
            WiremanFilterKey::BalancePoints => {
                r#"
                SELECT w.wireman_id, w.name, COALESCE(p.balance_points, 0) AS value
                FROM wiremen w
                LEFT JOIN points p ON p.wireman_id = w.wireman_id
                WHERE COALESCE(p.balance_points, 0) BETWEEN $1 AND $2
                ORDER BY value DESC, w.name
                "#
            }
            WiremanFilterKey::TotalBillAmount => {
                r#"
                SELECT w.wireman_id, w.name, COALESCE(SUM(b.amount), 0) AS value
                FROM wiremen w
                LEFT JOIN bills b ON b.wireman_id = w.wireman_id
                GROUP BY w.wireman_id, w.name
                HAVING COALESCE(SUM(b.amount), 0) BETWEEN $1 AND $2
                ORDER BY value DESC, w.name
                "#
            }
        };

        let rows = sqlx::query_as::<_, RankedRow>(sql)
            .bind(min)
            .bind(max)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(RankedRow::into_domain).collect())
    }
}
