//! Bill entity and payment status

use chrono::NaiveDate;
use core_kernel::{BillId, Money, WiremanId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::accrual::points_for_amount;
use crate::error::ReferralError;

/// Payment status of a bill
///
/// The serialized forms are the literal strings the records table stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    #[serde(rename = "Partially Paid")]
    PartiallyPaid,
    #[serde(rename = "Not paid")]
    NotPaid,
}

impl PaymentStatus {
    /// Returns the stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::PartiallyPaid => "Partially Paid",
            PaymentStatus::NotPaid => "Not paid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = ReferralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Paid" => Ok(PaymentStatus::Paid),
            "Partially Paid" => Ok(PaymentStatus::PartiallyPaid),
            "Not paid" => Ok(PaymentStatus::NotPaid),
            other => Err(ReferralError::validation(format!(
                "Unknown payment status: '{}'",
                other
            ))),
        }
    }
}

/// A client bill submitted on behalf of a wireman
///
/// `points_earned` is a snapshot of the accrual rule applied to `amount`
/// at the time of the last write, never recomputed lazily: compensating
/// ledger adjustments on amendment and deletion rely on the stored value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub wireman_id: WiremanId,
    pub client_name: String,
    pub amount: Money,
    pub date: NaiveDate,
    pub payment_status: PaymentStatus,
    pub points_earned: Decimal,
}

impl Bill {
    /// Creates a new bill with its points snapshot computed
    pub fn new(
        wireman_id: WiremanId,
        client_name: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        payment_status: PaymentStatus,
    ) -> Self {
        Self {
            id: BillId::new_v7(),
            wireman_id,
            client_name: client_name.into(),
            amount,
            date,
            payment_status,
            points_earned: points_for_amount(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_bill_snapshots_points() {
        let bill = Bill::new(
            WiremanId::new(),
            "Acme Wiring",
            Money::new(dec!(3500)),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            PaymentStatus::Paid,
        );

        assert_eq!(bill.points_earned, dec!(3));
    }

    #[test]
    fn test_payment_status_round_trip() {
        for status in [
            PaymentStatus::Paid,
            PaymentStatus::PartiallyPaid,
            PaymentStatus::NotPaid,
        ] {
            let parsed: PaymentStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_payment_status_rejects_unknown() {
        let result = "Pending".parse::<PaymentStatus>();
        assert!(matches!(result, Err(ReferralError::Validation(_))));
    }
}
