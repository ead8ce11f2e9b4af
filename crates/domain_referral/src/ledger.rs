//! Per-wireman points ledger
//!
//! Each wireman owns at most one points record, created lazily when the
//! first bill is submitted. The Absent state is represented as a missing
//! record (`Option<PointsLedger>` at the storage boundary), keeping it
//! observable rather than hidden behind a default row.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ReferralError;

/// Aggregate of a wireman's lifetime, redeemed, and available points
///
/// # Invariants
///
/// After every operation `balance_points == total_points -
/// redeemed_points`. Redemption is guarded: it never exceeds the balance
/// available at call time, and `redeemed_points` only grows through it.
/// Bill compensation is deliberately unclamped; see [`apply_delta`].
///
/// [`apply_delta`]: PointsLedger::apply_delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsLedger {
    pub total_points: Decimal,
    pub redeemed_points: Decimal,
    pub balance_points: Decimal,
}

impl PointsLedger {
    /// Opens a ledger with the first accrual already applied
    pub fn opened_with(points: Decimal) -> Self {
        Self {
            total_points: points,
            redeemed_points: dec!(0),
            balance_points: points,
        }
    }

    /// Adds newly earned points to total and balance
    pub fn accrue(&mut self, points: Decimal) {
        self.apply_delta(points);
    }

    /// Applies a signed adjustment from a bill amendment or deletion
    ///
    /// The subtraction is not clamped at zero: removing or shrinking a
    /// bill whose points were already redeemed leaves `balance_points`
    /// negative (and `redeemed_points` above `total_points`), surfacing
    /// the shortfall instead of hiding it. `balance == total - redeemed`
    /// still holds.
    pub fn apply_delta(&mut self, delta: Decimal) {
        self.total_points += delta;
        self.balance_points += delta;
    }

    /// Redeems a specific number of points from the balance
    ///
    /// The guard is `0 <= points <= balance_points`, checked before any
    /// mutation. Redeeming zero points is accepted and changes nothing.
    pub fn redeem(&mut self, points: Decimal) -> Result<(), ReferralError> {
        if points < dec!(0) || points > self.balance_points {
            return Err(ReferralError::InvalidRedemption {
                requested: points,
                available: self.balance_points,
            });
        }
        self.redeemed_points += points;
        self.balance_points -= points;
        Ok(())
    }

    /// Redeems the entire balance
    ///
    /// Sets `redeemed_points = total_points` and zeroes the balance,
    /// absorbing any negative balance left by earlier compensation.
    pub fn redeem_all(&mut self) {
        self.redeemed_points = self.total_points;
        self.balance_points = dec!(0);
    }

    /// Zeroes the record. Irreversible.
    pub fn reset(&mut self) {
        self.total_points = dec!(0);
        self.redeemed_points = dec!(0);
        self.balance_points = dec!(0);
    }

    /// True when the balance equals total minus redeemed
    pub fn is_consistent(&self) -> bool {
        self.balance_points == self.total_points - self.redeemed_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opened_with_first_accrual() {
        let ledger = PointsLedger::opened_with(dec!(3));

        assert_eq!(ledger.total_points, dec!(3));
        assert_eq!(ledger.redeemed_points, dec!(0));
        assert_eq!(ledger.balance_points, dec!(3));
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_redeem_guards_balance() {
        let mut ledger = PointsLedger {
            total_points: dec!(10),
            redeemed_points: dec!(2),
            balance_points: dec!(8),
        };

        ledger.redeem(dec!(8)).unwrap();
        assert_eq!(ledger.redeemed_points, dec!(10));
        assert_eq!(ledger.balance_points, dec!(0));

        let err = ledger.redeem(dec!(1)).unwrap_err();
        assert!(matches!(err, ReferralError::InvalidRedemption { .. }));
    }
}
