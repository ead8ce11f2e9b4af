//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more
//! meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_referral::PointsLedger;
use rust_decimal::Decimal;

/// Asserts that a ledger satisfies `balance == total - redeemed`
pub fn assert_ledger_consistent(ledger: &PointsLedger) {
    assert!(
        ledger.is_consistent(),
        "Ledger out of balance: total={}, redeemed={}, balance={}",
        ledger.total_points,
        ledger.redeemed_points,
        ledger.balance_points
    );
}

/// Asserts the three fields of a ledger record at once
pub fn assert_ledger_state(
    ledger: &PointsLedger,
    total: Decimal,
    redeemed: Decimal,
    balance: Decimal,
) {
    assert_eq!(
        (
            ledger.total_points,
            ledger.redeemed_points,
            ledger.balance_points
        ),
        (total, redeemed, balance),
        "Ledger state mismatch: expected {{total: {}, redeemed: {}, balance: {}}}, \
         got {{total: {}, redeemed: {}, balance: {}}}",
        total,
        redeemed,
        balance,
        ledger.total_points,
        ledger.redeemed_points,
        ledger.balance_points
    );
}

/// Asserts that a Money value equals the given decimal amount
pub fn assert_money_eq(actual: Money, expected: Decimal) {
    assert_eq!(
        actual,
        Money::new(expected),
        "Money mismatch: actual={}, expected={}",
        actual.amount(),
        expected
    );
}
