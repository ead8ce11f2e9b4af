//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that respects
//! domain constraints.

use core_kernel::Money;
use domain_referral::PaymentStatus;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for bill amounts in minor units (paise), strictly positive
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for valid bill amounts
pub fn bill_amount_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(Money::from_minor)
}

/// Strategy for non-negative whole points values
pub fn points_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000).prop_map(|n| Decimal::new(n, 0))
}

/// Strategy for payment statuses
pub fn payment_status_strategy() -> impl Strategy<Value = PaymentStatus> {
    prop_oneof![
        Just(PaymentStatus::Paid),
        Just(PaymentStatus::PartiallyPaid),
        Just(PaymentStatus::NotPaid),
    ]
}

/// Strategy for client names the validation gate accepts
pub fn client_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,30}"
}
