//! Point accrual rule
//!
//! One loyalty point per 1000 rupees billed, floored.

use core_kernel::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Billed rupees required to earn one point
pub const ACCRUAL_UNIT: Decimal = dec!(1000);

/// Computes the points earned by a bill amount
///
/// `points = floor(amount / 1000)`. Flooring on exact decimals keeps
/// repeated fractional accruals from drifting. Total over non-negative
/// amounts; an amount of zero earns zero points. Callers reject negative
/// amounts before accrual is ever consulted.
pub fn points_for_amount(amount: Money) -> Decimal {
    (amount.amount() / ACCRUAL_UNIT).floor()
}
