//! Money with precise decimal arithmetic
//!
//! Bill amounts and derived sums are rupee values with two fractional
//! digits. All arithmetic stays on `rust_decimal` so repeated accruals and
//! compensations cannot accumulate binary floating-point drift.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

/// Number of fractional digits carried by monetary amounts
pub const CURRENCY_SCALE: u32 = 2;

/// A rupee amount stored at currency precision
///
/// The tracker is single-currency, so `Money` is a thin wrapper around a
/// `Decimal` rounded to two fractional digits. Amounts may be negative
/// where they represent a signed difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new Money value, rounding to currency precision
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp(CURRENCY_SCALE))
    }

    /// Creates Money from an integer amount of paise (minor units)
    pub fn from_minor(paise: i64) -> Self {
        Self(Decimal::new(paise, CURRENCY_SCALE))
    }

    /// The zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the amount as an exact decimal
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

/// Renders the amount as `₹1,234.56`, the form the original report pages
/// used. Negative amounts render as `₹-1,234.56`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.2}", self.0.abs());
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "₹{}{}.{}", sign, grouped, frac_part)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn money_addition_is_commutative(
            a in -1_000_000_00i64..1_000_000_00i64,
            b in -1_000_000_00i64..1_000_000_00i64
        ) {
            let ma = Money::from_minor(a);
            let mb = Money::from_minor(b);

            prop_assert_eq!(ma + mb, mb + ma);
        }

        #[test]
        fn money_sub_then_add_round_trips(
            a in -1_000_000_00i64..1_000_000_00i64,
            b in -1_000_000_00i64..1_000_000_00i64
        ) {
            let ma = Money::from_minor(a);
            let mb = Money::from_minor(b);

            prop_assert_eq!((ma - mb) + mb, ma);
        }

        #[test]
        fn money_construction_is_idempotent(a in -1_000_000_00i64..1_000_000_00i64) {
            let m = Money::from_minor(a);
            prop_assert_eq!(Money::new(m.amount()), m);
        }
    }
}
