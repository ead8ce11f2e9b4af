//! Pre-built Test Fixtures
//!
//! Ready-to-use test data, consistent and predictable across the suite.

use chrono::NaiveDate;
use core_kernel::Money;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A standard bill worth two points
    pub fn standard_bill() -> Money {
        Money::new(dec!(2500.00))
    }

    /// The smallest amount worth one point
    pub fn boundary_bill() -> Money {
        Money::new(dec!(1000.00))
    }

    /// Just below the accrual unit; earns nothing
    pub fn sub_unit_bill() -> Money {
        Money::new(dec!(999.00))
    }

    /// A large bill for aggregate tests
    pub fn large_bill() -> Money {
        Money::new(dec!(125000.00))
    }
}

/// Fixture for calendar dates
pub struct TemporalFixtures;

impl TemporalFixtures {
    pub fn registration_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    pub fn earlier_bill_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    pub fn bill_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }
}

/// Fixture for common strings
pub struct StringFixtures;

impl StringFixtures {
    pub fn wireman_name() -> &'static str {
        "Ravi Kumar"
    }

    pub fn contact_info() -> &'static str {
        "ravi.kumar@example.com"
    }

    pub fn client_name() -> &'static str {
        "Acme Wiring Works"
    }
}
