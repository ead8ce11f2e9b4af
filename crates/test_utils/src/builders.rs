//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields; names default to generated
//! fake data so bulk inserts stay distinguishable.

use chrono::NaiveDate;
use core_kernel::{Money, WiremanId};
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::Fake;

use domain_referral::{Bill, PaymentStatus, Wireman};

use crate::fixtures::{MoneyFixtures, StringFixtures, TemporalFixtures};

/// Builder for constructing test wiremen
pub struct TestWiremanBuilder {
    name: String,
    contact_info: String,
    date_registered: NaiveDate,
}

impl Default for TestWiremanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWiremanBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: Name().fake(),
            contact_info: StringFixtures::contact_info().to_string(),
            date_registered: TemporalFixtures::registration_date(),
        }
    }

    /// Sets the wireman name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the contact info
    pub fn with_contact_info(mut self, contact_info: impl Into<String>) -> Self {
        self.contact_info = contact_info.into();
        self
    }

    /// Sets the registration date
    pub fn with_date_registered(mut self, date: NaiveDate) -> Self {
        self.date_registered = date;
        self
    }

    /// Builds the wireman
    pub fn build(self) -> Wireman {
        Wireman::new(self.name, self.contact_info, self.date_registered)
    }
}

/// Builder for constructing test bills
pub struct TestBillBuilder {
    wireman_id: WiremanId,
    client_name: String,
    amount: Money,
    date: NaiveDate,
    payment_status: PaymentStatus,
}

impl Default for TestBillBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBillBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            wireman_id: WiremanId::new(),
            client_name: CompanyName().fake(),
            amount: MoneyFixtures::standard_bill(),
            date: TemporalFixtures::bill_date(),
            payment_status: PaymentStatus::Paid,
        }
    }

    /// Sets the owning wireman
    pub fn for_wireman(mut self, wireman_id: WiremanId) -> Self {
        self.wireman_id = wireman_id;
        self
    }

    /// Sets the client name
    pub fn with_client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = client_name.into();
        self
    }

    /// Sets the bill amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the bill date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the payment status
    pub fn with_payment_status(mut self, payment_status: PaymentStatus) -> Self {
        self.payment_status = payment_status;
        self
    }

    /// Builds the bill; the points snapshot is computed on construction
    pub fn build(self) -> Bill {
        Bill::new(
            self.wireman_id,
            self.client_name,
            self.amount,
            self.date,
            self.payment_status,
        )
    }
}
