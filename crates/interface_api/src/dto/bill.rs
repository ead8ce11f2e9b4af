//! Bill DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use domain_referral::{Bill, PaymentStatus};

fn validate_positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount <= Decimal::ZERO {
        return Err(ValidationError::new("amount_not_positive"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitBillRequest {
    pub wireman_id: Uuid,
    #[validate(length(min = 1, message = "Client name is required"))]
    pub client_name: String,
    #[validate(custom(function = "validate_positive_amount"))]
    pub amount: Decimal,
    pub date: NaiveDate,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBillRequest {
    #[validate(length(min = 1, message = "Client name is required"))]
    pub client_name: String,
    #[validate(custom(function = "validate_positive_amount"))]
    pub amount: Decimal,
    pub date: NaiveDate,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Serialize)]
pub struct BillResponse {
    pub id: Uuid,
    pub wireman_id: Uuid,
    pub client_name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub payment_status: PaymentStatus,
    pub points_earned: Decimal,
}

impl From<Bill> for BillResponse {
    fn from(bill: Bill) -> Self {
        Self {
            id: *bill.id.as_uuid(),
            wireman_id: *bill.wireman_id.as_uuid(),
            client_name: bill.client_name,
            amount: bill.amount.amount(),
            date: bill.date,
            payment_status: bill.payment_status,
            points_earned: bill.points_earned,
        }
    }
}

/// A mutated bill together with the user-facing outcome message
#[derive(Debug, Serialize)]
pub struct BillResult {
    pub bill: BillResponse,
    pub message: String,
}
