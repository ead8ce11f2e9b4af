//! Points DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use domain_referral::PointsLedger;

fn validate_non_negative_points(points: &Decimal) -> Result<(), ValidationError> {
    if *points < Decimal::ZERO {
        return Err(ValidationError::new("points_negative"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct RedeemPointsRequest {
    #[validate(custom(function = "validate_non_negative_points"))]
    pub points: Decimal,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub total_points: Decimal,
    pub redeemed_points: Decimal,
    pub balance_points: Decimal,
}

impl From<PointsLedger> for PointsResponse {
    fn from(ledger: PointsLedger) -> Self {
        Self {
            total_points: ledger.total_points,
            redeemed_points: ledger.redeemed_points,
            balance_points: ledger.balance_points,
        }
    }
}
