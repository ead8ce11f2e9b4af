//! Referral domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the referral domain
#[derive(Debug, Error)]
pub enum ReferralError {
    /// Rejected user input, caught before any mutation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced entity missing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Redemption exceeds the available balance
    #[error("Cannot redeem {requested} points: only {available} available")]
    InvalidRedemption {
        requested: Decimal,
        available: Decimal,
    },
}

impl ReferralError {
    pub fn validation(message: impl Into<String>) -> Self {
        ReferralError::Validation(message.into())
    }

    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        ReferralError::NotFound(format!("{} with id '{}' not found", entity, id))
    }
}
