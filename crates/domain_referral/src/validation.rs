//! Input validation at the presentation boundary
//!
//! These gates run before any ledger engine call touches storage. The
//! HTTP layer applies its own field-level validation on top; the rules
//! here are the authoritative ones.

use core_kernel::Money;

use crate::error::ReferralError;

/// Validates bill entry data
///
/// Client name is required (non-empty after trimming) and the amount must
/// be strictly greater than zero.
pub fn validate_bill_input(client_name: &str, amount: Money) -> Result<(), ReferralError> {
    if client_name.trim().is_empty() {
        return Err(ReferralError::validation("Client name is required."));
    }
    if !amount.is_positive() {
        return Err(ReferralError::validation(
            "Bill amount must be greater than zero.",
        ));
    }
    Ok(())
}

/// Validates wireman registration data
pub fn validate_wireman_input(name: &str) -> Result<(), ReferralError> {
    if name.trim().is_empty() {
        return Err(ReferralError::validation("Wireman name is required."));
    }
    Ok(())
}
