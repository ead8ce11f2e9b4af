//! Referral Domain - Wiremen, Bills, and the Points Ledger
//!
//! This crate implements the business rules of the referral commission
//! tracker: referral partners (wiremen) submit client bills, each bill
//! accrues loyalty points, and points can later be redeemed.
//!
//! # Points Ledger
//!
//! Every wireman owns at most one ledger record tracking three decimals:
//! `total_points`, `redeemed_points`, and `balance_points`. The record is
//! created lazily on the first bill and must satisfy
//! `balance_points = total_points - redeemed_points` after every
//! operation. Redemption never exceeds the balance available at call
//! time; bill compensation applies signed deltas without clamping (see
//! [`ledger::PointsLedger::apply_delta`]).
//!
//! # Accrual
//!
//! One point per 1000 rupees billed, floored. The snapshot is stored on
//! the bill at write time, never recomputed lazily.
//!
//! This crate is pure: no I/O, no database types. The transactional
//! discipline around these rules lives in `infra_db`.

pub mod accrual;
pub mod bill;
pub mod error;
pub mod ledger;
pub mod validation;
pub mod wireman;

pub use accrual::{points_for_amount, ACCRUAL_UNIT};
pub use bill::{Bill, PaymentStatus};
pub use error::ReferralError;
pub use ledger::PointsLedger;
pub use validation::{validate_bill_input, validate_wireman_input};
pub use wireman::Wireman;
