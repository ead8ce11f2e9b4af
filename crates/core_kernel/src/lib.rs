//! Core Kernel - Foundational types for the referral commission tracker
//!
//! This crate provides the building blocks shared by the domain, database,
//! and API layers:
//! - Money with precise decimal arithmetic
//! - Strongly-typed entity identifiers

pub mod identifiers;
pub mod money;

pub use identifiers::{BillId, PointsRecordId, WiremanId};
pub use money::{Money, CURRENCY_SCALE};
