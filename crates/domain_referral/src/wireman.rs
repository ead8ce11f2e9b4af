//! Wireman entity

use chrono::NaiveDate;
use core_kernel::WiremanId;
use serde::{Deserialize, Serialize};

/// A referral partner who submits client bills and earns loyalty points
///
/// Deleting a wireman removes the wireman's bills and points record with
/// it; the cascade is driven by the engine inside one transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wireman {
    pub id: WiremanId,
    pub name: String,
    pub contact_info: String,
    pub date_registered: NaiveDate,
}

impl Wireman {
    /// Creates a new wireman registered on the given date
    pub fn new(
        name: impl Into<String>,
        contact_info: impl Into<String>,
        date_registered: NaiveDate,
    ) -> Self {
        Self {
            id: WiremanId::new(),
            name: name.into(),
            contact_info: contact_info.into(),
            date_registered,
        }
    }
}
