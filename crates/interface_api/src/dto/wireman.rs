//! Wireman DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_referral::Wireman;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterWiremanRequest {
    #[validate(length(min = 1, message = "Wireman name is required"))]
    pub name: String,
    #[serde(default)]
    pub contact_info: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateWiremanRequest {
    #[validate(length(min = 1, message = "Wireman name is required"))]
    pub name: String,
    #[serde(default)]
    pub contact_info: String,
}

#[derive(Debug, Serialize)]
pub struct WiremanResponse {
    pub id: Uuid,
    pub name: String,
    pub contact_info: String,
    pub date_registered: NaiveDate,
}

impl From<Wireman> for WiremanResponse {
    fn from(wireman: Wireman) -> Self {
        Self {
            id: *wireman.id.as_uuid(),
            name: wireman.name,
            contact_info: wireman.contact_info,
            date_registered: wireman.date_registered,
        }
    }
}
