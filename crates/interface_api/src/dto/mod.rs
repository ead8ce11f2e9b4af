//! Request/Response data transfer objects

pub mod bill;
pub mod points;
pub mod wireman;

use serde::Serialize;

/// Generic success body for operations without a data payload
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
