//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! Items and item lists are served in their domain shape; only the
//! message envelope is adapter specific.

use serde::{Deserialize, Serialize};

/// `{"message": "..."}` body used by the greeting and item submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
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
