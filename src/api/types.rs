//! API response types.
//!
//! Listings and the diagnostic report are domain types serialized as-is.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Greeting returned by `/` and `/api/hello`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// The greeting.
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
