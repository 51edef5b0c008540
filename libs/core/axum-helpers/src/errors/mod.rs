//! Structured error responses.
//!
//! Every failing endpoint returns the same JSON body shape so clients can
//! handle errors uniformly:
//!
//! ```json
//! {
//!   "code": "INVALID_RANGE",
//!   "message": "Na min cannot exceed max",
//!   "field": "Na"
//! }
//! ```

pub mod handlers;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code, e.g. "INVALID_RANGE" or "NOT_FOUND"
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// The offending request field, when one can be named
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}
