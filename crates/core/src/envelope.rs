//! The API's uniform response envelope

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Every endpoint wraps its payload in this envelope:
/// `{ "success": bool, "message": str, "data": ..., "errors": {field: [str]} }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<FieldErrors>,
}

/// A `success == false` envelope, surfaced with its message and field errors
/// intact so callers can display them.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ApiRejection {
    pub message: String,
    pub errors: FieldErrors,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope: `success` yields the payload, anything else the
    /// server-supplied rejection.
    pub fn into_data(self) -> Result<T, ApiRejection> {
        if self.success {
            self.data.ok_or_else(|| ApiRejection {
                message: "response envelope is missing data".to_string(),
                errors: FieldErrors::new(),
            })
        } else {
            Err(ApiRejection {
                message: self.message,
                errors: self.errors.unwrap_or_default(),
            })
        }
    }
}

impl ApiEnvelope<serde_json::Value> {
    /// Parse an envelope from a raw body without committing to a payload type.
    pub fn from_slice(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }
}

/// Pagination payload used by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub page_size: u32,
    pub total_pages: u32,
    pub current_page: u32,
    pub results: Vec<T>,
}
