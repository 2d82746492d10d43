//! Client error types

use storefront_core::envelope::{ApiEnvelope, FieldErrors};
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error; no HTTP response was obtained.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-401 error status. Envelope fields are preserved
    /// so forms can display them.
    #[error("Server error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        errors: FieldErrors,
    },

    /// 401 surfaced to the caller: either no refresh token was available, or
    /// the retried request was rejected again.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Token refresh failed; the session has been cleared.
    #[error("Session expired: {message}")]
    SessionExpired { message: String },

    /// `success == false` on an otherwise OK response (validation failure).
    #[error("{message}")]
    Rejected {
        message: String,
        errors: FieldErrors,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Map an error status and raw body to a client error, pulling
    /// `message`/`errors` out of the response envelope when it parses.
    pub(crate) fn from_status(status: reqwest::StatusCode, body: &[u8]) -> Self {
        let (message, errors) = match ApiEnvelope::from_slice(body) {
            Some(envelope) => (
                if envelope.message.is_empty() {
                    status.to_string()
                } else {
                    envelope.message
                },
                envelope.errors.unwrap_or_default(),
            ),
            None => (
                String::from_utf8_lossy(body).trim().to_string(),
                FieldErrors::new(),
            ),
        };

        if status == reqwest::StatusCode::UNAUTHORIZED {
            Self::Unauthorized { message }
        } else {
            Self::Api {
                status: status.as_u16(),
                message,
                errors,
            }
        }
    }

    /// True when the session can no longer authenticate requests.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::SessionExpired { .. })
    }

    /// Field-level validation errors, if the server supplied any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Api { errors, .. } | Self::Rejected { errors, .. } if !errors.is_empty() => {
                Some(errors)
            }
            _ => None,
        }
    }
}

impl From<storefront_core::envelope::ApiRejection> for ClientError {
    fn from(rejection: storefront_core::envelope::ApiRejection) -> Self {
        Self::Rejected {
            message: rejection.message,
            errors: rejection.errors,
        }
    }
}
