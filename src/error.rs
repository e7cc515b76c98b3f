//! Error types for the login flow.

use thiserror::Error;

/// Everything that can go wrong between reading the form and reacting to the portal.
///
/// Only [`LoginError::Form`] is returned to the caller of an invocation. The remaining
/// variants end up in [`crate::application::services::LoginSettlement::Failed`] after
/// being written to the diagnostic log.
#[derive(Debug, Error)]
pub enum LoginError {
    /// A form field could not be read.
    #[error("failed to read form field `{field}`: {reason}")]
    Form { field: &'static str, reason: String },

    /// The request could not be sent or the body could not be received.
    #[error("login request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON or does not match the expected shape.
    #[error("malformed login response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response body is valid JSON but not an object.
    #[error("unexpected login response body: expected a JSON object, got {0}")]
    UnexpectedBody(&'static str),

    /// The response claims success but breaks the `status` contract.
    #[error("login response violates protocol: {0}")]
    Protocol(String),

    /// The login endpoint could not be joined onto the portal base URL.
    #[error("invalid login URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl LoginError {
    pub fn form(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Form {
            field,
            reason: reason.into(),
        }
    }
}
