//! Port for sending login requests to the portal.

use crate::domain::entities::{LoginRequest, LoginResponse};
use crate::error::LoginError;
use async_trait::async_trait;

/// Transport that delivers one login request and parses the reply.
///
/// Implementations send exactly one request per call: no retries, no timeout.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpLoginTransport`] - reqwest-backed `POST`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginTransport: Send + Sync {
    /// Posts `request` as JSON and parses the response body.
    ///
    /// The HTTP status is not interpreted; only the body decides the outcome.
    ///
    /// # Errors
    ///
    /// - [`LoginError::Transport`] if the request cannot be sent or the body read
    /// - [`LoginError::Decode`] / [`LoginError::UnexpectedBody`] if the body is unusable
    async fn post_login(&self, request: &LoginRequest) -> Result<LoginResponse, LoginError>;
}
