//! reqwest-backed login transport.

use crate::domain::entities::{LoginRequest, LoginResponse};
use crate::domain::ports::LoginTransport;
use crate::error::LoginError;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

/// Posts login requests to the portal over HTTP.
///
/// The endpoint is resolved the way a browser resolves a root-relative path:
/// `http://portal:8080/app` + `/cw-login` becomes `http://portal:8080/cw-login`.
pub struct HttpLoginTransport {
    client: Client,
    endpoint: Url,
}

impl HttpLoginTransport {
    /// Creates a transport for `endpoint_path` on the portal at `base_url`.
    ///
    /// # Errors
    ///
    /// - [`LoginError::InvalidUrl`] if the endpoint cannot be resolved
    /// - [`LoginError::Transport`] if the HTTP client cannot be built
    pub fn new(base_url: &Url, endpoint_path: &str) -> Result<Self, LoginError> {
        let client = Client::builder().build()?;
        Self::with_client(client, base_url, endpoint_path)
    }

    /// Same as [`HttpLoginTransport::new`] but reuses an existing client.
    pub fn with_client(
        client: Client,
        base_url: &Url,
        endpoint_path: &str,
    ) -> Result<Self, LoginError> {
        let endpoint = base_url.join(endpoint_path)?;
        debug!("Login endpoint resolved to {}", endpoint);
        Ok(Self { client, endpoint })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LoginTransport for HttpLoginTransport {
    async fn post_login(&self, request: &LoginRequest) -> Result<LoginResponse, LoginError> {
        let body = serde_json::to_vec(request)?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(status = %status, bytes = bytes.len(), "Login response received");

        LoginResponse::from_slice(&bytes)
    }
}
