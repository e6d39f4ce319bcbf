use crate::configuration::EmailClientSettings;
use crate::transport::HttpTransport;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// [`HttpTransport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
    timeout: Duration,
}

#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("Failed to convert the request for sending.")]
    InvalidRequest(#[source] reqwest::Error),
    #[error("Failed to execute the request.")]
    Execution(#[source] reqwest::Error),
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// # Panics
    ///
    /// Like `reqwest::Client::new`, panics if the TLS backend cannot be
    /// initialised.
    pub fn with_timeout(timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build the HTTP client.");
        Self {
            http_client,
            timeout,
        }
    }

    pub fn from_settings(settings: &EmailClientSettings) -> Self {
        Self::with_timeout(settings.timeout())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    type Error = TransportError;

    /// Resolves as soon as the response head arrives. The body is never
    /// read.
    #[tracing::instrument(
        name = "Executing HTTP request",
        skip(self, request),
        fields(method = %request.method(), uri = %request.uri())
    )]
    async fn execute(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> Result<http::Response<Vec<u8>>, Self::Error> {
        let request =
            reqwest::Request::try_from(request).map_err(TransportError::InvalidRequest)?;
        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(TransportError::Execution)?;

        tracing::debug!(status = response.status().as_u16(), "Received response");

        let mut converted = http::Response::new(Vec::new());
        *converted.status_mut() = response.status();
        *converted.version_mut() = response.version();
        *converted.headers_mut() = response.headers().clone();
        Ok(converted)
    }
}
