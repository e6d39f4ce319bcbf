mod reqwest_transport;

use async_trait::async_trait;
pub use reqwest_transport::{ReqwestTransport, TransportError, DEFAULT_TIMEOUT};

/// Something that can execute one HTTP request.
///
/// Status codes carry no meaning at this level: any response the remote
/// side produced is an `Ok`, and `Err` is reserved for requests that could
/// not be completed at all.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn execute(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> Result<http::Response<Vec<u8>>, Self::Error>;
}
