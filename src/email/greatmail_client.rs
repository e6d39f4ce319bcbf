use crate::configuration::EmailClientSettings;
use crate::email::Email;
use crate::transport::{HttpTransport, ReqwestTransport};
use http::header::{HeaderValue, CONTENT_TYPE};
use http::{Method, Uri};
use uuid::Uuid;

pub const GREATMAIL_SEND_URL: &str = "https://api.greatmail.com/send";

/// Sends emails through the GreatMail API over an injected transport.
#[derive(Debug, Clone)]
pub struct EmailClient<T> {
    transport: T,
}

impl<T: HttpTransport> EmailClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Performs exactly one request. A transport failure is returned as-is;
    /// any response, whatever its status, counts as delivered.
    #[tracing::instrument(
        name = "Sending an email through GreatMail",
        skip(self, email),
        fields(
            request_id = %Uuid::new_v4(),
            sender = %email.from,
            recipients = email.to.len()
        )
    )]
    pub async fn send_email(&self, email: &Email) -> Result<(), T::Error> {
        let response = self.transport.execute(send_request(email)).await?;

        // TODO: surface non-2xx statuses as an error once GreatMail documents
        // its rejection responses.
        if !response.status().is_success() {
            tracing::warn!(
                status = response.status().as_u16(),
                "GreatMail answered with a non-success status"
            );
        }
        Ok(())
    }
}

impl EmailClient<ReqwestTransport> {
    /// Client over a pooled HTTP transport with a 10 second timeout.
    pub fn default_client() -> Self {
        Self::new(ReqwestTransport::new())
    }

    pub fn from_settings(settings: &EmailClientSettings) -> Self {
        Self::new(ReqwestTransport::from_settings(settings))
    }
}

impl Default for EmailClient<ReqwestTransport> {
    fn default() -> Self {
        Self::default_client()
    }
}

fn send_request(email: &Email) -> http::Request<Vec<u8>> {
    let mut request = http::Request::new(email.to_json());
    *request.method_mut() = Method::POST;
    *request.uri_mut() = Uri::from_static(GREATMAIL_SEND_URL);
    request
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    request
}
