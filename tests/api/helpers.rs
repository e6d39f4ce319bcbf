use async_trait::async_trait;
use greatmail::email::{Email, EmailClient};
use greatmail::telemetry::{get_subscriber, init_subscriber};
use greatmail::transport::{HttpTransport, ReqwestTransport, TransportError};
use http::{StatusCode, Uri};
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::Mutex;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".into();
    let subscriber_name = "test".into();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct StubError(pub String);

/// Records every request and answers with the next scripted outcome.
pub struct ScriptedTransport {
    pub requests: Mutex<Vec<http::Request<Vec<u8>>>>,
    outcomes: Mutex<VecDeque<Result<StatusCode, StubError>>>,
}

impl ScriptedTransport {
    pub fn new(outcomes: Vec<Result<StatusCode, StubError>>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            outcomes: Mutex::new(outcomes.into()),
        }
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    type Error = StubError;

    async fn execute(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> Result<http::Response<Vec<u8>>, Self::Error> {
        self.requests.lock().unwrap().push(request);
        let status = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("No outcome scripted for this request.")?;
        let mut response = http::Response::new(Vec::new());
        *response.status_mut() = status;
        Ok(response)
    }
}

/// Sends through a real `ReqwestTransport`, but to `base_url` instead of
/// the GreatMail host.
pub struct RedirectingTransport {
    pub base_url: String,
    inner: ReqwestTransport,
}

impl RedirectingTransport {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            inner: ReqwestTransport::new(),
        }
    }
}

#[async_trait]
impl HttpTransport for RedirectingTransport {
    type Error = TransportError;

    async fn execute(
        &self,
        mut request: http::Request<Vec<u8>>,
    ) -> Result<http::Response<Vec<u8>>, Self::Error> {
        let redirected: Uri = format!("{}{}", self.base_url, request.uri().path())
            .parse()
            .expect("Failed to build the redirected uri.");
        *request.uri_mut() = redirected;
        self.inner.execute(request).await
    }
}

pub fn scripted_client(
    outcomes: Vec<Result<StatusCode, StubError>>,
) -> EmailClient<ScriptedTransport> {
    Lazy::force(&TRACING);
    EmailClient::new(ScriptedTransport::new(outcomes))
}

pub fn redirected_client(base_url: String) -> EmailClient<RedirectingTransport> {
    Lazy::force(&TRACING);
    EmailClient::new(RedirectingTransport::new(base_url))
}

pub fn fake_email() -> Email {
    Email::new(
        "message",
        "subject",
        "someone",
        vec!["foo".into(), "bar".into()],
    )
}
