use std::future::Future;

use folio_models::contact::ContactMessage;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RelayApiService: Send + Sync + 'static {
    /// Sends one contact message to the relay endpoint.
    fn send(
        &self,
        request: RelayRequest,
        access_key: &str,
    ) -> impl Future<Output = Result<RelaySendResponse, RelaySendError>> + Send;
}

/// Payload handed to the relay: the validated message plus the synthesized
/// subject line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRequest {
    pub subject: String,
    pub message: ContactMessage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaySendResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// Transport-level submission failures. The form surfaces all of them
/// identically, but they stay apart for logging.
#[derive(Debug, Error)]
pub enum RelaySendError {
    #[error("Failed to reach the relay endpoint.")]
    Network(#[source] anyhow::Error),
    #[error("Relay endpoint returned status {0}.")]
    Status(u16),
    #[error("Failed to deserialize the relay response.")]
    MalformedResponse(#[source] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockRelayApiService {
    pub fn with_send(
        mut self,
        request: RelayRequest,
        access_key: String,
        result: Result<RelaySendResponse, RelaySendError>,
    ) -> Self {
        self.expect_send()
            .once()
            .with(
                mockall::predicate::eq(request),
                mockall::predicate::eq(access_key),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}
