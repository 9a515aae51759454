//! PayloadTransport port - asynchronous delivery used behind a sink.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::submission::SheetPayload;

/// Errors a transport may report. They are logged by the dispatching
/// adapter and never reach the core.
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Endpoint returned status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Transport misconfigured: {0}")]
    Misconfigured(String),
}

impl DeliveryError {
    pub fn network(message: impl Into<String>) -> Self {
        DeliveryError::Network(message.into())
    }
}

/// Port for actually moving a payload to a remote endpoint.
#[async_trait]
pub trait PayloadTransport: Send + Sync {
    /// Short name for log fields, e.g. `"sheet"`.
    fn name(&self) -> &'static str;

    /// Delivers one payload.
    async fn deliver(&self, payload: &SheetPayload) -> Result<(), DeliveryError>;
}
