//! Sheet transport - appends a row by POSTing the payload to a web-app
//! endpoint (for example a Google Apps Script deployment).

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{build_client, check_status, map_send_error};
use crate::domain::submission::SheetPayload;
use crate::ports::{DeliveryError, PayloadTransport};

/// Configuration for the sheet endpoint.
#[derive(Debug, Clone)]
pub struct SheetTransportConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl SheetTransportConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Transport posting the camelCase payload JSON to the sheet endpoint.
pub struct SheetTransport {
    config: SheetTransportConfig,
    client: Client,
}

impl SheetTransport {
    /// # Errors
    ///
    /// `Misconfigured` if the endpoint is empty or the HTTP client cannot
    /// be built.
    pub fn new(config: SheetTransportConfig) -> Result<Self, DeliveryError> {
        if config.endpoint.trim().is_empty() {
            return Err(DeliveryError::Misconfigured("sheet endpoint is empty".into()));
        }
        let client = build_client(config.timeout)?;
        Ok(Self { config, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl PayloadTransport for SheetTransport {
    fn name(&self) -> &'static str {
        "sheet"
    }

    async fn deliver(&self, payload: &SheetPayload) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| map_send_error(e, self.config.timeout))?;
        check_status(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_endpoint_is_rejected() {
        let result = SheetTransport::new(SheetTransportConfig::new("  "));
        assert!(matches!(result, Err(DeliveryError::Misconfigured(_))));
    }

    #[test]
    fn config_builder_sets_timeout() {
        let config = SheetTransportConfig::new("https://script.example.com/exec")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn transport_reports_name_and_endpoint() {
        let transport =
            SheetTransport::new(SheetTransportConfig::new("https://script.example.com/exec"))
                .unwrap();
        assert_eq!(transport.name(), "sheet");
        assert_eq!(transport.endpoint(), "https://script.example.com/exec");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_delivery_error() {
        let transport = SheetTransport::new(
            SheetTransportConfig::new("http://127.0.0.1:9/exec")
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap();
        assert!(transport.deliver(&SheetPayload::default()).await.is_err());
    }
}
