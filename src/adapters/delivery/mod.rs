//! Delivery transports - implementations of the `PayloadTransport` port.
//!
//! - `SheetTransport` - POSTs the payload JSON to a spreadsheet endpoint
//! - `ResendEmailTransport` - emails the admin summary through Resend

mod resend_email;
mod sheet;

pub use resend_email::{ResendEmailConfig, ResendEmailTransport};
pub use sheet::{SheetTransport, SheetTransportConfig};

use reqwest::Client;
use std::time::Duration;

use crate::ports::DeliveryError;

fn build_client(timeout: Duration) -> Result<Client, DeliveryError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| DeliveryError::Misconfigured(format!("Failed to create HTTP client: {}", e)))
}

fn map_send_error(e: reqwest::Error, timeout: Duration) -> DeliveryError {
    if e.is_timeout() {
        DeliveryError::Timeout {
            timeout_secs: timeout.as_secs(),
        }
    } else {
        DeliveryError::network(e.to_string())
    }
}

async fn check_status(response: reqwest::Response) -> Result<(), DeliveryError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    Err(DeliveryError::Rejected {
        status: status.as_u16(),
        body,
    })
}
