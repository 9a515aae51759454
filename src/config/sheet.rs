//! Sheet endpoint configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Spreadsheet web-app endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    /// Endpoint receiving the payload JSON
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SheetConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate sheet configuration
    ///
    /// The endpoint is only required when `required` is set, i.e. when the
    /// submission mode routes to the sheet.
    pub fn validate(&self, required: bool) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        match self.endpoint.as_deref().map(str::trim) {
            None | Some("") if required => Err(ValidationError::MissingRequired("SHEET__ENDPOINT")),
            Some(url) if !url.is_empty() && !url.starts_with("https://") && !url.starts_with("http://") => {
                Err(ValidationError::InvalidSheetEndpoint)
            }
            _ => Ok(()),
        }
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}
