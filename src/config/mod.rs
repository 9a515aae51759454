//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `THREE_CONTRADICTIONS` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields a working
//! log-only setup.
//!
//! # Example
//!
//! ```no_run
//! use three_contradictions::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Submissions go to {:?}", config.submission.mode);
//! ```

mod email;
mod error;
mod logging;
mod sheet;
mod submission;

pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use sheet::SheetConfig;
pub use submission::{SubmissionConfig, SubmissionMode};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Where submissions are routed
    #[serde(default)]
    pub submission: SubmissionConfig,

    /// Spreadsheet endpoint
    #[serde(default)]
    pub sheet: SheetConfig,

    /// Admin email via Resend
    #[serde(default)]
    pub email: EmailConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `THREE_CONTRADICTIONS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `THREE_CONTRADICTIONS__SUBMISSION__MODE=sheet` -> `submission.mode = sheet`
    /// - `THREE_CONTRADICTIONS__SHEET__ENDPOINT=...` -> `sheet.endpoint = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("THREE_CONTRADICTIONS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Sheet and email settings are only required when the submission mode
    /// routes to them.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mode = self.submission.mode;
        self.sheet.validate(mode.uses_sheet())?;
        self.email.validate(mode.uses_email())?;
        self.logging.validate()?;
        Ok(())
    }
}
