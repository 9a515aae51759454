//! Submission wiring - turns configuration into a ready sink.

use std::sync::Arc;

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::info;

use crate::adapters::{
    DispatchingSink, LoggingSink, ResendEmailConfig, ResendEmailTransport, SheetTransport,
    SheetTransportConfig,
};
use crate::config::{AppConfig, ValidationError};
use crate::ports::{DeliveryError, PayloadTransport, SubmissionSink};

#[derive(Debug, Error)]
pub enum WiringError {
    #[error(transparent)]
    Config(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] DeliveryError),
}

/// The sink handed to sessions, plus the delivery worker when one runs.
pub struct SubmissionPipeline {
    pub sink: Arc<dyn SubmissionSink>,
    /// Background delivery task; `None` in log-only mode.
    pub worker: Option<JoinHandle<()>>,
}

/// Builds the sink for `config.submission.mode`.
///
/// Log mode needs no runtime work. Any remote mode spawns a single
/// [`DispatchingSink`] worker on `runtime` feeding every selected transport.
///
/// # Errors
///
/// - `Config` if the configuration does not validate
/// - `Transport` if an HTTP client cannot be built
pub fn build_submission_pipeline(
    config: &AppConfig,
    runtime: &Handle,
) -> Result<SubmissionPipeline, WiringError> {
    config.validate()?;
    let mode = config.submission.mode;

    let mut transports: Vec<Arc<dyn PayloadTransport>> = Vec::new();
    if mode.uses_sheet() {
        let endpoint = config
            .sheet
            .endpoint
            .clone()
            .ok_or(ValidationError::MissingRequired("SHEET__ENDPOINT"))?;
        let sheet = SheetTransport::new(
            SheetTransportConfig::new(endpoint).with_timeout(config.sheet.timeout()),
        )?;
        transports.push(Arc::new(sheet));
    }
    if mode.uses_email() {
        let api_key = config
            .email
            .api_key()
            .ok_or(ValidationError::MissingRequired("EMAIL__RESEND_API_KEY"))?;
        let recipient = config
            .email
            .admin_recipient
            .clone()
            .ok_or(ValidationError::MissingRequired("EMAIL__ADMIN_RECIPIENT"))?;
        let email = ResendEmailTransport::new(ResendEmailConfig::new(
            api_key,
            config.email.from_header(),
            recipient,
        ))?;
        transports.push(Arc::new(email));
    }

    if transports.is_empty() {
        info!(mode = ?mode, "Submissions will be logged only");
        return Ok(SubmissionPipeline {
            sink: Arc::new(LoggingSink::new()),
            worker: None,
        });
    }

    let names: Vec<&'static str> = transports.iter().map(|t| t.name()).collect();
    let (sink, worker) = DispatchingSink::spawn(runtime, transports);
    info!(mode = ?mode, transports = ?names, "Submission delivery started");
    Ok(SubmissionPipeline {
        sink: Arc::new(sink),
        worker: Some(worker),
    })
}
