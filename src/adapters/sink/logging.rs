//! Logging sink - writes each payload to the trace log and drops it.

use tracing::info;

use crate::domain::submission::SheetPayload;
use crate::ports::SubmissionSink;

/// Sink that only records the payload in the log.
///
/// Useful in development and as the fallback when no remote delivery is
/// configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

impl LoggingSink {
    pub fn new() -> Self {
        Self
    }
}

impl SubmissionSink for LoggingSink {
    fn submit(&self, payload: SheetPayload) {
        match serde_json::to_string(&payload) {
            Ok(json) => info!(
                quiz_type = %payload.quiz_type,
                respondent = %payload.respondent_name(),
                payload = %json,
                "Submission received"
            ),
            Err(e) => tracing::warn!(error = %e, "Submission payload could not be serialized"),
        }
    }
}
