//! Application layer - process setup around the domain.
//!
//! - `telemetry` - tracing subscriber installation from [`LoggingConfig`]
//! - `wiring` - builds the submission sink selected by configuration
//!
//! [`LoggingConfig`]: crate::config::LoggingConfig

mod telemetry;
mod wiring;

pub use telemetry::{init_tracing, TelemetryError};
pub use wiring::{build_submission_pipeline, SubmissionPipeline, WiringError};
