//! SubmissionSink port - one-way hand-off of a finished payload.
//!
//! The core calls `submit` and moves on. It never waits for delivery and
//! never learns whether delivery succeeded; retries and failures belong to
//! the adapter.

use crate::domain::submission::SheetPayload;

/// Port for delivering a payload somewhere outside the core.
///
/// Implementations must not block the caller on I/O. Adapters that talk to
/// the network hand the payload to a background task.
pub trait SubmissionSink: Send + Sync {
    /// Hands off `payload`. Fire-and-forget.
    fn submit(&self, payload: SheetPayload);
}
