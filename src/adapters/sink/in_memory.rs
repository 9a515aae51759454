//! In-memory sink for testing.
//!
//! Captures every payload for later assertions.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned.

use std::sync::RwLock;

use crate::domain::submission::SheetPayload;
use crate::ports::SubmissionSink;

/// Sink that keeps submitted payloads in memory.
///
/// # Panics
///
/// Methods may panic if the internal lock is poisoned.
#[derive(Debug, Default)]
pub struct InMemorySink {
    submitted: RwLock<Vec<SheetPayload>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Returns all captured payloads in submission order.
    pub fn submissions(&self) -> Vec<SheetPayload> {
        self.submitted
            .read()
            .expect("InMemorySink: lock poisoned")
            .clone()
    }

    /// Returns the most recent payload, if any.
    pub fn last(&self) -> Option<SheetPayload> {
        self.submitted
            .read()
            .expect("InMemorySink: lock poisoned")
            .last()
            .cloned()
    }

    pub fn submission_count(&self) -> usize {
        self.submitted
            .read()
            .expect("InMemorySink: lock poisoned")
            .len()
    }

    /// Captured payloads with the given `quizType`.
    pub fn submissions_of_type(&self, quiz_type: &str) -> Vec<SheetPayload> {
        self.submissions()
            .into_iter()
            .filter(|p| p.quiz_type == quiz_type)
            .collect()
    }

    pub fn clear(&self) {
        self.submitted
            .write()
            .expect("InMemorySink: write lock poisoned")
            .clear();
    }
}

impl SubmissionSink for InMemorySink {
    fn submit(&self, payload: SheetPayload) {
        self.submitted
            .write()
            .expect("InMemorySink: write lock poisoned")
            .push(payload);
    }
}
