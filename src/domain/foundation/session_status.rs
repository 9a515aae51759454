//! SessionStatus enum for tracking the lifecycle of a quiz session.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a quiz or application session.
///
/// A session starts out `Answering`, becomes `Completed` on a successful
/// submit, and returns to `Answering` when the user retakes the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Answering,
    Completed,
}

impl SessionStatus {
    /// Returns true if answers and fields can still be edited.
    pub fn is_mutable(&self) -> bool {
        matches!(self, SessionStatus::Answering)
    }
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!((self, target), (Answering, Completed) | (Completed, Answering))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            SessionStatus::Answering => vec![SessionStatus::Completed],
            SessionStatus::Completed => vec![SessionStatus::Answering],
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Answering => "Answering",
            SessionStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
