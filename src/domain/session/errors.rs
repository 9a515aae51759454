//! Session-specific error types.

use thiserror::Error;

use crate::domain::form::SectionIncomplete;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors returned by session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A section is missing a required answer; carries the user-facing
    /// message.
    #[error(transparent)]
    Incomplete(#[from] SectionIncomplete),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Results were already submitted; retake the quiz to answer again")]
    AlreadyCompleted,

    #[error("Submit is only available from section {last}")]
    SubmitNotAvailable { last: usize },

    #[error("This form does not support selecting sections directly")]
    TabsNotSupported,
}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Incomplete(inc) => {
                DomainError::new(ErrorCode::SectionIncomplete, inc.message)
                    .with_detail("section", inc.section.to_string())
            }
            SessionError::Invalid(v) => v.into(),
            SessionError::AlreadyCompleted => DomainError::new(
                ErrorCode::SessionCompleted,
                SessionError::AlreadyCompleted.to_string(),
            ),
            other @ SessionError::SubmitNotAvailable { .. } => {
                DomainError::new(ErrorCode::SubmitNotAvailable, other.to_string())
            }
            SessionError::TabsNotSupported => DomainError::new(
                ErrorCode::InvalidStateTransition,
                SessionError::TabsNotSupported.to_string(),
            ),
        }
    }
}
