//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the quiz and application domain.

mod ids;
mod timestamp;
mod session_status;
mod state_machine;
mod errors;

pub use ids::SessionId;
pub use timestamp::Timestamp;
pub use session_status::SessionStatus;
pub use state_machine::StateMachine;
pub use errors::{DomainError, ErrorCode, ValidationError};
