//! Session module - the in-memory lifecycle of one quiz or application run.

mod aggregate;
mod errors;

pub use aggregate::QuizSession;
pub use errors::SessionError;
