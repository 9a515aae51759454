//! Domain layer containing the quiz engine and form logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, status, errors)
//! - `quiz` - Question bank, scoring, result codes and profiles
//! - `form` - Section schemas, form state, validation and navigation
//! - `submission` - Flat submission payload and admin summary
//! - `session` - Quiz session aggregate tying it all together

pub mod form;
pub mod foundation;
pub mod quiz;
pub mod session;
pub mod submission;
