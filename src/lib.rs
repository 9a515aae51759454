//! The Three Contradictions - quiz scoring and intake application engine
//!
//! This crate implements the Three Contradictions Quiz (Being, Flowing,
//! Trusting), the multi-section hypnotherapy intake application that
//! embeds it, and the flat submission payload both produce.
//!
//! A [`QuizSession`](domain::session::QuizSession) drives one run through a
//! [`FormVariant`](domain::form::FormVariant); on submit it scores the quiz,
//! resolves the profile, and hands a payload to a
//! [`SubmissionSink`](ports::SubmissionSink).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
