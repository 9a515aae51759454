//! Submission module - payload assembly for the submission sink.

mod payload;
mod admin_summary;
mod builder;

pub use payload::SheetPayload;
pub use admin_summary::build_admin_summary;
pub use builder::PayloadBuilder;
