//! Submission sinks - implementations of the `SubmissionSink` port.

mod dispatching;
mod in_memory;
mod logging;

pub use dispatching::DispatchingSink;
pub use in_memory::InMemorySink;
pub use logging::LoggingSink;
