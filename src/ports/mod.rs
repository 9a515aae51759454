//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SubmissionSink` - fire-and-forget hand-off of a finished payload
//! - `PayloadTransport` - async delivery behind a dispatching sink
//! - `DocumentHead` - stylesheet presence check and insertion

mod submission_sink;
mod payload_transport;
mod document_head;

pub use submission_sink::SubmissionSink;
pub use payload_transport::{DeliveryError, PayloadTransport};
pub use document_head::DocumentHead;
