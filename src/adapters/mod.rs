//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `sink` - Submission sinks (logging, in-memory, background dispatch)
//! - `delivery` - HTTP transports used by the dispatching sink
//! - `resources` - Stylesheet loading and document-head implementations

pub mod delivery;
pub mod resources;
pub mod sink;

pub use delivery::{ResendEmailConfig, ResendEmailTransport, SheetTransport, SheetTransportConfig};
pub use resources::{ensure_stylesheet, FontLoader, InMemoryDocumentHead, StylesheetResource, SOFIA_FONT};
pub use sink::{DispatchingSink, InMemorySink, LoggingSink};
