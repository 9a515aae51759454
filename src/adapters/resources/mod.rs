//! External stylesheet resources and document-head adapters.

mod in_memory_head;
mod stylesheet;

pub use in_memory_head::InMemoryDocumentHead;
pub use stylesheet::{ensure_stylesheet, FontLoader, StylesheetResource, SOFIA_FONT};
