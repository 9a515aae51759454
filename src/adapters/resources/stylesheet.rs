//! Idempotent stylesheet loading.
//!
//! The quiz pages use the Sofia display font. The stylesheet link is keyed
//! by a fixed element id so that mounting the page repeatedly inserts it
//! at most once.

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::ports::DocumentHead;

/// A stylesheet identified by the id of its link element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylesheetResource {
    pub id: &'static str,
    pub href: &'static str,
}

/// The Sofia display font.
pub const SOFIA_FONT: StylesheetResource = StylesheetResource {
    id: "sofia-google-font",
    href: "https://fonts.googleapis.com/css2?family=Sofia&display=swap",
};

/// Appends `resource` to `head` unless an element with its id exists.
///
/// Returns `true` if a link was inserted.
pub fn ensure_stylesheet(head: &dyn DocumentHead, resource: &StylesheetResource) -> bool {
    if head.has_element(resource.id) {
        return false;
    }
    head.append_stylesheet(resource.id, resource.href);
    debug!(id = resource.id, href = resource.href, "Stylesheet attached");
    true
}

/// Process-wide guard around [`ensure_stylesheet`] for a single document.
///
/// The first `load` checks the head; later calls skip the check entirely,
/// whatever head they pass. A process renders one document, so the guard is
/// not keyed by head. Call [`ensure_stylesheet`] directly when several
/// documents share a process.
#[derive(Debug)]
pub struct FontLoader {
    resource: StylesheetResource,
    loaded: OnceCell<()>,
}

impl FontLoader {
    pub const fn new(resource: StylesheetResource) -> Self {
        Self {
            resource,
            loaded: OnceCell::new(),
        }
    }

    /// Ensures the font is present in `head` on the first call only.
    pub fn load(&self, head: &dyn DocumentHead) {
        self.loaded.get_or_init(|| {
            ensure_stylesheet(head, &self.resource);
        });
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    pub fn resource(&self) -> &StylesheetResource {
        &self.resource
    }
}
