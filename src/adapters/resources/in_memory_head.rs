//! In-memory document head for testing and headless rendering.

use std::sync::RwLock;

use crate::ports::DocumentHead;

#[derive(Debug, Clone, PartialEq, Eq)]
struct LinkElement {
    id: String,
    href: String,
}

/// Document head that records appended stylesheet links.
///
/// # Panics
///
/// Methods may panic if the internal lock is poisoned.
#[derive(Debug, Default)]
pub struct InMemoryDocumentHead {
    links: RwLock<Vec<LinkElement>>,
}

impl InMemoryDocumentHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of links carrying `id`.
    pub fn stylesheet_count(&self, id: &str) -> usize {
        self.links
            .read()
            .expect("InMemoryDocumentHead: lock poisoned")
            .iter()
            .filter(|link| link.id == id)
            .count()
    }

    /// Href of the first link carrying `id`.
    pub fn href(&self, id: &str) -> Option<String> {
        self.links
            .read()
            .expect("InMemoryDocumentHead: lock poisoned")
            .iter()
            .find(|link| link.id == id)
            .map(|link| link.href.clone())
    }
}

impl DocumentHead for InMemoryDocumentHead {
    fn has_element(&self, id: &str) -> bool {
        self.stylesheet_count(id) > 0
    }

    fn append_stylesheet(&self, id: &str, href: &str) {
        self.links
            .write()
            .expect("InMemoryDocumentHead: write lock poisoned")
            .push(LinkElement {
                id: id.to_string(),
                href: href.to_string(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let head = InMemoryDocumentHead::new();
        assert!(!head.has_element("sofia-google-font"));
        assert!(head.href("sofia-google-font").is_none());
    }

    #[test]
    fn append_records_link() {
        let head = InMemoryDocumentHead::new();
        head.append_stylesheet("a", "https://example.com/a.css");
        assert!(head.has_element("a"));
        assert!(!head.has_element("b"));
    }
}
