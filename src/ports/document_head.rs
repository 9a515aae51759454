//! DocumentHead port - where stylesheet resources are attached.

/// Minimal view of a document head: presence check and append.
pub trait DocumentHead {
    /// True if an element with `id` is already attached.
    fn has_element(&self, id: &str) -> bool;

    /// Attaches a stylesheet link with the given id and href.
    fn append_stylesheet(&self, id: &str, href: &str);
}
