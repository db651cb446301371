//! Capabilities the panel needs from whatever hosts it.
//!
//! The panel never talks to a window, a storage backend or a document
//! directly. The host hands it these narrow views instead, which keeps the
//! drag and persistence logic testable without a rendering environment.

use crate::document::{ElementId, InlineStyle, Selector};
use crate::geometry::Size;
use std::collections::HashMap;

/// Read access to the current viewport and the measured panel size.
pub trait ViewportInfo {
    /// Size of the visible area the panel must stay inside.
    fn viewport_size(&self) -> Size;

    /// Size of the panel's bounding box as last laid out.
    fn panel_size(&self) -> Size;
}

/// Best-effort string key-value storage.
///
/// Reads of missing keys return `None`; writes never fail from the
/// caller's point of view.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// Lookup and inline-style mutation of document elements.
pub trait ElementQuery {
    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: Selector) -> Vec<ElementId>;

    /// The first element matching `selector`.
    fn query(&self, selector: Selector) -> Option<ElementId> {
        self.query_all(selector).into_iter().next()
    }

    /// Inline overrides of an element, `None` if the id is unknown.
    fn inline_style(&self, id: ElementId) -> Option<InlineStyle>;

    /// Replaces the inline overrides of an element. Unknown ids are ignored.
    fn set_inline_style(&mut self, id: ElementId, style: InlineStyle);
}

/// A `HashMap` backed store.
///
/// The reader uses one as the write-through mirror of eframe's persistent
/// storage and another as session storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    dirty: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything was written or removed since the last [`Self::take_dirty`].
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the dirty flag and resets it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            dirty: false,
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
        self.dirty = true;
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.dirty = true;
        }
    }
}

/// Fixed viewport and panel sizes, for hosts that measure once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedViewport {
    pub viewport: Size,
    pub panel: Size,
}

impl ViewportInfo for FixedViewport {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn panel_size(&self) -> Size {
        self.panel
    }
}
