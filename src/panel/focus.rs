//! Distraction-free reading mode.

use crate::document::{ElementId, InlineStyle, Selector};
use crate::host::ElementQuery;

/// Content column width while focus mode is on.
pub const FOCUS_MAX_WIDTH: f32 = 650.0;

/// Inline values focus mode overwrote on one element.
#[derive(Debug, Clone, Copy)]
struct Saved {
    id: ElementId,
    opacity: Option<f32>,
    interactive: Option<bool>,
    max_width: Option<f32>,
    centered: Option<bool>,
}

impl Saved {
    fn capture(id: ElementId, style: InlineStyle) -> Self {
        Self {
            id,
            opacity: style.opacity,
            interactive: style.interactive,
            max_width: style.max_width,
            centered: style.centered,
        }
    }

    fn restore_into(self, style: InlineStyle) -> InlineStyle {
        InlineStyle {
            opacity: self.opacity,
            interactive: self.interactive,
            max_width: self.max_width,
            centered: self.centered,
            ..style
        }
    }
}

/// Off until toggled. Never persisted.
///
/// Enabling records the inline values it is about to overwrite, and
/// disabling puts exactly those back, so overrides the host set before
/// focus mode survive a round trip.
#[derive(Debug, Clone, Default)]
pub struct FocusMode {
    saved: Option<Vec<Saved>>,
}

impl FocusMode {
    pub fn is_enabled(&self) -> bool {
        self.saved.is_some()
    }

    /// Flips the mode and returns the new state.
    pub fn toggle<Q: ElementQuery + ?Sized>(&mut self, doc: &mut Q) -> bool {
        if self.is_enabled() {
            self.disable(doc);
        } else {
            self.enable(doc);
        }
        self.is_enabled()
    }

    pub fn enable<Q: ElementQuery + ?Sized>(&mut self, doc: &mut Q) {
        if self.is_enabled() {
            return;
        }

        let mut saved = Vec::new();

        for id in doc.query_all(Selector::Chrome) {
            let Some(style) = doc.inline_style(id) else {
                continue;
            };
            saved.push(Saved::capture(id, style));
            doc.set_inline_style(
                id,
                InlineStyle {
                    opacity: Some(0.0),
                    interactive: Some(false),
                    ..style
                },
            );
        }

        if let Some(root) = doc.query(Selector::ContentRoot)
            && let Some(style) = doc.inline_style(root)
        {
            saved.push(Saved::capture(root, style));
            doc.set_inline_style(
                root,
                InlineStyle {
                    max_width: Some(FOCUS_MAX_WIDTH),
                    centered: Some(true),
                    ..style
                },
            );
        }

        self.saved = Some(saved);
    }

    pub fn disable<Q: ElementQuery + ?Sized>(&mut self, doc: &mut Q) {
        let Some(saved) = self.saved.take() else {
            return;
        };
        for entry in saved {
            if let Some(style) = doc.inline_style(entry.id) {
                doc.set_inline_style(entry.id, entry.restore_into(style));
            }
        }
    }
}
