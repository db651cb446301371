//! The floating reading-controls panel.
//!
//! A draggable overlay with three font-scale buttons and a focus-mode
//! toggle. Its resting position and the chosen font scale persist across
//! sessions; focus mode does not.

mod drag;
mod focus;
mod font;

pub use drag::{DragOutcome, DragState, HitTarget, PointerEvent};
pub use focus::{FOCUS_MAX_WIDTH, FocusMode};
pub use font::{FontScale, LINE_HEIGHT_RATIO, apply_font_scale};

use crate::document::Selector;
use crate::geometry::{Position, clamp_to_viewport};
use crate::host::{ElementQuery, KeyValueStore, ViewportInfo};
use crate::preferences;

/// Gap between the panel and the right viewport edge at the default position.
pub const DEFAULT_RIGHT_MARGIN: i32 = 20;

/// Distance from the top of the viewport at the default position.
pub const DEFAULT_TOP: i32 = 80;

#[derive(Debug, Clone)]
pub struct FloatingPanel {
    offset: Position,
    drag: DragState,
    font_scale: FontScale,
    active_button: Option<FontScale>,
    focus: FocusMode,
}

impl FloatingPanel {
    /// Builds the panel for `doc`, or returns `None` when the document is
    /// not an article.
    ///
    /// Restores the stored position (clamped to the current viewport) and
    /// font scale, falling back to defaults, and applies the scale to the
    /// document.
    pub fn mount<Q, S, V>(doc: &mut Q, store: &S, viewport: &V) -> Option<Self>
    where
        Q: ElementQuery + ?Sized,
        S: KeyValueStore + ?Sized,
        V: ViewportInfo + ?Sized,
    {
        doc.query(Selector::ContentRoot)?;

        let offset = preferences::load_position(store).unwrap_or_else(|err| {
            log::debug!("Using default panel position: {err}");
            Self::default_position(viewport)
        });
        let font_scale = preferences::load_font_scale(store).unwrap_or_else(|err| {
            log::debug!("Using default font scale: {err}");
            FontScale::default()
        });

        apply_font_scale(doc, font_scale);

        let mut panel = Self {
            offset,
            drag: DragState::Idle,
            font_scale,
            active_button: Some(font_scale),
            focus: FocusMode::default(),
        };
        panel.keep_in_view(viewport);

        log::info!(
            "Mounted reading panel at ({}, {}) with font scale {}",
            panel.offset.x,
            panel.offset.y,
            font_scale.as_str()
        );
        Some(panel)
    }

    /// Top-right corner, inset by the default margins.
    pub fn default_position<V: ViewportInfo + ?Sized>(viewport: &V) -> Position {
        let candidate = Position::new(
            viewport.viewport_size().width - viewport.panel_size().width - DEFAULT_RIGHT_MARGIN,
            DEFAULT_TOP,
        );
        clamp_to_viewport(candidate, viewport.panel_size(), viewport.viewport_size())
    }

    pub fn offset(&self) -> Position {
        self.offset
    }

    pub fn font_scale(&self) -> FontScale {
        self.font_scale
    }

    /// The button drawn in its active state, if any.
    pub fn active_button(&self) -> Option<FontScale> {
        self.active_button
    }

    pub fn is_active(&self, scale: FontScale) -> bool {
        self.active_button == Some(scale)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn focus_enabled(&self) -> bool {
        self.focus.is_enabled()
    }

    /// Feeds one pointer event into the drag gesture.
    ///
    /// Moves reposition the panel immediately; the release writes the
    /// resting offset to `store`.
    pub fn handle_pointer<V, S>(
        &mut self,
        event: PointerEvent,
        viewport: &V,
        store: &mut S,
    ) -> DragOutcome
    where
        V: ViewportInfo + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        let panel_size = viewport.panel_size();
        let viewport_size = viewport.viewport_size();
        let outcome = self.drag.handle(event, self.offset, |candidate| {
            clamp_to_viewport(candidate, panel_size, viewport_size)
        });

        match outcome {
            DragOutcome::Moved(offset) => self.offset = offset,
            DragOutcome::Released(offset) => {
                self.offset = offset;
                preferences::store_position(store, offset);
                log::debug!("Panel released at ({}, {})", offset.x, offset.y);
            }
            DragOutcome::Started | DragOutcome::Ignored => {}
        }
        outcome
    }

    /// Pulls the panel back inside the viewport after a resize.
    ///
    /// The stored position is left alone; it is rewritten on the next drag.
    pub fn keep_in_view<V: ViewportInfo + ?Sized>(&mut self, viewport: &V) {
        self.offset =
            clamp_to_viewport(self.offset, viewport.panel_size(), viewport.viewport_size());
    }

    /// Applies, persists and highlights `scale`.
    pub fn select_font_scale<Q, S>(&mut self, scale: FontScale, doc: &mut Q, store: &mut S)
    where
        Q: ElementQuery + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        apply_font_scale(doc, scale);
        preferences::store_font_scale(store, scale);
        self.font_scale = scale;
        self.active_button = Some(scale);
    }

    /// Flips focus mode and returns whether it is now on.
    pub fn toggle_focus<Q: ElementQuery + ?Sized>(&mut self, doc: &mut Q) -> bool {
        let enabled = self.focus.toggle(doc);
        log::debug!("Focus mode {}", if enabled { "on" } else { "off" });
        enabled
    }
}
