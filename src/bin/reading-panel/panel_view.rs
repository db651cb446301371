//! Renders the floating panel and feeds it pointer input.

use crate::ReaderApp;
use crate::colors;
use crate::constants::{HANDLE_HEIGHT, PANEL_BUTTON_SIZE, PANEL_IDLE_OPACITY};
use eframe::egui;
use reading_panel::geometry::{Position, Size};
use reading_panel::panel::{FontScale, HitTarget, PointerEvent};

/// What the reader clicked inside the panel this frame.
#[derive(Debug, Default)]
struct PanelClicks {
    font_scale: Option<FontScale>,
    focus: bool,
}

impl ReaderApp {
    /// Renders the panel at its offset and applies this frame's input to it.
    pub fn show_floating_panel(&mut self, ctx: &egui::Context) {
        let Some(panel) = &self.panel else {
            return;
        };
        let offset = panel.offset();
        let dragging = panel.is_dragging();
        let focus_enabled = panel.focus_enabled();
        let active: Vec<bool> = FontScale::ALL
            .iter()
            .map(|scale| panel.is_active(*scale))
            .collect();

        let origin = egui::pos2(offset.x as f32, offset.y as f32);
        let last_size = egui::vec2(
            self.geometry.panel.width as f32,
            self.geometry.panel.height as f32,
        );
        let hovered = dragging
            || ctx
                .pointer_hover_pos()
                .is_some_and(|pos| egui::Rect::from_min_size(origin, last_size).contains(pos));

        let mut clicks = PanelClicks::default();
        let mut handle_rect = egui::Rect::NOTHING;

        let area = egui::Area::new(egui::Id::new("reading_panel"))
            .order(egui::Order::Foreground)
            .fixed_pos(origin)
            .movable(false)
            .interactable(true)
            .show(ctx, |ui| {
                ui.set_opacity(if hovered { 1.0 } else { PANEL_IDLE_OPACITY });
                egui::Frame::popup(ui.style())
                    .fill(ui.style().visuals.window_fill.gamma_multiply(0.95))
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            handle_rect = draw_handle(ui, dragging);
                            ui.add_space(2.0);

                            for (scale, is_active) in FontScale::ALL.into_iter().zip(active) {
                                if font_button(ui, scale, is_active).clicked() {
                                    clicks.font_scale = Some(scale);
                                }
                            }

                            ui.separator();

                            if focus_button(ui, focus_enabled).clicked() {
                                clicks.focus = true;
                            }
                        });
                    });
            });

        let rect = area.response.rect;
        self.geometry.panel = Size::new(rect.width().ceil() as i32, rect.height().ceil() as i32);

        let events = pointer_events(ctx, handle_rect, rect, dragging);
        if let Some(panel) = &mut self.panel {
            for event in events {
                panel.handle_pointer(event, &self.geometry, &mut self.preferences);
            }
            if let Some(scale) = clicks.font_scale {
                panel.select_font_scale(scale, &mut self.document, &mut self.preferences);
            }
        }
        if clicks.focus {
            self.toggle_focus();
        }

        if dragging {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        }
    }
}

/// Translates this frame's raw pointer input into gesture events.
///
/// Touch input arrives through the same pointer state, so touch-start,
/// touch-move and touch-end map onto the same three events.
fn pointer_events(
    ctx: &egui::Context,
    handle_rect: egui::Rect,
    panel_rect: egui::Rect,
    dragging: bool,
) -> Vec<PointerEvent> {
    ctx.input(|i| {
        let mut events = Vec::new();
        let pos = i.pointer.interact_pos().map(to_position);

        if i.pointer.primary_pressed()
            && let Some(press) = i.pointer.press_origin()
            && panel_rect.contains(press)
        {
            let target = if handle_rect.contains(press) {
                HitTarget::Handle
            } else {
                HitTarget::Body
            };
            events.push(PointerEvent::Down {
                position: to_position(press),
                target,
            });
        }

        if dragging
            && i.pointer.is_moving()
            && let Some(position) = pos
        {
            events.push(PointerEvent::Move { position });
        }

        if i.pointer.primary_released() {
            events.push(PointerEvent::Up);
        }

        events
    })
}

fn to_position(pos: egui::Pos2) -> Position {
    Position::new(pos.x.round() as i32, pos.y.round() as i32)
}

/// Draws the grip strip and returns its rect.
fn draw_handle(ui: &mut egui::Ui, dragging: bool) -> egui::Rect {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(PANEL_BUTTON_SIZE, HANDLE_HEIGHT),
        egui::Sense::drag(),
    );
    let cursor = if dragging {
        egui::CursorIcon::Grabbing
    } else {
        egui::CursorIcon::Grab
    };
    response.on_hover_cursor(cursor).on_hover_text("Drag to move");

    let color = ui.visuals().weak_text_color();
    let center = rect.center();
    for dx in [-6.0, 0.0, 6.0] {
        for dy in [-2.5, 2.5] {
            ui.painter()
                .circle_filled(center + egui::vec2(dx, dy), 1.5, color);
        }
    }
    rect
}

fn font_button(ui: &mut egui::Ui, scale: FontScale, active: bool) -> egui::Response {
    let fill = if active {
        colors::BUTTON_ACTIVE_FILL
    } else {
        colors::BUTTON_FILL
    };
    ui.add(
        egui::Button::new(
            egui::RichText::new(scale.label())
                .strong()
                .color(colors::BUTTON_TEXT),
        )
        .fill(fill)
        .min_size(egui::vec2(PANEL_BUTTON_SIZE, PANEL_BUTTON_SIZE)),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
    .on_hover_text(scale.tooltip())
}

fn focus_button(ui: &mut egui::Ui, enabled: bool) -> egui::Response {
    let (icon, fill) = if enabled {
        ("👁", colors::FOCUS_ACTIVE_FILL)
    } else {
        ("🎯", colors::FOCUS_FILL)
    };
    ui.add(
        egui::Button::new(egui::RichText::new(icon).color(colors::BUTTON_TEXT))
            .fill(fill)
            .min_size(egui::vec2(PANEL_BUTTON_SIZE, PANEL_BUTTON_SIZE)),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
    .on_hover_text("Focus mode (F)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reading_panel::panel::{DragOutcome, DragState};

    fn panel_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(100.0, 100.0), egui::vec2(60.0, 160.0))
    }

    fn handle_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(105.0, 105.0), egui::vec2(50.0, 14.0))
    }

    fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Runs one headless frame with `events` and collects the gestures.
    fn run_frame(events: Vec<egui::Event>) -> Vec<PointerEvent> {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            events,
            ..Default::default()
        };
        let mut gestures = Vec::new();
        let _ = ctx.run(input, |ctx| {
            gestures = pointer_events(ctx, handle_rect(), panel_rect(), false);
        });
        gestures
    }

    fn press_at(pos: egui::Pos2) -> Vec<PointerEvent> {
        run_frame(vec![egui::Event::PointerMoved(pos), button(pos, true)])
    }

    #[test]
    fn test_press_on_handle() {
        let events = press_at(egui::pos2(130.0, 110.0));
        assert_eq!(
            events,
            vec![PointerEvent::Down {
                position: Position::new(130, 110),
                target: HitTarget::Handle,
            }]
        );
    }

    #[test]
    fn test_press_on_body() {
        let events = press_at(egui::pos2(130.0, 200.0));
        assert_eq!(
            events,
            vec![PointerEvent::Down {
                position: Position::new(130, 200),
                target: HitTarget::Body,
            }]
        );
    }

    #[test]
    fn test_press_outside_panel() {
        assert!(press_at(egui::pos2(400.0, 400.0)).is_empty());
    }

    #[test]
    fn test_release_without_press() {
        let pos = egui::pos2(400.0, 400.0);
        let events = run_frame(vec![egui::Event::PointerMoved(pos), button(pos, false)]);
        assert_eq!(events, vec![PointerEvent::Up]);

        let mut state = DragState::Idle;
        let outcome = state.handle(PointerEvent::Up, Position::new(10, 10), |p| p);
        assert_eq!(outcome, DragOutcome::Ignored);
        assert_eq!(state, DragState::Idle);
    }
}
