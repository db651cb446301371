//! Pointer gesture tracking for the panel's drag handle.

use crate::geometry::Position;

/// Which part of the panel a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The header strip. Only presses here start a drag.
    Handle,
    /// Buttons and padding.
    Body,
}

/// Mouse and touch input, unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Mouse-down or touch-start.
    Down { position: Position, target: HitTarget },
    /// Mouse-move or touch-move.
    Move { position: Position },
    /// Mouse-up or touch-end.
    Up,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        pointer_start: Position,
        offset_start: Position,
    },
}

/// What a pointer event did to the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Ignored,
    Started,
    Moved(Position),
    /// The gesture ended with the panel resting at this offset.
    Released(Position),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Advances the gesture.
    ///
    /// `offset` is the panel's current offset; `clamp` confines a candidate
    /// offset to the viewport. Returns the clamped offset on moves and on
    /// release.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        offset: Position,
        clamp: impl Fn(Position) -> Position,
    ) -> DragOutcome {
        match (*self, event) {
            (
                Self::Idle,
                PointerEvent::Down {
                    position,
                    target: HitTarget::Handle,
                },
            ) => {
                *self = Self::Dragging {
                    pointer_start: position,
                    offset_start: offset,
                };
                DragOutcome::Started
            }
            (
                Self::Dragging {
                    pointer_start,
                    offset_start,
                },
                PointerEvent::Move { position },
            ) => DragOutcome::Moved(clamp(offset_start + (position - pointer_start))),
            (Self::Dragging { .. }, PointerEvent::Up) => {
                *self = Self::Idle;
                DragOutcome::Released(clamp(offset))
            }
            _ => DragOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(p: Position) -> Position {
        p
    }

    #[test]
    fn test_down_on_handle_starts_drag() {
        let mut state = DragState::default();
        let outcome = state.handle(
            PointerEvent::Down {
                position: Position::new(10, 10),
                target: HitTarget::Handle,
            },
            Position::new(500, 80),
            identity,
        );
        assert_eq!(outcome, DragOutcome::Started);
        assert!(state.is_dragging());
    }

    #[test]
    fn test_down_on_body_is_ignored() {
        let mut state = DragState::default();
        let outcome = state.handle(
            PointerEvent::Down {
                position: Position::new(10, 10),
                target: HitTarget::Body,
            },
            Position::new(500, 80),
            identity,
        );
        assert_eq!(outcome, DragOutcome::Ignored);
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_move_is_relative_to_drag_start() {
        let mut state = DragState::default();
        let offset = Position::new(500, 80);
        state.handle(
            PointerEvent::Down {
                position: Position::new(510, 90),
                target: HitTarget::Handle,
            },
            offset,
            identity,
        );

        let outcome = state.handle(
            PointerEvent::Move {
                position: Position::new(480, 130),
            },
            offset,
            identity,
        );
        assert_eq!(outcome, DragOutcome::Moved(Position::new(470, 120)));
    }

    #[test]
    fn test_move_and_up_while_idle_are_ignored() {
        let mut state = DragState::default();
        let offset = Position::new(1, 2);
        assert_eq!(
            state.handle(
                PointerEvent::Move {
                    position: Position::new(50, 50)
                },
                offset,
                identity
            ),
            DragOutcome::Ignored
        );
        assert_eq!(
            state.handle(PointerEvent::Up, offset, identity),
            DragOutcome::Ignored
        );
    }

    #[test]
    fn test_second_down_while_dragging_keeps_origin() {
        let mut state = DragState::default();
        let offset = Position::new(100, 100);
        state.handle(
            PointerEvent::Down {
                position: Position::new(0, 0),
                target: HitTarget::Handle,
            },
            offset,
            identity,
        );
        let outcome = state.handle(
            PointerEvent::Down {
                position: Position::new(40, 40),
                target: HitTarget::Handle,
            },
            offset,
            identity,
        );
        assert_eq!(outcome, DragOutcome::Ignored);
        assert_eq!(
            state,
            DragState::Dragging {
                pointer_start: Position::new(0, 0),
                offset_start: offset,
            }
        );
    }

    #[test]
    fn test_up_releases_with_clamped_offset() {
        let mut state = DragState::default();
        state.handle(
            PointerEvent::Down {
                position: Position::new(0, 0),
                target: HitTarget::Handle,
            },
            Position::new(0, 0),
            identity,
        );
        let outcome = state.handle(PointerEvent::Up, Position::new(-5, 900), |p| {
            Position::new(p.x.max(0), p.y.min(600))
        });
        assert_eq!(outcome, DragOutcome::Released(Position::new(0, 600)));
        assert_eq!(state, DragState::Idle);
    }
}
