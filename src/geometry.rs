//! Integer pixel geometry for the floating panel.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in viewport pixel coordinates.
///
/// Used both for pointer positions and for the panel's top-left offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Clamps `offset` so a box of `panel` size stays fully inside `viewport`.
///
/// Each axis is clamped independently to `[0, viewport - panel]`. A panel
/// larger than the viewport on an axis is pinned to `0` on that axis.
pub fn clamp_to_viewport(offset: Position, panel: Size, viewport: Size) -> Position {
    let max_x = (viewport.width - panel.width).max(0);
    let max_y = (viewport.height - panel.height).max(0);
    Position::new(offset.x.clamp(0, max_x), offset.y.clamp(0, max_y))
}
