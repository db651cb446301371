/// Size of one rem in points.
pub const BASE_FONT_SIZE: f32 = 16.0;

/// Heading size as a multiple of the base size.
pub const HEADING_SCALE: f32 = 1.5;

/// Height of the reading progress strip under the navbar.
pub const PROGRESS_BAR_HEIGHT: f32 = 4.0;

/// Height of the panel's drag handle.
pub const HANDLE_HEIGHT: f32 = 14.0;

/// Side length of the square panel buttons.
pub const PANEL_BUTTON_SIZE: f32 = 30.0;

/// Panel size assumed until it has been laid out once.
pub const PANEL_SIZE_ESTIMATE: [i32; 2] = [50, 180];

/// Panel opacity while the pointer is elsewhere.
pub const PANEL_IDLE_OPACITY: f32 = 0.7;

/// Fraction of the viewport scrolled by Space.
pub const PAGE_STEP: f32 = 0.8;

/// Horizontal padding around the page column.
pub const PAGE_MARGIN: f32 = 24.0;
