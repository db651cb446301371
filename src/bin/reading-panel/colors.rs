//! Color constants for the reader chrome and the floating panel.

use eframe::egui::Color32;

// Panel buttons
pub const BUTTON_FILL: Color32 = Color32::from_rgb(102, 126, 234);
pub const BUTTON_ACTIVE_FILL: Color32 = Color32::from_rgb(240, 147, 251);
pub const BUTTON_TEXT: Color32 = Color32::WHITE;

// Focus toggle
pub const FOCUS_FILL: Color32 = Color32::from_rgb(79, 172, 254);
pub const FOCUS_ACTIVE_FILL: Color32 = Color32::from_rgb(245, 87, 108);

// Reading aids
pub const PROGRESS_FILL: Color32 = Color32::from_rgb(118, 75, 162);
pub const READING_ACCENT: Color32 = Color32::from_rgb(102, 126, 234);
pub const QUOTE_BAR: Color32 = Color32::from_rgb(118, 75, 162);
