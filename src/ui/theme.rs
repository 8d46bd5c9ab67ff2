// LogLens - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Background colour for highlighted query occurrences.
pub fn highlight_bg(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(180, 130, 8) // Amber, dimmed for dark rows
    } else {
        Color32::from_rgb(253, 224, 71) // Yellow 300
    }
}

/// Text colour on top of the highlight background (dark on amber/yellow in
/// both themes).
pub const HIGHLIGHT_FG: Color32 = Color32::from_rgb(23, 23, 23);

/// Body text colour for log rows.
pub fn row_text(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(229, 231, 235) // Gray 200
    } else {
        Color32::from_rgb(17, 24, 39) // Gray 900
    }
}

/// Colour for failure messages in the detail pane.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Layout constants.
pub const DETAIL_PANE_WIDTH: f32 = 340.0;
pub const ROW_HEIGHT: f32 = 20.0;
pub const LOG_INPUT_ROWS: usize = 6;
