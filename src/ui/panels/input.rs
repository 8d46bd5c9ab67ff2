// LogLens - ui/panels/input.rs
//
// Log paste area and search field (top panel). Edits arm the shared
// debounce; the filter pass itself runs when the timer fires in gui.rs.

use crate::app::state::AppState;
use crate::ui::theme;
use std::time::Instant;

/// Render the input controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label("Log Data");
    let log_response = ui.add(
        egui::TextEdit::multiline(&mut state.raw_input)
            .desired_rows(theme::LOG_INPUT_ROWS)
            .desired_width(f32::INFINITY)
            .hint_text("Paste Cisco logs here...")
            .font(egui::TextStyle::Monospace),
    );
    if log_response.changed() {
        state.logs_edited(Instant::now());
    }

    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("Search");
        let search_response = ui.add(
            egui::TextEdit::singleline(&mut state.query_input)
                .desired_width(f32::INFINITY)
                .hint_text("Filter logs..."),
        );
        if search_response.changed() {
            state.query_edited(Instant::now());
        }
    });
}
