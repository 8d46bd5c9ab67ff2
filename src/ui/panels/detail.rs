// LogLens - ui/panels/detail.rs
//
// Analysis detail pane (side panel). Shows the selected line, then the
// loading indicator, the returned analysis verbatim, or a failure message.

use crate::app::state::{AppState, DetailState};
use crate::ui::theme;

/// Render the detail pane.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading("Log Analysis");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.detail != DetailState::Hidden && ui.button("\u{2715}").clicked() {
                // Discards the analysis result; any in-flight response is
                // dropped on arrival via the generation bump.
                state.clear_selection();
            }
        });
    });
    ui.separator();

    if let Some(line) = state.selected_line() {
        ui.label(egui::RichText::new(line).monospace().small());
        ui.separator();
    }

    match &state.detail {
        DetailState::Hidden => {
            ui.centered_and_justified(|ui| {
                ui.label("Select a log line to analyze it.");
            });
        }
        DetailState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Analyzing with Gemini...");
            });
        }
        DetailState::Ready(analysis) => {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.label(analysis);
                });
        }
        DetailState::Failed(message) => {
            ui.colored_label(theme::ERROR_TEXT, format!("Error: {message}"));
        }
    }
}
