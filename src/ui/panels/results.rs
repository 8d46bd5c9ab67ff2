// LogLens - ui/panels/results.rs
//
// Virtual-scrolling filtered results view (central area).
//
// Uses egui's `ScrollArea::show_rows` which renders only the rows currently
// visible in the viewport, giving O(1) rendering cost regardless of line
// count. Each row is a LayoutJob: query occurrences get a highlight
// background, everything else the plain row colour. egui renders the text
// verbatim, so line content can never be interpreted as markup.

use crate::app::state::AppState;
use crate::core::highlight;
use crate::ui::theme;
use egui::text::{LayoutJob, TextFormat};

/// Render the results panel.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.filtered_indices.is_empty() {
        ui.centered_and_justified(|ui| {
            if state.buffer.is_empty() {
                ui.label("No log lines loaded.\nPaste logs into the box above.");
            } else {
                ui.label("No lines match the current search.");
            }
        });
        return;
    }

    let row_height = theme::ROW_HEIGHT;
    let total_rows = state.filtered_indices.len();
    let query = state.query().to_string();

    // Clicks are collected and applied after show_rows so we do not borrow
    // `state` mutably while rows still hold references into the buffer.
    let mut clicked_row: Option<usize> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show_rows(ui, row_height, total_rows, |ui, row_range| {
            for display_idx in row_range {
                let Some(&line_idx) = state.filtered_indices.get(display_idx) else {
                    continue;
                };
                let Some(line) = state.buffer.line(line_idx) else {
                    continue;
                };

                let is_selected = state.selected_index == Some(display_idx);
                let job = row_layout(line, &query, state.dark_mode, state.font_size);

                if ui.selectable_label(is_selected, job).clicked() {
                    clicked_row = Some(display_idx);
                }
            }
        });

    if let Some(display_idx) = clicked_row {
        // The eframe::App issues the analysis request for this row; the
        // previous selection is visually dropped when `select` runs there.
        state.pending_analysis = Some(display_idx);
    }
}

/// Build the styled row text: highlight spans on a plain background.
fn row_layout(line: &str, query: &str, dark_mode: bool, font_size: f32) -> LayoutJob {
    let font = egui::FontId::monospace(font_size - 2.0);
    let plain = TextFormat {
        font_id: font.clone(),
        color: theme::row_text(dark_mode),
        ..Default::default()
    };
    let marked = TextFormat {
        font_id: font,
        color: theme::HIGHLIGHT_FG,
        background: theme::highlight_bg(dark_mode),
        ..Default::default()
    };

    let mut job = LayoutJob::default();
    let mut cursor = 0;
    for span in highlight::spans(line, query) {
        if span.start > cursor {
            job.append(&line[cursor..span.start], 0.0, plain.clone());
        }
        job.append(&line[span.start..span.end], 0.0, marked.clone());
        cursor = span.end;
    }
    if cursor < line.len() {
        job.append(&line[cursor..], 0.0, plain);
    }
    job
}
