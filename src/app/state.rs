// LogLens - app/state.rs
//
// Application state management. Holds the log buffer, search query,
// filtered view, selection, and detail-pane state.
// Owned by the eframe::App implementation.

use crate::core::buffer::LogBuffer;
use crate::core::filter;
use std::time::Instant;

/// What the detail pane is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    /// No line selected.
    #[default]
    Hidden,

    /// A request is outstanding for the selected line.
    Loading,

    /// The analysis text returned by the proxy, displayed verbatim.
    Ready(String),

    /// A user-displayable failure message.
    Failed(String),
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Raw contents of the log input textarea.
    pub raw_input: String,

    /// Parsed log lines (rebuilt from `raw_input` on every edit).
    pub buffer: LogBuffer,

    /// Raw contents of the search field. Trimmed before matching.
    pub query_input: String,

    /// Indices of lines matching the current query (into `buffer`).
    pub filtered_indices: Vec<usize>,

    /// Index of the currently selected row in `filtered_indices`.
    pub selected_index: Option<usize>,

    /// Monotonically increasing id of the latest selection. Analysis
    /// responses carrying an older generation are discarded.
    pub selection_generation: u64,

    /// Detail pane contents for the selected line.
    pub detail: DetailState,

    /// Base URL of the analysis proxy.
    pub server_url: String,

    /// Set by the results panel when a row is clicked; consumed by the
    /// eframe::App, which issues the analysis request.
    pub pending_analysis: Option<usize>,

    /// Debounce timer shared by the log and search inputs.
    pub debounce: crate::app::debounce::Debouncer,

    /// Dark (true) or light (false) visuals.
    pub dark_mode: bool,

    /// UI body font size in points.
    pub font_size: f32,
}

impl AppState {
    pub fn new(server_url: String, debounce_ms: u64, dark_mode: bool, font_size: f32) -> Self {
        Self {
            raw_input: String::new(),
            buffer: LogBuffer::new(),
            query_input: String::new(),
            filtered_indices: Vec::new(),
            selected_index: None,
            selection_generation: 0,
            detail: DetailState::Hidden,
            server_url,
            pending_analysis: None,
            debounce: crate::app::debounce::Debouncer::new(
                std::time::Duration::from_millis(debounce_ms),
            ),
            dark_mode,
            font_size,
        }
    }

    /// The normalised query used for matching.
    pub fn query(&self) -> &str {
        filter::normalise_query(&self.query_input)
    }

    /// Rebuild the buffer from the textarea contents and arm the debounce.
    /// The filter pass itself runs when the debounce fires.
    pub fn logs_edited(&mut self, now: Instant) {
        self.buffer.set_raw(&self.raw_input);
        self.debounce.trigger(now);
    }

    /// The search field changed; arm the debounce.
    pub fn query_edited(&mut self, now: Instant) {
        self.debounce.trigger(now);
    }

    /// Recompute filtered indices from the buffer and query.
    pub fn apply_filter(&mut self) {
        self.filtered_indices = filter::apply(self.buffer.lines(), &self.query_input);

        // Clear selection if it is out of range after re-filtering.
        if let Some(idx) = self.selected_index {
            if idx >= self.filtered_indices.len() {
                self.clear_selection();
            }
        }
    }

    /// The raw text of the currently selected line, if any.
    pub fn selected_line(&self) -> Option<&str> {
        self.selected_index
            .and_then(|idx| self.filtered_indices.get(idx))
            .and_then(|&line_idx| self.buffer.line(line_idx))
    }

    /// Select the row at `display_idx`, superseding any previous selection,
    /// and return the generation for the new analysis request.
    ///
    /// At most one row is selected at a time; the previous selection (and
    /// its in-flight result, if any) is discarded.
    pub fn select(&mut self, display_idx: usize) -> u64 {
        self.selected_index = Some(display_idx);
        self.selection_generation += 1;
        self.detail = DetailState::Loading;
        self.selection_generation
    }

    /// Close the detail pane, clearing the selection and discarding the
    /// analysis result. Bumps the generation so any in-flight response is
    /// dropped on arrival.
    pub fn clear_selection(&mut self) {
        self.selected_index = None;
        self.selection_generation += 1;
        self.detail = DetailState::Hidden;
    }

    /// Summary-count line for the status bar.
    pub fn summary(&self) -> String {
        filter::summary(self.buffer.len(), self.filtered_indices.len())
    }
}
