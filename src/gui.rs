// LogLens - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the UI panels, the debounce timer, and the analysis
// request lifecycle.

use crate::app::analyze::{AnalysisManager, AnalysisProgress};
use crate::app::state::{AppState, DetailState};
use crate::ui;
use std::time::{Duration, Instant};

/// How often the UI repaints while an analysis request is outstanding, so
/// the progress channel gets polled without user input.
const ANALYSIS_POLL_INTERVAL_MS: u64 = 100;

/// The LogLens application.
pub struct LogLensApp {
    pub state: AppState,
    pub analysis: AnalysisManager,
}

impl LogLensApp {
    /// Create a new application instance with the given state.
    pub fn new(mut state: AppState) -> Self {
        // Initial filter pass so a CLI-preloaded file renders immediately.
        state.apply_filter();
        Self {
            state,
            analysis: AnalysisManager::new(),
        }
    }
}

impl eframe::App for LogLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for analysis results. Messages carrying a superseded
        // generation belong to an earlier selection and are dropped.
        for msg in self.analysis.poll_progress() {
            match msg {
                AnalysisProgress::Completed {
                    generation,
                    analysis,
                } => {
                    if generation == self.state.selection_generation {
                        self.state.detail = DetailState::Ready(analysis);
                    } else {
                        tracing::debug!(generation, "Dropping stale analysis result");
                    }
                }
                AnalysisProgress::Failed {
                    generation,
                    message,
                } => {
                    if generation == self.state.selection_generation {
                        self.state.detail = DetailState::Failed(message);
                    } else {
                        tracing::debug!(generation, "Dropping stale analysis failure");
                    }
                }
            }
        }

        // Keep repainting while a request is outstanding so its completion
        // is picked up promptly.
        if self.state.detail == DetailState::Loading {
            ctx.request_repaint_after(Duration::from_millis(ANALYSIS_POLL_INTERVAL_MS));
        }

        // Debounced filter pass: rapid keystrokes collapse to one render.
        let now = Instant::now();
        if self.state.debounce.fire_if_due(now) {
            self.state.apply_filter();
        } else if let Some(remaining) = self.state.debounce.time_until_due(now) {
            ctx.request_repaint_after(remaining);
        }

        // A results row was clicked: supersede the previous selection and
        // issue exactly one request for the newly selected line.
        if let Some(display_idx) = self.state.pending_analysis.take() {
            let generation = self.state.select(display_idx);
            if let Some(line) = self.state.selected_line() {
                self.analysis
                    .request_analysis(generation, &self.state.server_url, line);
            }
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Log File\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Log files", &["log", "txt"])
                            .pick_file()
                        {
                            match crate::load_log_file(&path) {
                                Ok(text) => {
                                    self.state.raw_input = text;
                                    self.state.logs_edited(Instant::now());
                                }
                                Err(msg) => {
                                    tracing::warn!(warning = %msg, "Log file load failed");
                                }
                            }
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Input controls (log textarea + search field)
        egui::TopBottomPanel::top("input_panel").show(ctx, |ui| {
            ui::panels::input::render(ui, &mut self.state);
        });

        // Status bar with the summary count
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.state.summary());
            });
        });

        // Detail pane (right)
        egui::SidePanel::right("detail_pane")
            .default_width(ui::theme::DETAIL_PANE_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::panels::detail::render(ui, &mut self.state);
            });

        // Central panel (filtered results)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::results::render(ui, &mut self.state);
        });
    }
}
