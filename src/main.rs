// LogLens - main.rs
//
// GUI application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Config loading and validation
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use loglens::app;
pub use loglens::core;
pub use loglens::platform;
pub use loglens::ui;
pub use loglens::util;

use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// LogLens - paste-and-filter log analyser with AI-assisted explanations.
///
/// Paste logs (or preload a file), filter them as you type, and select a
/// line to request an explanation from the companion loglens-server proxy.
#[derive(Parser, Debug)]
#[command(name = "LogLens", version, about)]
struct Cli {
    /// Log file to preload into the paste buffer.
    path: Option<PathBuf>,

    /// Base URL of the analysis proxy (overrides config).
    #[arg(short = 's', long = "server-url")]
    server_url: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Read a log file into the paste buffer, refusing oversized files.
pub fn load_log_file(path: &Path) -> Result<String, String> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| format!("Cannot read '{}': {e}", path.display()))?;
    if metadata.len() > util::constants::MAX_PRELOAD_FILE_BYTES {
        return Err(format!(
            "'{}' is {} bytes, exceeds the {} byte preload limit",
            path.display(),
            metadata.len(),
            util::constants::MAX_PRELOAD_FILE_BYTES,
        ));
    }
    std::fs::read_to_string(path).map_err(|e| format!("Cannot read '{}': {e}", path.display()))
}

/// Apply theme and font-size config to the egui context.
fn configure_style(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Body,
        egui::FontId::new(font_size, egui::FontFamily::Proportional),
    );
    style.text_styles.insert(
        egui::TextStyle::Monospace,
        egui::FontId::new(font_size - 2.0, egui::FontFamily::Monospace),
    );
    ctx.set_style(style);
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug, None);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogLens starting"
    );

    // Load and validate config.toml
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Server URL precedence: CLI override > config file > built-in default.
    let server_url = cli
        .server_url
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or(config.server_url);

    let mut state = app::state::AppState::new(
        server_url,
        config.filter_debounce_ms,
        config.dark_mode,
        config.font_size,
    );

    // Preload a log file given on the CLI.
    if let Some(ref path) = cli.path {
        match load_log_file(path) {
            Ok(text) => {
                tracing::info!(file = %path.display(), bytes = text.len(), "Preloaded log file");
                state.raw_input = text;
                state.logs_edited(Instant::now());
            }
            Err(msg) => {
                tracing::warn!(warning = %msg, "Log file preload failed");
            }
        }
    }

    let dark_mode = state.dark_mode;
    let font_size = state.font_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_style(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::LogLensApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LogLens GUI: {e}");
        std::process::exit(1);
    }
}
