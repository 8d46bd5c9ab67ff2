// LogLens - platform/config.rs
//
// Platform-specific config directory resolution and config.toml loading
// with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogLens configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/loglens/ or %APPDATA%\LogLens\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[analysis]` section.
    pub analysis: AnalysisSection,
    /// `[server]` section.
    pub server: ServerSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
    /// Filter input debounce in ms.
    pub filter_debounce_ms: Option<u64>,
}

/// `[analysis]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct AnalysisSection {
    /// Base URL of the analysis proxy, consulted by the GUI.
    pub server_url: Option<String>,
    /// Upstream generative model invoked by the proxy.
    pub model: Option<String>,
}

/// `[server]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Port the proxy listens on.
    pub port: Option<u16>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// All values are validated against named constants at load time. Invalid
/// values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,
    /// Filter input debounce in ms.
    pub filter_debounce_ms: u64,

    // -- Analysis --
    /// Base URL of the analysis proxy.
    pub server_url: String,
    /// Upstream generative model.
    pub model: String,

    // -- Server --
    /// Port the proxy listens on.
    pub port: u16,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            filter_debounce_ms: constants::DEFAULT_FILTER_DEBOUNCE_MS,
            server_url: constants::DEFAULT_SERVER_URL.to_string(),
            model: constants::DEFAULT_GEMINI_MODEL.to_string(),
            port: constants::DEFAULT_SERVER_PORT,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. If the file does not exist, returns defaults with no warnings
/// (first-run). If the file is unparseable, returns defaults with a warning
/// -- the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");
    let (config, mut parse_warnings) = parse_config(&content, &config_path);
    warnings.append(&mut parse_warnings);
    (config, warnings)
}

/// Validate raw TOML content into an `AppConfig`.
fn parse_config(content: &str, config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    let raw: RawConfig = match toml::from_str(content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let mut config = AppConfig::default();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(format!(
                "[ui] font_size = {size} is out of range ({}-{}). Using default ({}).",
                constants::MIN_FONT_SIZE,
                constants::MAX_FONT_SIZE,
                constants::DEFAULT_FONT_SIZE,
            ));
        }
    }

    // -- UI: filter_debounce_ms --
    if let Some(ms) = raw.ui.filter_debounce_ms {
        if (constants::MIN_FILTER_DEBOUNCE_MS..=constants::MAX_FILTER_DEBOUNCE_MS).contains(&ms) {
            config.filter_debounce_ms = ms;
        } else {
            warnings.push(format!(
                "[ui] filter_debounce_ms = {ms} is out of range ({}-{}). Using default ({}).",
                constants::MIN_FILTER_DEBOUNCE_MS,
                constants::MAX_FILTER_DEBOUNCE_MS,
                constants::DEFAULT_FILTER_DEBOUNCE_MS,
            ));
        }
    }

    // -- Analysis: server_url --
    if let Some(ref url) = raw.analysis.server_url {
        if url.starts_with("http://") || url.starts_with("https://") {
            config.server_url = url.trim_end_matches('/').to_string();
        } else {
            warnings.push(format!(
                "[analysis] server_url = \"{url}\" must start with http:// or https://. Using default ({}).",
                constants::DEFAULT_SERVER_URL,
            ));
        }
    }

    // -- Analysis: model --
    if let Some(ref model) = raw.analysis.model {
        if !model.trim().is_empty() {
            config.model = model.trim().to_string();
        }
    }

    // -- Server: port --
    if let Some(port) = raw.server.port {
        if port > 0 {
            config.port = port;
        } else {
            warnings.push(format!(
                "[server] port = 0 is not usable. Using default ({}).",
                constants::DEFAULT_SERVER_PORT,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}
