// LogLens - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogLens";

/// Application identifier used for config directories.
pub const APP_ID: &str = "LogLens";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Filtering
// =============================================================================

/// Debounce quiet period in milliseconds for log and search input.
/// Rapid keystrokes within this window collapse to a single filter pass.
pub const DEFAULT_FILTER_DEBOUNCE_MS: u64 = 200;

/// Minimum user-configurable debounce (ms).
pub const MIN_FILTER_DEBOUNCE_MS: u64 = 50;

/// Maximum user-configurable debounce (ms).
pub const MAX_FILTER_DEBOUNCE_MS: u64 = 2_000;

// =============================================================================
// Analysis proxy
// =============================================================================

/// Default port the analysis proxy listens on.
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Base URL the GUI uses to reach the analysis proxy when no override is
/// configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Upstream generative model invoked by the proxy.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

/// Base URL of the Gemini generative-language REST API.
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the Gemini API credential.
/// The proxy refuses to start without it.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Upstream request timeout in seconds. Bounds a hung upstream connection,
/// not normal generation latency.
pub const GEMINI_TIMEOUT_SECS: u64 = 120;

/// Error body sent to callers on any upstream failure. The underlying cause
/// is logged server-side only.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze log.";

/// Error body sent when the `log` field is missing or empty.
pub const LOG_REQUIRED_MESSAGE: &str = "Log message is required.";

// =============================================================================
// Input limits
// =============================================================================

/// Maximum size of a log file preloaded into the paste buffer via the CLI
/// or the File menu. Larger files are refused with a warning.
pub const MAX_PRELOAD_FILE_BYTES: u64 = 16 * 1024 * 1024; // 16 MB

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
