// LogLens - bin/server.rs
//
// Analysis proxy entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation
// 3. Fatal API-credential check (before the listener is bound)
// 4. Router construction and serving

use clap::Parser;
use loglens::analysis::GeminiProvider;
use loglens::platform;
use loglens::server::{create_router, ServerState};
use loglens::util;
use std::net::SocketAddr;
use std::sync::Arc;

/// loglens-server - stateless proxy between LogLens and the Gemini API.
///
/// Accepts one log line per request, wraps it in a fixed prompt, forwards
/// it to the Gemini generative-language API, and relays the plain-text
/// explanation.
#[derive(Parser, Debug)]
#[command(name = "loglens-server", version, about)]
struct Cli {
    /// Port to listen on (overrides config).
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug, None);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "loglens-server starting"
    );

    // Load and validate config.toml
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // The API credential is required; refuse to serve without it.
    let api_key = match std::env::var(util::constants::GEMINI_API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            tracing::error!(
                env = util::constants::GEMINI_API_KEY_ENV,
                "API key not found; refusing to start"
            );
            eprintln!("\nFATAL ERROR: Gemini API key not found.");
            eprintln!(
                "Set the {} environment variable before starting loglens-server.\n",
                util::constants::GEMINI_API_KEY_ENV
            );
            std::process::exit(1);
        }
    };

    let provider = Arc::new(GeminiProvider::new(api_key, config.model.clone()));
    let state = Arc::new(ServerState { provider });
    let app = create_router(state);

    let port = cli.port.unwrap_or(config.port);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Failed to bind listener");
            eprintln!("Error: cannot bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, model = %config.model, "loglens-server listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
        eprintln!("Error: server failed: {e}");
        std::process::exit(1);
    }
}
