// LogLens - app/analyze.rs
//
// Analysis request lifecycle. Sends one selected log line to the analysis
// proxy on a background thread, delivering the result to the UI thread via
// an mpsc channel.
//
// Architecture:
//   - `AnalysisManager` lives on the UI thread; `run_request` runs on a
//     background thread, one per request.
//   - Each request carries the selection generation it was issued for; the
//     UI discards messages from superseded generations (a new selection
//     supersedes the view, the in-flight request is not cancelled).
//   - No retries: a failed analysis is terminal until the user re-selects
//     the line.

use std::sync::mpsc;
use std::time::Duration;

/// Messages sent from a request thread to the UI thread.
#[derive(Debug, Clone)]
pub enum AnalysisProgress {
    /// The proxy returned an analysis for the given selection generation.
    Completed { generation: u64, analysis: String },

    /// The request failed; `message` is already user-displayable.
    Failed { generation: u64, message: String },
}

/// Fallback message when no more specific cause can be shown.
const GENERIC_FAILURE: &str = "Failed to fetch analysis.";

/// How long the GUI waits for the proxy before giving up. Generative
/// upstreams are slow; this only bounds a hung connection.
const REQUEST_TIMEOUT_SECS: u64 = 150;

/// Manages analysis requests on background threads.
pub struct AnalysisManager {
    progress_tx: mpsc::Sender<AnalysisProgress>,
    progress_rx: mpsc::Receiver<AnalysisProgress>,
    client: reqwest::blocking::Client,
}

impl AnalysisManager {
    pub fn new() -> Self {
        let (progress_tx, progress_rx) = mpsc::channel();
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self {
            progress_tx,
            progress_rx,
            client,
        }
    }

    /// Send one log line to the proxy at `base_url`.
    ///
    /// Spawns a background thread immediately; the outcome arrives via
    /// `poll_progress` tagged with `generation`.
    pub fn request_analysis(&self, generation: u64, base_url: &str, log_line: &str) {
        let tx = self.progress_tx.clone();
        let client = self.client.clone();
        let url = format!("{}/analyze-log", base_url.trim_end_matches('/'));
        let log_line = log_line.to_string();

        std::thread::spawn(move || {
            let msg = run_request(&client, &url, &log_line, generation);
            // Receiver dropped means the UI closed; nothing to do.
            let _ = tx.send(msg);
        });

        tracing::info!(generation, "Analysis request started");
    }

    /// Poll for progress messages without blocking. Returns all pending
    /// messages.
    pub fn poll_progress(&self) -> Vec<AnalysisProgress> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.progress_rx.try_recv() {
            messages.push(msg);
        }
        messages
    }
}

impl Default for AnalysisManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Issue the HTTP request and shape the outcome into a progress message.
fn run_request(
    client: &reqwest::blocking::Client,
    url: &str,
    log_line: &str,
    generation: u64,
) -> AnalysisProgress {
    let response = match client
        .post(url)
        .json(&serde_json::json!({ "log": log_line }))
        .send()
    {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "Analysis request transport failure");
            return AnalysisProgress::Failed {
                generation,
                message: GENERIC_FAILURE.to_string(),
            };
        }
    };

    let status = response.status();
    let body = match response.text() {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(error = %e, "Analysis response body read failure");
            return AnalysisProgress::Failed {
                generation,
                message: GENERIC_FAILURE.to_string(),
            };
        }
    };

    if !status.is_success() {
        return AnalysisProgress::Failed {
            generation,
            message: error_message(status.as_u16(), &body),
        };
    }

    match serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("analysis").and_then(|a| a.as_str()).map(String::from))
    {
        Some(analysis) => AnalysisProgress::Completed {
            generation,
            analysis,
        },
        None => {
            tracing::warn!(status = status.as_u16(), "Analysis response missing `analysis` field");
            AnalysisProgress::Failed {
                generation,
                message: GENERIC_FAILURE.to_string(),
            }
        }
    }
}

/// Derive a user-displayable message from a non-success proxy response.
///
/// Preference order: the structured `error` field if the body parses as a
/// JSON object containing one; otherwise the raw status and body text;
/// otherwise a generic message.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(error) = value.get("error").and_then(|e| e.as_str()) {
            return error.to_string();
        }
        return GENERIC_FAILURE.to_string();
    }
    if body.is_empty() {
        return format!("Server returned an error: {status}.");
    }
    format!("Server returned an error: {status}. Response: {body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_error_field_preferred() {
        let msg = error_message(400, r#"{"error":"Log message is required."}"#);
        assert_eq!(msg, "Log message is required.");
    }

    #[test]
    fn test_json_body_without_error_field_falls_back_to_generic() {
        let msg = error_message(500, r#"{"detail":"boom"}"#);
        assert_eq!(msg, GENERIC_FAILURE);
    }

    #[test]
    fn test_unparseable_body_uses_raw_status_and_text() {
        let msg = error_message(502, "Bad Gateway");
        assert_eq!(msg, "Server returned an error: 502. Response: Bad Gateway");
    }

    #[test]
    fn test_empty_body_uses_status_only() {
        let msg = error_message(503, "");
        assert_eq!(msg, "Server returned an error: 503.");
    }
}
