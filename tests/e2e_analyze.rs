// LogLens - tests/e2e_analyze.rs
//
// End-to-end tests for the analysis proxy.
//
// These tests exercise the real axum router over a real TCP listener on an
// ephemeral port, driven with a real HTTP client — only the upstream
// generative API is substituted, via the AnalysisProvider seam. This
// exercises the full path from a request body on the wire to the JSON
// response contract, including the error-sanitisation guarantee.

use async_trait::async_trait;
use loglens::analysis::AnalysisProvider;
use loglens::server::{create_router, ServerState};
use loglens::util::error::AnalysisError;
use std::sync::Arc;

// =============================================================================
// Harness
// =============================================================================

/// Sensitive marker planted in the stub's upstream error; must never appear
/// in a response body.
const UPSTREAM_SECRET: &str = "quota exceeded for project internal-1234";

/// What the stubbed upstream does when invoked.
enum StubBehaviour {
    Succeed(&'static str),
    FailUpstream,
}

struct StubProvider {
    behaviour: StubBehaviour,
}

#[async_trait]
impl AnalysisProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn analyze(&self, _log_line: &str) -> Result<String, AnalysisError> {
        match self.behaviour {
            StubBehaviour::Succeed(text) => Ok(text.to_string()),
            StubBehaviour::FailUpstream => Err(AnalysisError::UpstreamStatus {
                status: reqwest::StatusCode::TOO_MANY_REQUESTS,
                body: UPSTREAM_SECRET.to_string(),
            }),
        }
    }
}

/// Serve the real router on an ephemeral port; returns the base URL.
async fn start_server(behaviour: StubBehaviour) -> String {
    let state = Arc::new(ServerState {
        provider: Arc::new(StubProvider { behaviour }),
    });
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    format!("http://{addr}")
}

// =============================================================================
// Happy path
// =============================================================================

/// A valid log line is relayed to the provider and the generated text comes
/// back under the `analysis` key.
#[tokio::test]
async fn e2e_analyze_happy_path() {
    let base = start_server(StubBehaviour::Succeed("Likely cause: CRL server unreachable.")).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/analyze-log"))
        .json(&serde_json::json!({ "log": "%PKI-3-CRL_FETCH_FAIL" }))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(
        body,
        serde_json::json!({ "analysis": "Likely cause: CRL server unreachable." })
    );
}

// =============================================================================
// Input validation
// =============================================================================

/// An empty object (no `log` field) is rejected without contacting the
/// upstream API.
#[tokio::test]
async fn e2e_missing_log_field_returns_400() {
    let base = start_server(StubBehaviour::Succeed("should never be reached")).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/analyze-log"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["error"], "Log message is required.");
}

/// An empty (or whitespace-only) `log` value is treated the same as a
/// missing field.
#[tokio::test]
async fn e2e_empty_log_value_returns_400() {
    let base = start_server(StubBehaviour::Succeed("should never be reached")).await;
    let client = reqwest::Client::new();

    for log in ["", "   "] {
        let response = client
            .post(format!("{base}/analyze-log"))
            .json(&serde_json::json!({ "log": log }))
            .send()
            .await
            .expect("request");

        assert_eq!(
            response.status(),
            reqwest::StatusCode::BAD_REQUEST,
            "log value {log:?} should be rejected"
        );
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body["error"], "Log message is required.");
    }
}

// =============================================================================
// Upstream failure
// =============================================================================

/// Upstream failures surface as a 500 with the fixed generic message; the
/// provider-internal detail never reaches the caller.
#[tokio::test]
async fn e2e_upstream_failure_returns_generic_500() {
    let base = start_server(StubBehaviour::FailUpstream).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/analyze-log"))
        .json(&serde_json::json!({ "log": "%SYS-5-CONFIG_I: Configured from console" }))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let text = response.text().await.expect("body text");
    assert!(
        !text.contains(UPSTREAM_SECRET),
        "upstream detail leaked to the caller: {text}"
    );
    let body: serde_json::Value = serde_json::from_str(&text).expect("json body");
    assert_eq!(body["error"], "Failed to analyze log.");
}

// =============================================================================
// Health
// =============================================================================

/// The liveness route reports status and version.
#[tokio::test]
async fn e2e_health_check() {
    let base = start_server(StubBehaviour::Succeed("unused")).await;

    let response = reqwest::Client::new()
        .get(format!("{base}/health"))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
