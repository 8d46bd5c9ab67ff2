// LogLens - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. All errors preserve the causal chain
// for diagnostic logging.

use std::fmt;

// ---------------------------------------------------------------------------
// Analysis errors
// ---------------------------------------------------------------------------

/// Errors produced while obtaining an analysis from the upstream
/// generative-text API. These are logged server-side in full; callers of the
/// proxy only ever see a fixed generic message.
#[derive(Debug)]
pub enum AnalysisError {
    /// The HTTP request to the upstream API failed at the transport level
    /// (connect, TLS, timeout, body read).
    Http { source: reqwest::Error },

    /// The upstream API answered with a non-success status. The body is
    /// retained for the server log and must never be relayed to callers.
    UpstreamStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The upstream response parsed but contained no generated text.
    EmptyResponse,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { source } => write!(f, "Upstream request failed: {source}"),
            Self::UpstreamStatus { status, body } => {
                write!(f, "Upstream returned {status}: {body}")
            }
            Self::EmptyResponse => write!(f, "Upstream response contained no generated text"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http { source } => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(source: reqwest::Error) -> Self {
        Self::Http { source }
    }
}
