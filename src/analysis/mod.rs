// LogLens - analysis/mod.rs
//
// Upstream generative-text provider abstraction. The proxy route talks to
// this trait, never to a concrete API, so tests can substitute a stub.

mod gemini;

pub use gemini::GeminiProvider;

use crate::util::error::AnalysisError;
use async_trait::async_trait;

/// A generative-text backend that can explain one log line.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Provider name for logging/identification.
    fn name(&self) -> &str;

    /// Produce a plain-text explanation for one raw log line.
    async fn analyze(&self, log_line: &str) -> Result<String, AnalysisError>;
}

/// Build the fixed prompt wrapping a raw log line.
///
/// The template asks for probable cause plus an actionable fix, as plain
/// text, so the client can display the response verbatim.
pub fn build_prompt(log_line: &str) -> String {
    format!(
        "Analyze the following Cisco IOS log message. Provide a brief explanation \
         of the probable cause and a clear, actionable solution.\n\
         Format the output as plain text.\n\n\
         Log Message: \"{log_line}\"\n\n\
         Analysis:"
    )
}
