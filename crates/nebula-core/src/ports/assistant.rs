//! Writing assistant port - abstraction over generative-text services.

use async_trait::async_trait;

/// Returned by [`WritingAssistant::summarize`] when no service is configured.
pub const SUMMARY_UNAVAILABLE: &str = "AI Service Unavailable (Missing Key)";

/// Returned by [`WritingAssistant::summarize`] when the service call fails.
pub const SUMMARY_FAILED: &str = "Could not generate summary.";

/// Generative-text helpers used by the post editor.
///
/// Every operation resolves to a plain string. Failures are absorbed by the
/// implementation and replaced by the documented fallback, so callers treat
/// the result as ordinary input.
#[async_trait]
pub trait WritingAssistant: Send + Sync {
    /// Two-sentence summary of the content.
    ///
    /// Falls back to [`SUMMARY_UNAVAILABLE`] or [`SUMMARY_FAILED`].
    async fn summarize(&self, content: &str) -> String;

    /// A title suggestion, or an empty string when none is available.
    async fn suggest_title(&self, content: &str) -> String;

    /// Copy-edited content, or the input unchanged when unavailable.
    async fn improve(&self, content: &str) -> String;
}
