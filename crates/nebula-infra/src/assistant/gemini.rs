//! Gemini REST client implementing the writing assistant port.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use nebula_core::ports::{SUMMARY_FAILED, SUMMARY_UNAVAILABLE, WritingAssistant};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const SUMMARY_INPUT_CHARS: usize = 5000;
const TITLE_INPUT_CHARS: usize = 2000;

/// Gemini client configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key. `None` disables the service and every call returns its fallback.
    pub api_key: Option<String>,
    pub model: String,
    /// Scheme and host, without the `/v1beta` path.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl GeminiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let api_key = std::env::var("API_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty());

        Self {
            api_key,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(
                std::env::var("GEMINI_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum AssistantError {
    #[error("No API key configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Service answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unreadable response: {0}")]
    Decode(String),
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, concatenated.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().filter_map(|p| p.text.as_deref()).collect())
            .unwrap_or_default()
    }
}

/// First `max` characters of `s`.
fn truncate_chars(s: &str, max: usize) -> &str {
    s.char_indices().nth(max).map_or(s, |(i, _)| &s[..i])
}

/// Writing assistant backed by the Gemini `generateContent` endpoint.
pub struct GeminiAssistant {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiAssistant {
    pub fn new(config: GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });

        if config.api_key.is_none() {
            tracing::warn!("No Gemini API key set. Assistant features will return fallbacks.");
        }

        Self { client, config }
    }

    /// Create from environment configuration.
    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AssistantError::NotConfigured)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        let body = GenerateContentRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AssistantError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Decode(e.to_string()))?;

        tracing::debug!(model = %self.config.model, "Assistant response received");
        Ok(parsed.text())
    }
}

#[async_trait]
impl WritingAssistant for GeminiAssistant {
    async fn summarize(&self, content: &str) -> String {
        if !self.is_configured() {
            return SUMMARY_UNAVAILABLE.to_string();
        }

        let prompt = format!(
            "Summarize the following blog post content in 2 sentences, engaging and punchy:\n\n{}",
            truncate_chars(content, SUMMARY_INPUT_CHARS)
        );
        match self.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "Summary generation failed");
                SUMMARY_FAILED.to_string()
            }
        }
    }

    async fn suggest_title(&self, content: &str) -> String {
        if !self.is_configured() {
            return String::new();
        }

        let prompt = format!(
            "Suggest a catchy, modern blog post title (no quotes) based on this content:\n\n{}",
            truncate_chars(content, TITLE_INPUT_CHARS)
        );
        match self.generate(&prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::error!(error = %e, "Title suggestion failed");
                String::new()
            }
        }
    }

    async fn improve(&self, content: &str) -> String {
        if !self.is_configured() {
            return content.to_string();
        }

        let prompt = format!(
            "Act as a professional editor. Improve the grammar and flow of the following text. \
             Keep the markdown formatting intact. Do not add conversational filler:\n\n{content}"
        );
        match self.generate(&prompt).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => content.to_string(),
            Err(e) => {
                tracing::error!(error = %e, "Content improvement failed");
                content.to_string()
            }
        }
    }
}
