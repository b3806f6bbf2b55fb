//! LLM second-opinion bridge
//!
//! Sends a statement to an OpenAI-style chat-completions endpoint and parses
//! the free-text reply into the same verdict vocabulary as the rule engine.
//! Every failure mode maps to a sentinel opinion; this module never returns
//! an error to the caller and never blocks the rule-based path.

use crate::config::LlmConfig;
use crate::rules::Agency;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Environment variable consulted when no API key is passed explicitly
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Status reported when no client or credential is available
pub const STATUS_UNAVAILABLE: &str = "LLM not available";

/// Status reported when the request or response handling fails
pub const STATUS_ERROR: &str = "LLM error";

/// Status reported when the reply carries no `Status:` label
pub const STATUS_UNKNOWN: &str = "Unknown";

static STATUS_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"Status:\s*([^\r\n]+)").ok());
static EXPLANATION_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"Explanation:\s*([^\r\n]+)").ok());

/// The model's opinion on a statement.
///
/// Loosely typed on purpose: both fields originate from free-text parsing
/// of an external reply and carry sentinel values on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmOpinion {
    pub status: String,
    pub explanation: String,
}

impl LlmOpinion {
    fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            status: STATUS_UNAVAILABLE.to_string(),
            explanation: reason.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            explanation: message.into(),
        }
    }
}

#[derive(Debug, Error)]
enum LlmError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion response contained no choices")]
    EmptyResponse,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Client for the LLM second-opinion endpoint
pub struct LlmReviewer {
    config: LlmConfig,
    client: Option<reqwest::blocking::Client>,
}

impl LlmReviewer {
    /// Create a reviewer from the LLM configuration section.
    ///
    /// A client that cannot be constructed is recorded as absent; every
    /// later call then returns the unavailable sentinel instead of failing.
    pub fn new(config: LlmConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .ok();
        Self { config, client }
    }

    /// Ask the model for a second opinion on a statement.
    ///
    /// Credential resolution order: explicit argument, then the
    /// `OPENAI_API_KEY` environment variable, then the unavailable sentinel.
    pub fn review(&self, text: &str, agency: Agency, api_key: Option<&str>) -> LlmOpinion {
        let key = match resolve_api_key(api_key) {
            Some(key) => key,
            None => return LlmOpinion::unavailable("No OpenAI API key provided."),
        };
        self.review_with_key(text, agency, Some(key.as_str()))
    }

    /// Like [`review`](Self::review), but without the environment fallback.
    pub fn review_with_key(&self, text: &str, agency: Agency, api_key: Option<&str>) -> LlmOpinion {
        let Some(key) = api_key else {
            return LlmOpinion::unavailable("No OpenAI API key provided.");
        };
        let Some(client) = &self.client else {
            return LlmOpinion::unavailable("HTTP client could not be constructed.");
        };

        let prompt = build_prompt(text, agency);
        match self.complete(client, key, &prompt) {
            Ok(content) => parse_reply(&content),
            Err(e) => {
                tracing::warn!(error = %e, "LLM second-opinion call failed");
                LlmOpinion::error(e.to_string())
            }
        }
    }

    fn complete(
        &self,
        client: &reqwest::blocking::Client,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.config.api_base.trim_end_matches('/'));
        let payload = serde_json::json!({
            "model": self.config.model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        });

        let response: ChatResponse = client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&payload)
            .send()?
            .error_for_status()?
            .json()?;

        let choice = response.choices.into_iter().next().ok_or(LlmError::EmptyResponse)?;
        Ok(choice.message.content.trim().to_string())
    }
}

/// Resolve the API key from the explicit argument or the environment
pub fn resolve_api_key(explicit: Option<&str>) -> Option<String> {
    match explicit {
        Some(key) if !key.is_empty() => Some(key.to_string()),
        _ => std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()),
    }
}

/// The fixed prompt instructing the model to use the three-way vocabulary
/// and the two-line reply format
fn build_prompt(text: &str, agency: Agency) -> String {
    format!(
        r#"You are a regulatory compliance expert. Review the following medical claim for compliance with {agency} regulations.
Classify as 'Compliant', 'Non-Compliant', or 'Compliant with Evidence'.
If Non-Compliant, provide a brief explanation. If Compliant with Evidence, explain what evidence is present.

Medical Claim: "{text}"

Respond in this format:
Status: <Compliant/Non-Compliant/Compliant with Evidence>
Explanation: <short explanation>"#
    )
}

/// Best-effort parse of the two-line reply format.
///
/// Missing labels degrade: status falls back to "Unknown", explanation to
/// the full raw reply. The model following the template is not guaranteed,
/// so this stays a loose parser by design.
fn parse_reply(content: &str) -> LlmOpinion {
    let capture = |re: &Option<Regex>| {
        re.as_ref()
            .and_then(|re| re.captures(content))
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    };

    let status = capture(&STATUS_RE).unwrap_or_else(|| STATUS_UNKNOWN.to_string());
    let explanation = capture(&EXPLANATION_RE).unwrap_or_else(|| content.trim().to_string());

    LlmOpinion { status, explanation }
}
