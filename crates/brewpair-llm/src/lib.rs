//! LLM integration for Brewpair
//!
//! This crate provides:
//! - Chat-completion client for the OpenAI API
//! - Prompt construction for pairing requests
//! - Tolerant parsing of model replies, plus the deterministic fallback
//! - The pairing orchestrator tying the pipeline together

mod fallback;
mod pairing;
mod parse;
mod prompts;

pub use fallback::fallback_pairings;
pub use pairing::{PairingEngine, PairingResult, RequestTracker, MAX_PAIRINGS};
pub use parse::{parse_pairings, RawPairing};
pub use prompts::{build_prompt, response_format};

use serde::{Deserialize, Serialize};
use std::env;

/// Chat-completion model used for pairing requests
pub const MODEL: &str = "gpt-4o-mini";

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const TEMPERATURE: f32 = 0.5;

/// Chat-completion API client for pairing suggestions
pub struct LlmClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    response_format: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

/// Decoded chat-completion reply; the pairing JSON rides in the first
/// choice's message content
#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletion {
    /// Content of the first choice, when the provider returned one
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
    }
}

/// Error type for model gateway calls
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("pairing request failed: {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("JSON decode error: {0}")]
    Decode(String),
}

impl LlmClient {
    /// Create a client from the environment.
    ///
    /// Returns `None` when `OPENAI_API_KEY` is unset or blank; callers
    /// treat that as a routing decision, not an error.
    pub fn from_env() -> Option<Self> {
        env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(Self::new)
    }

    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model: MODEL.to_string(),
        }
    }

    /// Create a client with an explicit model identifier
    pub fn with_model(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    /// Perform one completion call; never retries.
    ///
    /// Non-2xx responses become [`GatewayError::Status`] with the HTTP
    /// status and reason phrase.
    pub async fn complete(&self, prompt: &str) -> Result<ChatCompletion, GatewayError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: TEMPERATURE,
            response_format: prompts::response_format(),
        };

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}
