//! Client for OpenAI-compatible `/chat/completions` endpoints (the Hugging
//! Face router by default).
//!
//! One POST per call, bounded by the configured timeout and never retried.
//! The response is decoded into a narrow schema so a body without
//! `choices[0].message.content` fails here instead of further down the
//! pipeline.

use crate::application::ports::generation::{ProviderError, TextGenerator};
use crate::domain::article::value_objects::truncate_chars;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};
use tracing::{debug, instrument};

pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/v1";
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.1-8B-Instruct:novita";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_MAX_TOKENS: u32 = 800;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

const ERROR_BODY_CHARS: usize = 200;

#[derive(Clone)]
pub struct ProviderSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

pub fn build_prompt(topic: &str) -> String {
    format!(
        "Write a blog article about \"{topic}\".\n\
         The article should be informative, well-structured, and approximately 300-500 words.\n\
         Include an engaging title and comprehensive content.\n\
         Format: First line should be the title, followed by the article content."
    )
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    fn into_text(self) -> Result<String, ProviderError> {
        let choice = self.choices.into_iter().next().ok_or_else(|| {
            ProviderError::MalformedResponse("response contained no choices".into())
        })?;

        match choice.message.content {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(ProviderError::MalformedResponse(
                "first choice has no message content".into(),
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatCompletionsClient {
    http: Client,
    settings: ProviderSettings,
}

impl ChatCompletionsClient {
    pub fn new(settings: ProviderSettings) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|err| ProviderError::Transport(err.to_string()))?;
        Ok(Self { http, settings })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    fn map_reqwest(&self, err: &reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout(self.settings.timeout)
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl TextGenerator for ChatCompletionsClient {
    #[instrument(skip(self), fields(model = %self.settings.model))]
    async fn generate(&self, topic: &str) -> Result<String, ProviderError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ProviderError::MissingCredential)?;

        let prompt = build_prompt(topic);
        let request = ChatRequest {
            model: &self.settings.model,
            messages: [ChatMessage {
                role: "user",
                content: &prompt,
            }],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        debug!("sending chat completion request");
        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| self.map_reqwest(&err))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| self.map_reqwest(&err))?;
        debug!(%status, bytes = body.len(), "chat completion response received");

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: truncate_chars(String::from_utf8_lossy(&body).into_owned(), ERROR_BODY_CHARS),
            });
        }

        serde_json::from_slice::<ChatResponse>(&body)
            .map_err(|err| ProviderError::MalformedResponse(err.to_string()))?
            .into_text()
    }
}
