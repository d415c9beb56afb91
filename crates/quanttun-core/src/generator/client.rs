//! HTTP client for the text-generation endpoint.
//!
//! One POST per generation attempt, chat-completions-style body, response
//! consumed as opaque text. No retries; the user re-triggers manually.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Default generation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://text.pollinations.ai/";

/// Generation endpoint settings.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: "openai".to_string(),
            temperature: 0.7,
            max_tokens: 2000,
            timeout_secs: 60,
        }
    }
}

/// Errors from talking to the generation endpoint.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to the generation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation service returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Seam for the generation endpoint, so flows can be tested without HTTP.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Submit a system message plus user prompt, returning the raw response
    /// body as text.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ClientError>;
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct RequestBody<'a> {
    messages: Vec<Message<'a>>,
    model: &'a str,
    temperature: f32,
    max_tokens: u32,
}

/// Reqwest-backed [`TextCompletion`] implementation.
pub struct GeneratorClient {
    http: reqwest::Client,
    config: GeneratorConfig,
}

impl GeneratorClient {
    pub fn new(config: GeneratorConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }
}

#[async_trait]
impl TextCompletion for GeneratorClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ClientError> {
        let body = RequestBody {
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: prompt,
                },
            ],
            model: &self.config.model,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        tracing::debug!(endpoint = %self.config.endpoint, "submitting generation request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        Ok(response.text().await?)
    }
}
