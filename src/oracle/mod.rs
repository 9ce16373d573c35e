//! The text-completion oracle.
//!
//! All generative content is delegated through the [`CompletionOracle`]
//! trait; the rest of the crate never talks to a model API directly.
//! [`AnthropicOracle`] is the production implementation over the Messages
//! API, with retry on rate limits and server errors.

pub mod prompts;
pub mod sections;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MODEL: &str = "claude-3-7-sonnet-20250219";
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// One completion request: system role, user prompt, sampling parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System role text.
    pub system: String,
    /// User prompt text.
    pub prompt: String,
    /// Output token budget.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

/// An opaque text-completion service.
pub trait CompletionOracle {
    /// Produce the reply text for a request.
    fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

impl MessagesResponse {
    fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Blocking Messages API client.
pub struct AnthropicOracle {
    http: reqwest::blocking::Client,
    api_key: String,
}

impl AnthropicOracle {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::blocking::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: config.anthropic_api_key.clone(),
        }
    }

    fn send(&self, body: &MessagesRequest<'_>) -> Result<String> {
        let mut last_error: Option<Error> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s.
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                log::warn!(
                    "oracle attempt {attempt} failed, retrying after {}ms",
                    delay.as_millis()
                );
                std::thread::sleep(delay);
            }

            let response = match self
                .http
                .post(API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", API_VERSION)
                .header("content-type", "application/json")
                .json(body)
                .send()
            {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(Error::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let message = response.text().unwrap_or_default();
                log::warn!("oracle returned {status}: {message}");
                last_error = Some(Error::Api {
                    status: status.as_u16(),
                    message,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(Error::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let reply: MessagesResponse = response.json()?;
            return reply
                .text()
                .map(str::to_string)
                .ok_or(Error::EmptyCompletion);
        }

        Err(last_error.unwrap_or(Error::EmptyCompletion))
    }
}

impl CompletionOracle for AnthropicOracle {
    fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = MessagesRequest {
            model: MODEL,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            system: &request.system,
            messages: vec![Message {
                role: "user",
                content: &request.prompt,
            }],
        };
        self.send(&body)
    }
}
