//! LLM Client: the single point of entry for every text-generation call in the service.
//!
//! No other module talks to a model provider directly. Two wire formats are supported:
//! OpenAI-compatible chat completions (Ollama, OpenAI, Gemini) and the Anthropic Messages API.
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 4096;

/// Upper bound on `LLM_MAX_RETRIES`; backoff doubles per retry.
pub const MAX_RETRIES_CAP: u32 = 5;

#[cfg(not(test))]
const RETRY_BASE_DELAY_MS: u64 = 1000;
#[cfg(test)]
const RETRY_BASE_DELAY_MS: u64 = 10;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Model provider backing the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Ollama,
    OpenAi,
    Gemini,
    Anthropic,
}

impl Provider {
    pub fn default_base_url(self) -> &'static str {
        match self {
            Provider::Ollama => "http://localhost:11434/v1",
            Provider::OpenAi => "https://api.openai.com/v1",
            Provider::Gemini => "https://generativelanguage.googleapis.com/v1beta/openai",
            Provider::Anthropic => "https://api.anthropic.com",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Provider::Ollama => "gemma3:4b",
            Provider::OpenAi => "gpt-4o-mini",
            Provider::Gemini => "gemini-2.5-flash",
            Provider::Anthropic => "claude-sonnet-4-5",
        }
    }

    /// Local Ollama accepts any bearer token; hosted providers need a real key.
    pub fn requires_api_key(self) -> bool {
        !matches!(self, Provider::Ollama)
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(Provider::Ollama),
            "openai" => Ok(Provider::OpenAi),
            "gemini" => Ok(Provider::Gemini),
            "anthropic" => Ok(Provider::Anthropic),
            other => Err(format!(
                "unknown LLM provider '{other}' (expected ollama, openai, gemini or anthropic)"
            )),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::Ollama => "ollama",
            Provider::OpenAi => "openai",
            Provider::Gemini => "gemini",
            Provider::Anthropic => "anthropic",
        };
        f.write_str(name)
    }
}

/// Resolved client settings. Built by `Config::from_env`.
///
/// `max_retries` counts retries after the first attempt, so a call makes at
/// most `max_retries + 1` requests.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub provider: Provider,
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

impl LlmSettings {
    /// Fills provider defaults for anything left unset.
    pub fn resolve(
        provider: Provider,
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
        timeout_secs: u64,
        max_retries: u32,
    ) -> Result<Self, String> {
        let api_key = api_key.filter(|k| !k.trim().is_empty());
        if provider.requires_api_key() && api_key.is_none() {
            return Err(format!("LLM_API_KEY is required for provider '{provider}'"));
        }

        Ok(Self {
            provider,
            api_key,
            base_url: base_url
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| provider.default_base_url().to_string())
                .trim_end_matches('/')
                .to_string(),
            model: model
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| provider.default_model().to_string()),
            timeout_secs,
            max_retries: max_retries.min(MAX_RETRIES_CAP),
        })
    }
}

// ── OpenAI-compatible wire types ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

// ── Anthropic wire types ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
    usage: AnthropicUsage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnthropicUsage {
    input_tokens: u32,
    output_tokens: u32,
}

/// Both wire formats report failures as `{"error": {"message": ...}}`.
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single LLM client shared by all request handlers.
/// Retries on 429 and 5xx with exponential backoff; a delivered answer is never retried.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    settings: LlmSettings,
}

impl LlmClient {
    pub fn new(settings: LlmSettings) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self { client, settings })
    }

    pub fn provider(&self) -> Provider {
        self.settings.provider
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    /// Makes a raw call to the configured provider and returns the text of the reply.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let max_retries = self.settings.max_retries;
        let mut attempt = 0;

        loop {
            let error = match self.build_request(prompt, system).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.as_u16() == 429 || status.is_server_error() {
                        let body = response.text().await.unwrap_or_default();
                        warn!("LLM API returned {}: {}", status, body);
                        LlmError::Api {
                            status: status.as_u16(),
                            message: body,
                        }
                    } else if !status.is_success() {
                        let body = response.text().await.unwrap_or_default();
                        let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                            .map(|e| e.error.message)
                            .unwrap_or(body);
                        return Err(LlmError::Api {
                            status: status.as_u16(),
                            message,
                        });
                    } else {
                        return self.read_reply(response).await;
                    }
                }
                Err(e) => LlmError::Http(e),
            };

            if attempt >= max_retries {
                return Err(error);
            }
            attempt += 1;

            // Exponential backoff: base, 2x base, 4x base, ...
            let delay = Duration::from_millis(RETRY_BASE_DELAY_MS << (attempt - 1));
            warn!(
                "LLM call attempt {} failed ({}), retrying after {}ms...",
                attempt,
                error,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
        }
    }

    async fn read_reply(&self, response: reqwest::Response) -> Result<String, LlmError> {
        match self.settings.provider {
            Provider::Anthropic => {
                let reply: AnthropicResponse = response.json().await?;
                debug!(
                    "LLM call succeeded: input_tokens={}, output_tokens={}",
                    reply.usage.input_tokens, reply.usage.output_tokens
                );
                reply
                    .content
                    .into_iter()
                    .find(|b| b.block_type == "text")
                    .and_then(|b| b.text)
                    .ok_or(LlmError::EmptyContent)
            }
            Provider::Ollama | Provider::OpenAi | Provider::Gemini => {
                let reply: ChatCompletionResponse = response.json().await?;
                if let Some(usage) = &reply.usage {
                    debug!(
                        "LLM call succeeded: input_tokens={}, output_tokens={}",
                        usage.prompt_tokens, usage.completion_tokens
                    );
                }
                reply
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|c| c.message.content)
                    .filter(|text| !text.trim().is_empty())
                    .ok_or(LlmError::EmptyContent)
            }
        }
    }

    /// Calls the LLM and deserializes the text response as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let text = self.call(prompt, system).await?;
        serde_json::from_str(strip_json_fences(&text)).map_err(LlmError::Parse)
    }

    fn build_request(&self, prompt: &str, system: &str) -> RequestBuilder {
        let settings = &self.settings;
        match settings.provider {
            Provider::Anthropic => self
                .client
                .post(format!("{}/v1/messages", settings.base_url))
                .header("x-api-key", settings.api_key.as_deref().unwrap_or_default())
                .header("anthropic-version", ANTHROPIC_VERSION)
                .json(&AnthropicRequest {
                    model: &settings.model,
                    max_tokens: MAX_TOKENS,
                    system,
                    messages: vec![ChatMessage {
                        role: "user",
                        content: prompt,
                    }],
                }),
            Provider::Ollama | Provider::OpenAi | Provider::Gemini => self
                .client
                .post(format!("{}/chat/completions", settings.base_url))
                .bearer_auth(settings.api_key.as_deref().unwrap_or("ollama"))
                .json(&ChatCompletionRequest {
                    model: &settings.model,
                    messages: vec![
                        ChatMessage {
                            role: "system",
                            content: system,
                        },
                        ChatMessage {
                            role: "user",
                            content: prompt,
                        },
                    ],
                    temperature: 0.0,
                    response_format: ResponseFormat {
                        format_type: "json_object",
                    },
                }),
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
