use async_trait::async_trait;
use log::{error, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::app_config::ProviderConfig;
use crate::errors::ProviderError;
use crate::providers::LanguageModel;

/// Model requested from the service. Fixed alongside the JSON response
/// format; neither is exposed as configuration.
pub const GROQ_MODEL: &str = "openai/gpt-oss-120b";

/// Groq client speaking the OpenAI-compatible chat-completions API
#[derive(Debug)]
pub struct Groq {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API base URL without a trailing slash
    endpoint: String,
    /// Sampling temperature
    temperature: f32,
    /// Maximum number of retry attempts after the first failure
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

/// Chat-completions request
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    /// The model to use
    model: String,

    /// The messages for the conversation
    messages: Vec<ChatMessage>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Constrained output format
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

/// Chat message format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// Output-format constraint accepted by the API
#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    /// The format type, e.g. "json_object"
    #[serde(rename = "type")]
    format_type: String,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct TokenUsage {
    /// Number of prompt tokens
    pub prompt_tokens: u64,
    /// Number of completion tokens
    pub completion_tokens: u64,
    /// Total tokens billed for the exchange
    #[serde(default)]
    pub total_tokens: u64,
}

/// Chat-completions response
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    /// Completion choices, first one is the answer
    pub choices: Vec<ChatChoice>,
    /// Token usage information
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

/// Individual completion choice
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    /// The completion message
    pub message: ChatMessage,
}

impl ChatRequest {
    /// Create a new chat request
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            temperature: None,
            response_format: None,
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Constrain the completion to a JSON object
    pub fn json_object(mut self) -> Self {
        self.response_format = Some(ResponseFormat {
            format_type: "json_object".to_string(),
        });
        self
    }
}

impl Groq {
    /// Create a new Groq client from provider configuration
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            temperature: config.temperature,
            max_retries: config.retry_count,
            backoff_base_ms: config.retry_backoff_ms,
        }
    }

    /// Complete a chat request with retry logic
    ///
    /// Network failures and retryable statuses (429 and 5xx) are retried with
    /// exponential backoff; other client errors fail immediately.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ProviderError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            if attempt > 0 {
                let backoff_ms = self.backoff_base_ms * (1u64 << (attempt - 1));
                warn!(
                    "Retrying model request in {}ms - attempt {}/{}",
                    backoff_ms,
                    attempt + 1,
                    self.max_retries + 1
                );
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }

            let response_result = self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(request)
                .send()
                .await;

            let response = match response_result {
                Ok(response) => response,
                Err(e) => {
                    error!(
                        "Model API network error: {} - attempt {}/{}",
                        e,
                        attempt + 1,
                        self.max_retries + 1
                    );
                    last_error = Some(ProviderError::RequestFailed(e.to_string()));
                    attempt += 1;
                    continue;
                }
            };

            let status = response.status();
            if status.is_success() {
                return response
                    .json::<ChatResponse>()
                    .await
                    .map_err(|e| ProviderError::ParseError(e.to_string()));
            }

            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());

            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(ProviderError::AuthenticationError(message));
            }

            if status.is_server_error() || status.as_u16() == 429 {
                error!(
                    "Model API error ({}): {} - attempt {}/{}",
                    status,
                    message,
                    attempt + 1,
                    self.max_retries + 1
                );
                last_error = Some(ProviderError::ApiError {
                    status_code: status.as_u16(),
                    message,
                });
                attempt += 1;
                continue;
            }

            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::RequestFailed(format!(
                "request failed after {} attempts",
                self.max_retries + 1
            ))
        }))
    }

    /// Extract the completion text from a response
    pub fn extract_text(response: &ChatResponse) -> Option<&str> {
        response.choices.first().map(|c| c.message.content.as_str())
    }
}

#[async_trait]
impl LanguageModel for Groq {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ProviderError> {
        let request = ChatRequest::new(GROQ_MODEL)
            .add_message("system", system_prompt)
            .add_message("user", user_prompt)
            .temperature(self.temperature)
            .json_object();

        let response = self.chat(&request).await?;

        Groq::extract_text(&response)
            .map(|text| text.to_string())
            .ok_or_else(|| {
                ProviderError::ParseError("completion contained no choices".to_string())
            })
    }
}
