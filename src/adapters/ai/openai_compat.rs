//! OpenAI-compatible provider - Implementation of AIProvider for any backend
//! speaking the OpenAI chat completions API.
//!
//! The default configuration targets a local Ollama server, which is what the
//! writing desk runs against, but any OpenAI-compatible endpoint works.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAICompatConfig::new(api_key)
//!     .with_model("qwen2.5:7b")
//!     .with_base_url("http://localhost:11434/v1");
//!
//! let provider = OpenAICompatProvider::new(config);
//! ```
//!
//! Requests are single attempts with no retry; a failed completion fails the
//! workflow step that issued it.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Configuration for the OpenAI-compatible provider.
#[derive(Debug, Clone)]
pub struct OpenAICompatConfig {
    /// API key for authentication. Local servers ignore the value but the
    /// header is always sent.
    api_key: Secret<String>,
    /// Model to use (e.g., "qwen2.5:7b").
    pub model: String,
    /// Base URL for the API (default: http://localhost:11434/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAICompatConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "qwen2.5:7b".to_string(),
            base_url: "http://localhost:11434/v1".to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Provider implementation for OpenAI-compatible chat completion APIs.
pub struct OpenAICompatProvider {
    config: OpenAICompatConfig,
    client: Client,
}

impl OpenAICompatProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: OpenAICompatConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Converts our request to the wire format.
    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        let mut messages = Vec::new();

        // Add system prompt if present
        if let Some(ref prompt) = request.system_prompt {
            messages.push(OpenAIMessage {
                role: "system".to_string(),
                content: prompt.clone(),
            });
        }

        // Add conversation messages
        for msg in &request.messages {
            messages.push(OpenAIMessage {
                role: match msg.role {
                    crate::ports::MessageRole::System => "system",
                    crate::ports::MessageRole::User => "user",
                    crate::ports::MessageRole::Assistant => "assistant",
                }
                .to_string(),
                content: msg.content.clone(),
            });
        }

        OpenAIRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    /// Sends a request and handles transport errors.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let openai_request = self.to_openai_request(request);

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        // Try to parse error body
        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(AIError::AuthenticationFailed),
            429 => {
                // Try to extract retry-after from error
                let retry_after = Self::parse_retry_after(&error_body);
                Err(AIError::rate_limited(retry_after))
            }
            400 => {
                // Check for context length error
                if error_body.contains("maximum context length")
                    || error_body.contains("context_length_exceeded")
                {
                    Err(AIError::context_too_long(0, 0))
                } else {
                    Err(AIError::InvalidRequest(error_body))
                }
            }
            500..=599 => Err(AIError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AIError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses retry-after from error response.
    fn parse_retry_after(error_body: &str) -> u32 {
        // Some servers include retry-after in the error message
        // Default to 30 seconds if we can't parse
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(msg) = parsed.get("error").and_then(|e| e.get("message")) {
                if let Some(s) = msg.as_str() {
                    // Try to find "try again in Xs" pattern
                    if let Some(idx) = s.find("try again in ") {
                        let rest = &s[idx + 13..];
                        if let Some(num_end) = rest.find(|c: char| !c.is_ascii_digit()) {
                            if let Ok(secs) = rest[..num_end].parse::<u32>() {
                                return secs;
                            }
                        }
                    }
                }
            }
        }
        30 // Default retry after
    }

    /// Parses a successful response body.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let response = self.handle_response_status(response).await?;

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AIError::parse("No choices in response"))?;

        let finish_reason = match choice.finish_reason.as_deref() {
            Some("stop") => FinishReason::Stop,
            Some("length") => FinishReason::Length,
            Some("content_filter") => FinishReason::ContentFilter,
            _ => FinishReason::Stop,
        };

        let usage = openai_response
            .usage
            .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
            .unwrap_or_default();

        Ok(CompletionResponse {
            content: choice.message.content,
            usage,
            model: openai_response.model,
            finish_reason,
        })
    }
}

#[async_trait]
impl AIProvider for OpenAICompatProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("openai-compat", &self.config.model)
    }
}

// ----- Wire Types -----

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    model: String,
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MessageRole;

    #[test]
    fn config_builder_works() {
        let config = OpenAICompatConfig::new("test-key")
            .with_model("llama3:8b")
            .with_base_url("http://custom:11434/v1")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.model, "llama3:8b");
        assert_eq!(config.base_url, "http://custom:11434/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn config_defaults_target_local_server() {
        let config = OpenAICompatConfig::new("ollama");
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.model, "qwen2.5:7b");
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[test]
    fn request_puts_system_prompt_first() {
        let provider = OpenAICompatProvider::new(OpenAICompatConfig::new("test"));
        let request = CompletionRequest::new()
            .with_system_prompt("You are a writer.")
            .with_message(MessageRole::User, "Write about agents");

        let wire = provider.to_openai_request(&request);
        assert_eq!(wire.messages.len(), 2);
        assert_eq!(wire.messages[0].role, "system");
        assert_eq!(wire.messages[0].content, "You are a writer.");
        assert_eq!(wire.messages[1].role, "user");
    }

    #[test]
    fn request_omits_unset_fields() {
        let provider = OpenAICompatProvider::new(OpenAICompatConfig::new("test"));
        let request = CompletionRequest::new().with_message(MessageRole::User, "Hi");

        let wire = provider.to_openai_request(&request);
        let json = serde_json::to_value(&wire).unwrap();
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn request_carries_temperature() {
        let provider = OpenAICompatProvider::new(OpenAICompatConfig::new("test"));
        let request = CompletionRequest::new()
            .with_message(MessageRole::User, "Hi")
            .with_temperature(0.0);

        let json = serde_json::to_value(provider.to_openai_request(&request)).unwrap();
        assert_eq!(json["temperature"], 0.0);
    }

    #[test]
    fn completions_url_appends_path() {
        let provider = OpenAICompatProvider::new(
            OpenAICompatConfig::new("test").with_base_url("http://localhost:11434/v1"),
        );
        assert_eq!(
            provider.completions_url(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn parse_retry_after_from_message() {
        let error = r#"{"error":{"message":"Rate limit exceeded. Please try again in 30 seconds."}}"#;
        let retry = OpenAICompatProvider::parse_retry_after(error);
        assert_eq!(retry, 30);
    }

    #[test]
    fn parse_retry_after_default() {
        let error = r#"{"error":{"message":"Something went wrong"}}"#;
        let retry = OpenAICompatProvider::parse_retry_after(error);
        assert_eq!(retry, 30); // Default
    }

    #[test]
    fn provider_info_reports_model() {
        let provider =
            OpenAICompatProvider::new(OpenAICompatConfig::new("test").with_model("qwen2.5:7b"));
        let info = provider.provider_info();
        assert_eq!(info.name, "openai-compat");
        assert_eq!(info.model, "qwen2.5:7b");
    }
}
