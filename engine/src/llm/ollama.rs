//! Ollama Inference Client
//!
//! This module implements the InferenceClient trait for Ollama, a local model server.
//! Ollama runs models locally on the user's machine, typically at http://localhost:11434.
//!
//! Each call is a single-turn, non-streaming chat request: the whole prompt
//! (accumulated transcript plus the current question) travels as one user
//! message, and the generated text is read from `message.content`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{InferenceClient, LLMError, Message, Result};
use crate::config::OllamaConfig;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Ollama client configuration
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    /// Base URL for Ollama API (typically http://localhost:11434)
    base_url: String,

    /// Model name to use (e.g., "mistral")
    model: String,

    /// HTTP client for API requests
    client: Client,
}

impl OllamaProvider {
    /// Create a new Ollama client with the default request timeout
    ///
    /// # Arguments
    /// * `base_url` - Base URL for Ollama API (e.g., "http://localhost:11434")
    /// * `model` - Model name to use (e.g., "mistral")
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new Ollama client with an explicit request timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LLMError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
        })
    }

    /// Create a client from the `[llm.ollama]` configuration section
    pub fn from_config(config: &OllamaConfig) -> Result<Self> {
        Self::with_timeout(
            config.base_url.clone(),
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the single-turn chat request for a prompt
    fn build_request(&self, prompt: &str) -> OllamaRequest {
        OllamaRequest {
            model: self.model.clone(),
            messages: vec![Message::user(prompt)],
            stream: false,
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> LLMError {
        if e.is_timeout() {
            LLMError::Timeout
        } else if e.is_connect() {
            LLMError::ProviderUnavailable(format!(
                "Cannot connect to Ollama at {}. Is Ollama running?",
                self.base_url
            ))
        } else {
            LLMError::NetworkError(e.to_string())
        }
    }
}

#[async_trait]
impl InferenceClient for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        tracing::debug!(
            "Ollama request: model={}, prompt_chars={}",
            self.model,
            prompt.len()
        );

        let request = self.build_request(prompt);

        let url = format!("{}/api/chat", self.base_url);
        let start = std::time::Instant::now();
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        tracing::info!(
            "Ollama response received in {:.1}s",
            start.elapsed().as_secs_f64()
        );

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LLMError::ProviderUnavailable(format!(
                "Ollama API error ({}): {}",
                status, error_text
            )));
        }

        let ollama_response: OllamaResponse = response
            .json()
            .await
            .map_err(|e| LLMError::ParseError(format!("Failed to parse Ollama response: {}", e)))?;

        ollama_response
            .message
            .map(|m| m.content)
            .ok_or_else(|| LLMError::ParseError("Ollama response has no message".to_string()))
    }

    async fn check_health(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Ollama health check failed: {}", e);
                false
            }
        }
    }
}

/// Ollama API request format
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
}

/// Ollama message format
#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: String,
}

/// Ollama API response format
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: Option<OllamaMessage>,
}
