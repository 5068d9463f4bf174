//! Inference Client Abstraction Layer
//!
//! This module defines the capability the conversation engine consumes: turn a
//! prompt into generated text. The [`InferenceClient`] trait is the only seam
//! between the engine and a model-serving backend, so tests can swap in a
//! scripted client and production code can use [`ollama::OllamaProvider`].

use async_trait::async_trait;
use sdk::errors::EngineError;
use serde::{Deserialize, Serialize};

pub mod ollama;

/// Result type for LLM operations
pub type Result<T> = std::result::Result<T, LLMError>;

/// Errors that can occur during LLM operations
#[derive(Debug, thiserror::Error)]
pub enum LLMError {
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<LLMError> for EngineError {
    fn from(err: LLMError) -> Self {
        EngineError::InferenceUnavailable(err.to_string())
    }
}

/// Message in a chat request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Role of the message sender
    pub role: MessageRole,

    /// Content of the message
    pub content: String,
}

impl Message {
    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Role of a message sender
///
/// Every request is a single user turn; the transcript travels inside it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
}

/// Inference client trait that all backends must implement
///
/// Implementations are shared behind an `Arc` between the conversation engine
/// and any policy that consults the model itself, so they must be safe for
/// sequential reuse from several owners.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Returns the name of the backend (e.g., "ollama")
    fn name(&self) -> &str;

    /// Generate a response for a single prompt
    ///
    /// # Returns
    /// * `Ok(String)` - The generated message text
    /// * `Err(LLMError)` - If the backend could not produce a response
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Check if the backend is currently reachable
    /// Default implementation returns true.
    async fn check_health(&self) -> bool {
        true
    }
}
