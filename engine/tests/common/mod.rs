//! Shared test doubles for the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use reprompt_engine::llm::{InferenceClient, LLMError, Result as LLMResult};

/// Replays scripted responses in order (cycling when exhausted) and records
/// every prompt it receives.
pub struct ScriptedClient {
    responses: Vec<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new(responses: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            responses: responses.iter().map(|s| s.to_string()).collect(),
            prompts: Mutex::new(Vec::new()),
        })
    }

    /// A client that answers "answer 1", "answer 2", ... forever
    pub fn numbered(count: usize) -> Arc<Self> {
        let responses: Vec<String> = (1..=count).map(|i| format!("answer {}", i)).collect();
        Arc::new(Self {
            responses,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, prompt: &str) -> LLMResult<String> {
        let mut prompts = self.prompts.lock().unwrap();
        let index = prompts.len();
        prompts.push(prompt.to_string());

        if self.responses.is_empty() {
            return Err(LLMError::ProviderUnavailable("empty script".to_string()));
        }
        Ok(self.responses[index % self.responses.len()].clone())
    }
}

/// Always fails as if the backend were down
pub struct UnavailableClient;

#[async_trait]
impl InferenceClient for UnavailableClient {
    fn name(&self) -> &str {
        "unavailable"
    }

    async fn generate(&self, _prompt: &str) -> LLMResult<String> {
        Err(LLMError::ProviderUnavailable("connection refused".to_string()))
    }
}

/// Answers with a pure function of the prompt's last line, so identical
/// prompts always get identical responses
pub struct EchoClient;

#[async_trait]
impl InferenceClient for EchoClient {
    fn name(&self) -> &str {
        "echo"
    }

    async fn generate(&self, prompt: &str) -> LLMResult<String> {
        let last_line = prompt.lines().last().unwrap_or_default();
        Ok(format!("re: {}", last_line))
    }
}
