//! Technical Outline Template
//!
//! Lets the model steer: after every answer the template asks the same model
//! what a good follow-up question would be and uses its reply as the next
//! question. The conversation ends when the model says "we are done".

use async_trait::async_trait;
use sdk::errors::EngineError;
use std::sync::Arc;

use super::Template;
use crate::conversation::{Conversation, FollowUp, StopOnPhrase};
use crate::llm::InferenceClient;

pub const DESCRIPTION: &str = "Let the model pick each follow-up until it declares the outline done";

/// Phrase that ends the outline
pub const STOP_PHRASE: &str = "we are done";

/// Prompt asking the model for the next question about `response`
pub fn follow_up_prompt(response: &str) -> String {
    format!(
        "What is a good follow up question for {}? No compliments, no commentary, just a short follow up question. Or are we done?",
        response
    )
}

/// Follow-up generator that asks the model itself what to ask next
pub struct ModelFollowUp {
    client: Arc<dyn InferenceClient>,
}

impl ModelFollowUp {
    pub fn new(client: Arc<dyn InferenceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FollowUp for ModelFollowUp {
    async fn next_question(&self, last_response: &str) -> Result<Option<String>, EngineError> {
        let question = self.client.generate(&follow_up_prompt(last_response)).await?;
        let question = question.trim();

        tracing::debug!("Model suggested follow-up: {}", question);

        if question.is_empty() {
            Ok(None)
        } else {
            Ok(Some(question.to_string()))
        }
    }
}

/// The self-directed "technical outline" template
pub struct TechnicalOutline {
    client: Arc<dyn InferenceClient>,
    max_responses: usize,
}

impl TechnicalOutline {
    pub fn new(client: Arc<dyn InferenceClient>, max_responses: usize) -> Self {
        Self {
            client,
            max_responses,
        }
    }

    fn conversation(&self) -> Result<Conversation, EngineError> {
        Conversation::builder(Arc::clone(&self.client))
            .max_responses(self.max_responses)
            .stop_condition(StopOnPhrase::new(STOP_PHRASE))
            .follow_up(ModelFollowUp::new(Arc::clone(&self.client)))
            .build()
    }
}

#[async_trait]
impl Template for TechnicalOutline {
    fn name(&self) -> &str {
        "technical_outline"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    async fn prompt(&self, question: &str) -> Result<String, EngineError> {
        self.conversation()?.start(question).await
    }
}
