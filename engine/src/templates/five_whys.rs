//! Five Whys Template
//!
//! Interrogates an answer by repeatedly asking one of a fixed set of probing
//! questions. The conversation ends when the model says "i do not know" or the
//! round ceiling is reached.

use async_trait::async_trait;
use rand::Rng;
use sdk::errors::EngineError;
use std::sync::Arc;

use super::Template;
use crate::conversation::{Conversation, FollowUp, StopOnPhrase};
use crate::llm::InferenceClient;

pub const DESCRIPTION: &str = "Keep asking why until the model admits it does not know";

/// Phrase that ends the interrogation
pub const STOP_PHRASE: &str = "i do not know";

/// Candidate follow-up questions, in a fixed order
pub const FOLLOW_UP_QUESTIONS: [&str; 4] = [
    "Why is that?",
    "What do you mean by that?",
    "Are there other approaches?",
    "Can you clarify?",
];

/// Chooses an index in `0..len`
///
/// Seam for the random source: production uses [`RandomPicker`], tests
/// inject a deterministic picker.
pub trait CandidatePicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Uniform random choice backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl CandidatePicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Follow-up generator that picks one question from a fixed candidate set
pub struct RandomFollowUp {
    candidates: Vec<String>,
    picker: Arc<dyn CandidatePicker>,
}

impl RandomFollowUp {
    pub fn new<I, S>(candidates: I, picker: Arc<dyn CandidatePicker>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
            picker,
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}

#[async_trait]
impl FollowUp for RandomFollowUp {
    async fn next_question(&self, _last_response: &str) -> Result<Option<String>, EngineError> {
        if self.candidates.is_empty() {
            return Ok(None);
        }

        let index = self.picker.pick(self.candidates.len());
        self.candidates
            .get(index)
            .cloned()
            .map(Some)
            .ok_or_else(|| {
                EngineError::Policy(format!(
                    "picker chose index {} of {} candidates",
                    index,
                    self.candidates.len()
                ))
            })
    }
}

/// The "five whys" interrogation template
pub struct FiveWhys {
    client: Arc<dyn InferenceClient>,
    max_responses: usize,
    picker: Arc<dyn CandidatePicker>,
}

impl FiveWhys {
    pub fn new(client: Arc<dyn InferenceClient>, max_responses: usize) -> Self {
        Self::with_picker(client, max_responses, Arc::new(RandomPicker))
    }

    pub fn with_picker(
        client: Arc<dyn InferenceClient>,
        max_responses: usize,
        picker: Arc<dyn CandidatePicker>,
    ) -> Self {
        Self {
            client,
            max_responses,
            picker,
        }
    }

    fn conversation(&self) -> Result<Conversation, EngineError> {
        Conversation::builder(Arc::clone(&self.client))
            .max_responses(self.max_responses)
            .stop_condition(StopOnPhrase::new(STOP_PHRASE))
            .follow_up(RandomFollowUp::new(
                FOLLOW_UP_QUESTIONS,
                Arc::clone(&self.picker),
            ))
            .build()
    }
}

#[async_trait]
impl Template for FiveWhys {
    fn name(&self) -> &str {
        "five_whys"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    async fn prompt(&self, question: &str) -> Result<String, EngineError> {
        self.conversation()?.start(question).await
    }
}
