//! Conversation Engine
//!
//! This module implements the loop that drives a multi-turn exchange with a
//! model. Each run proceeds through rounds:
//!
//! 1. Decide whether to continue (depth ceiling, then the stop condition)
//! 2. Send the accumulated transcript followed by the current question
//! 3. Append the response to the context and bump the depth
//! 4. Derive the next question from the response (or stop), then go back to 1
//!
//! Every run is wrapped in a `conversation` span carrying a fresh `run_id`.
//!
//! # Limits
//!
//! - `max_responses` (default 5) is an absolute ceiling on rounds, applied
//!   before any custom stop condition is consulted
//! - Exactly one inference call is outstanding at any time; `start` takes
//!   `&mut self` so one instance never runs two conversations at once

use std::sync::Arc;
use tracing::{debug, error, info, info_span, Instrument};
use uuid::Uuid;

use sdk::errors::EngineError;
use sdk::types::Turn;

use super::context::ConversationContext;
use super::policy::{FnFollowUp, FnStop, FollowUp, StopCondition};
use crate::llm::InferenceClient;

/// Default upper bound on rounds per conversation
pub const DEFAULT_MAX_RESPONSES: usize = 5;

/// Lifecycle state of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    /// Not started, or about to start a fresh run
    Idle,

    /// An inference call is in flight
    AwaitingResponse,

    /// Deciding whether to continue and deriving the next question
    EvaluatingContinuation,

    /// The run finished, successfully or with a propagated failure
    Terminated,
}

/// Builder that fixes a conversation's client, ceiling and policy
pub struct ConversationBuilder {
    client: Arc<dyn InferenceClient>,
    max_responses: usize,
    stop_condition: Option<Arc<dyn StopCondition>>,
    follow_up: Option<Arc<dyn FollowUp>>,
}

impl ConversationBuilder {
    /// Start building a conversation bound to `client`
    pub fn new(client: Arc<dyn InferenceClient>) -> Self {
        Self {
            client,
            max_responses: DEFAULT_MAX_RESPONSES,
            stop_condition: None,
            follow_up: None,
        }
    }

    /// Set the round ceiling. Zero is rejected by [`build`](Self::build).
    pub fn max_responses(mut self, max_responses: usize) -> Self {
        self.max_responses = max_responses;
        self
    }

    /// Register a stop condition
    pub fn stop_condition<S>(mut self, stop_condition: S) -> Self
    where
        S: StopCondition + 'static,
    {
        self.stop_condition = Some(Arc::new(stop_condition));
        self
    }

    /// Register a stop condition from a closure `(depth, last_response) -> stop?`
    pub fn stop_when<F>(self, predicate: F) -> Self
    where
        F: Fn(usize, &str) -> bool + Send + Sync + 'static,
    {
        self.stop_condition(FnStop(predicate))
    }

    /// Register a follow-up generator
    pub fn follow_up<U>(mut self, follow_up: U) -> Self
    where
        U: FollowUp + 'static,
    {
        self.follow_up = Some(Arc::new(follow_up));
        self
    }

    /// Register a follow-up generator from a closure `last_response -> next question`
    pub fn follow_up_with<F>(self, generator: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.follow_up(FnFollowUp(generator))
    }

    /// Validate the configuration and build the conversation
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` if `max_responses` is zero.
    pub fn build(self) -> Result<Conversation, EngineError> {
        if self.max_responses == 0 {
            return Err(EngineError::Config(
                "max_responses must be greater than zero".to_string(),
            ));
        }

        Ok(Conversation {
            client: self.client,
            max_responses: self.max_responses,
            stop_condition: self.stop_condition,
            follow_up: self.follow_up,
            context: ConversationContext::new(),
            depth: 0,
            state: ConversationState::Idle,
        })
    }
}

/// A reusable multi-turn conversation with a model
pub struct Conversation {
    /// Shared inference client
    client: Arc<dyn InferenceClient>,

    /// Absolute ceiling on rounds per run
    max_responses: usize,

    /// Optional stop condition, consulted before every round
    stop_condition: Option<Arc<dyn StopCondition>>,

    /// Optional follow-up generator; absent means a single round
    follow_up: Option<Arc<dyn FollowUp>>,

    /// Responses accumulated during the current run
    context: ConversationContext,

    /// Completed rounds in the current run
    depth: usize,

    state: ConversationState,
}

impl Conversation {
    /// Start building a conversation bound to `client`
    pub fn builder(client: Arc<dyn InferenceClient>) -> ConversationBuilder {
        ConversationBuilder::new(client)
    }

    pub fn max_responses(&self) -> usize {
        self.max_responses
    }

    /// Completed rounds in the current (or last) run
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Context of the current (or last) run, including a failed run's partial state
    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    /// Rendered transcript of the current (or last) run
    pub fn transcript(&self) -> String {
        self.context.render()
    }

    /// Run a conversation to completion and return the rendered transcript
    ///
    /// Context and depth are reset first, so every call produces a fresh,
    /// independent transcript. On failure the partial context is kept for
    /// inspection and the error is returned unchanged.
    ///
    /// # Errors
    ///
    /// - `EngineError::InferenceUnavailable` if the client fails
    /// - Any error raised by the stop condition or follow-up generator
    pub async fn start(&mut self, initial_question: &str) -> Result<String, EngineError> {
        let run_id = Uuid::new_v4();

        let span = info_span!("conversation", %run_id);

        info!(parent: &span, "Starting conversation: {}", initial_question);

        let result = self.run(initial_question).instrument(span.clone()).await;
        let _entered = span.enter();
        self.state = ConversationState::Terminated;

        match result {
            Ok(()) => {
                info!("Conversation finished after {} rounds", self.depth);
                Ok(self.transcript())
            }
            Err(e) => {
                error!("Conversation failed after {} rounds: {}", self.depth, e);
                Err(e)
            }
        }
    }

    async fn run(&mut self, initial_question: &str) -> Result<(), EngineError> {
        self.state = ConversationState::Idle;
        self.depth = 0;
        self.context.clear();

        let mut current_question = initial_question.to_string();
        let mut last_response = String::new();

        while self.should_continue(&last_response)? {
            self.state = ConversationState::AwaitingResponse;
            let prompt = self.context.prompt_for(&current_question);
            debug!(
                "Round {}: sending prompt ({} chars)",
                self.depth + 1,
                prompt.len()
            );

            let response = self.client.generate(&prompt).await?;

            info!("Q: {}", current_question);
            info!("A: {}", response);

            self.context.push(Turn::system(response.as_str()));
            self.depth += 1;
            self.state = ConversationState::EvaluatingContinuation;

            let Some(follow_up) = self.follow_up.as_ref().map(Arc::clone) else {
                debug!("No follow-up generator; single round");
                break;
            };

            // Derived after every round, including the last one the ceiling allows
            match follow_up.next_question(&response).await? {
                Some(question) => current_question = question,
                None => {
                    debug!("Follow-up generator has no further question");
                    break;
                }
            }

            last_response = response;
        }

        Ok(())
    }

    /// Depth ceiling first, then the custom stop condition.
    fn should_continue(&self, last_response: &str) -> Result<bool, EngineError> {
        if self.depth >= self.max_responses {
            debug!("Reached max_responses ({})", self.max_responses);
            return Ok(false);
        }

        match &self.stop_condition {
            Some(stop) => Ok(!stop.should_stop(self.depth, last_response)?),
            None => Ok(true),
        }
    }
}
