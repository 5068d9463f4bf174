//! Conversation Policies
//!
//! A policy decides when a conversation stops and what to ask next. Both
//! halves are optional and fixed when the conversation is built:
//!
//! - [`StopCondition`] is consulted before every round with the current depth
//!   and the latest response (empty before the first round).
//! - [`FollowUp`] derives the next question from the latest response, or
//!   returns `None` to end the conversation. It is async because a follow-up
//!   strategy may consult the model itself.
//!
//! Plain closures are accepted through [`FnStop`] and [`FnFollowUp`]; the
//! builder wraps them automatically.

use async_trait::async_trait;
use sdk::errors::EngineError;

/// Decides whether a conversation should stop before the next round
pub trait StopCondition: Send + Sync {
    /// Returns `Ok(true)` to end the conversation.
    fn should_stop(&self, depth: usize, last_response: &str) -> Result<bool, EngineError>;
}

/// Derives the next question from the latest response
#[async_trait]
pub trait FollowUp: Send + Sync {
    /// Returns `Ok(None)` when there is nothing left to ask.
    async fn next_question(&self, last_response: &str) -> Result<Option<String>, EngineError>;
}

/// Stop condition backed by an infallible closure
pub struct FnStop<F>(pub F);

impl<F> StopCondition for FnStop<F>
where
    F: Fn(usize, &str) -> bool + Send + Sync,
{
    fn should_stop(&self, depth: usize, last_response: &str) -> Result<bool, EngineError> {
        Ok((self.0)(depth, last_response))
    }
}

/// Follow-up generator backed by an infallible, synchronous closure
pub struct FnFollowUp<F>(pub F);

#[async_trait]
impl<F> FollowUp for FnFollowUp<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    async fn next_question(&self, last_response: &str) -> Result<Option<String>, EngineError> {
        Ok((self.0)(last_response))
    }
}

/// Stop as soon as the latest response contains `marker`
#[derive(Debug, Clone)]
pub struct StopOnPhrase {
    marker: String,
}

impl StopOnPhrase {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl StopCondition for StopOnPhrase {
    fn should_stop(&self, _depth: usize, last_response: &str) -> Result<bool, EngineError> {
        Ok(last_response.contains(&self.marker))
    }
}
