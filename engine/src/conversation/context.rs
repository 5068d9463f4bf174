//! Conversation Context
//!
//! The ordered record of a single conversation run. Turns are appended in
//! round order and never reordered or pruned; the rendered form is both the
//! returned transcript and the prefix fed back to the model on every round.

use sdk::types::Turn;

/// Separator between turns in a rendered transcript
pub const TURN_SEPARATOR: &str = "\n";

/// Ordered sequence of turns for one conversation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationContext {
    turns: Vec<Turn>,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn at the end of the context
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Remove every turn
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render all turn contents joined by newlines, in insertion order
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(Turn::content)
            .collect::<Vec<_>>()
            .join(TURN_SEPARATOR)
    }

    /// Compose the prompt for the next round: the transcript so far, a newline,
    /// then the question. The first round sends the bare question.
    ///
    /// Unlike plain concatenation, the separator keeps the last answer and the
    /// next question on separate lines.
    pub fn prompt_for(&self, question: &str) -> String {
        if self.turns.is_empty() {
            question.to_string()
        } else {
            format!("{}{}{}", self.render(), TURN_SEPARATOR, question)
        }
    }
}
