//! Conversation Orchestration
//!
//! This module implements the conversation engine: a bounded loop that asks a
//! model a question, accumulates its responses, and lets a pluggable policy
//! decide whether to continue and what to ask next.

pub mod context;
pub mod core;
pub mod policy;

pub use context::ConversationContext;
pub use self::core::{Conversation, ConversationBuilder, ConversationState, DEFAULT_MAX_RESPONSES};
pub use policy::{FnFollowUp, FnStop, FollowUp, StopCondition, StopOnPhrase};
