//! Reprompt Engine Library
//!
//! This library provides the conversation engine and its collaborators.
//! It is used by both the main binary and integration tests.

/// Configuration management module
pub mod config;

/// Conversation orchestration module
pub mod conversation;

/// Inference client abstraction layer
pub mod llm;

/// Built-in conversation templates
pub mod templates;

/// Telemetry and Observability
pub mod telemetry;

/// CLI interface module
pub mod cli;

/// Command handlers module
pub mod handlers;
