//! Error types and handling
//!
//! This module provides the error types used throughout the Reprompt engine.
//! All errors implement the `RepromptErrorExt` trait which provides user-friendly
//! hints and indicates whether errors are recoverable.
//!
//! The conversation engine never swallows collaborator failures: inference
//! failures, policy failures and configuration problems all surface to the
//! caller as one of the variants below.

use thiserror::Error;

/// Trait for Reprompt error extensions
///
/// This trait provides additional context for errors, including user-friendly
/// hints and recoverability information. All engine errors implement this trait.
pub trait RepromptErrorExt {
    /// Returns a user-friendly hint for the error
    ///
    /// The hint is safe to display to end users and does not echo prompts,
    /// model output or internal details.
    fn user_hint(&self) -> &str;

    /// Returns whether the error is recoverable
    ///
    /// Recoverable errors can be retried by the caller (the engine itself
    /// never retries). Non-recoverable errors require a change in
    /// configuration or code.
    fn is_recoverable(&self) -> bool;
}

/// Main engine error type
///
/// # Error Categories
///
/// - **Configuration**: Invalid or missing configuration, rejected eagerly
/// - **Inference**: The inference client could not produce a response
/// - **Policy**: A stop condition or follow-up generator failed at runtime
///
/// # Examples
///
/// ```
/// use sdk::errors::{EngineError, RepromptErrorExt};
///
/// let error = EngineError::InferenceUnavailable("connection refused".to_string());
/// println!("Hint: {}", error.user_hint());
/// assert!(error.is_recoverable());
///
/// let fatal_error = EngineError::Config("max_responses must be positive".to_string());
/// assert!(!fatal_error.is_recoverable());
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Inference client errors
    #[error("Inference unavailable: {0}")]
    InferenceUnavailable(String),

    // Policy errors
    #[error("Policy error: {0}")]
    Policy(String),

    // Template errors
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    // Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RepromptErrorExt for EngineError {
    fn user_hint(&self) -> &str {
        match self {
            Self::Config(_) => "Check your config.toml file for errors",
            Self::InferenceUnavailable(_) => {
                "Inference backend unavailable. Check that the model server is running"
            }
            Self::Policy(_) => "A conversation policy failed. Check the template in use",
            Self::UnknownTemplate(_) => "Run 'reprompt templates' to list available templates",
            Self::Io(_) => "File system operation failed",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            Self::Config(_) | Self::UnknownTemplate(_) => false,

            // All other errors are potentially recoverable
            _ => true,
        }
    }
}
