//! Reprompt SDK
//!
//! Shared types and errors used by the conversation engine and by callers
//! that supply their own inference clients or policies.

/// Error types and handling
pub mod errors;

/// Conversation data types
pub mod types;

// Re-export commonly used types
pub use errors::{EngineError, RepromptErrorExt};
pub use types::{Role, Turn};
