//! Example demonstrating the conversation engine against a local Ollama
//!
//! Builds a conversation from plain closures: keep asking for one more detail
//! until the model says it has nothing to add, for at most four rounds.
//!
//! Prerequisites:
//! - Ollama must be installed and running (https://ollama.ai)
//! - A model must be pulled (e.g., `ollama pull mistral`)
//!
//! Run with: cargo run --example conversation_example

use std::sync::Arc;

use reprompt_engine::conversation::Conversation;
use reprompt_engine::llm::{ollama::OllamaProvider, InferenceClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Conversation Example ===\n");

    let provider = Arc::new(OllamaProvider::new("http://localhost:11434", "mistral")?);

    if !provider.check_health().await {
        eprintln!("✗ Ollama is not reachable at {}", provider.base_url());
        eprintln!("\nMake sure Ollama is running:");
        eprintln!("  1. Install Ollama from https://ollama.ai");
        eprintln!("  2. Pull a model: ollama pull mistral");
        return Ok(());
    }

    let mut conversation = Conversation::builder(provider)
        .max_responses(4)
        .stop_when(|_depth, response| response.to_lowercase().contains("nothing to add"))
        .follow_up_with(|_response| {
            Some("Add one more detail, or say 'nothing to add'.".to_string())
        })
        .build()?;

    let transcript = conversation
        .start("Describe how a hash map resolves collisions.")
        .await?;

    println!("Rounds: {}\n", conversation.depth());
    println!("{}", transcript);

    Ok(())
}
