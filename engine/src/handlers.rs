//! Command handlers for CLI operations
//!
//! This module implements the handlers for all CLI commands:
//! - ask: Run a template conversation and print the transcript
//! - templates: List available templates
//! - doctor: Validate configuration and check the inference backend
//! - config: Show the effective configuration or its path

use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;

use sdk::errors::EngineError;

use crate::config::Config;
use crate::llm::ollama::OllamaProvider;
use crate::llm::InferenceClient;
use crate::templates::TemplateKind;

/// Output format for command results
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for machine consumption
    Json,
}

/// Run one conversation with a template and return its transcript
///
/// This is the library entry point behind `reprompt ask`; it takes the client
/// explicitly so callers can supply any backend.
pub async fn ask(
    client: Arc<dyn InferenceClient>,
    template: TemplateKind,
    question: &str,
    max_responses: usize,
) -> Result<String, EngineError> {
    tracing::info!(
        "Running template '{}' via {} (max_responses={})",
        template,
        client.name(),
        max_responses
    );

    template.build(client, max_responses).prompt(question).await
}

/// Run a conversation and print the transcript
pub async fn handle_ask(
    question: String,
    template: Option<TemplateKind>,
    max_responses: Option<usize>,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let template = template.unwrap_or(config.conversation.default_template);
    let max_responses = max_responses.unwrap_or(config.conversation.max_responses);

    let provider = OllamaProvider::from_config(&config.llm.ollama)
        .map_err(EngineError::from)
        .context("Failed to create Ollama client")?;
    let client: Arc<dyn InferenceClient> = Arc::new(provider);

    let transcript = ask(client, template, &question, max_responses).await?;

    match format {
        OutputFormat::Text => {
            println!("{}", transcript);
        }
        OutputFormat::Json => {
            let output = json!({
                "template": template.as_str(),
                "question": question,
                "transcript": transcript,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// List available templates
pub fn handle_templates(config: &Config, format: OutputFormat) -> Result<()> {
    let default = config.conversation.default_template;

    match format {
        OutputFormat::Text => {
            println!("Available templates:");
            println!();
            for kind in TemplateKind::ALL {
                let marker = if kind == default { " (default)" } else { "" };
                println!("  {:<20} {}{}", kind.as_str(), kind.description(), marker);
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "default": default.as_str(),
                "templates": TemplateKind::ALL.iter().map(|kind| {
                    json!({
                        "name": kind.as_str(),
                        "description": kind.description(),
                    })
                }).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Validate configuration and check the inference backend
pub async fn handle_doctor(config: &Config, config_path: &Path, format: OutputFormat) -> Result<()> {
    let mut issues = Vec::new();
    let mut checks: Vec<(&str, String)> = Vec::new();

    // Config is already validated when loaded
    checks.push(("Configuration", format!("Valid ({})", config_path.display())));
    checks.push(("Model", config.llm.ollama.model.clone()));
    checks.push((
        "Max responses",
        config.conversation.max_responses.to_string(),
    ));

    match OllamaProvider::from_config(&config.llm.ollama) {
        Ok(provider) => {
            if provider.check_health().await {
                checks.push(("Ollama", "Available".to_string()));
            } else {
                checks.push(("Ollama", "Not available".to_string()));
                issues.push(format!(
                    "Ollama is not reachable at {}. Start Ollama to run conversations.",
                    provider.base_url()
                ));
            }
        }
        Err(e) => {
            checks.push(("Ollama", "Client error".to_string()));
            issues.push(format!("Cannot create Ollama client: {}", e));
        }
    }

    match format {
        OutputFormat::Text => {
            println!("Reprompt Diagnostics");
            println!("====================");
            println!();

            println!("System Checks:");
            for (check, status) in &checks {
                println!("  {:<20} {}", format!("{}:", check), status);
            }

            println!();

            if issues.is_empty() {
                println!("✓ All checks passed!");
            } else {
                println!("⚠ Issues found:");
                println!();
                for (i, issue) in issues.iter().enumerate() {
                    println!("  {}. {}", i + 1, issue);
                }
            }
        }
        OutputFormat::Json => {
            let output = json!({
                "checks": checks.iter().map(|(name, status)| {
                    json!({
                        "name": name,
                        "status": status
                    })
                }).collect::<Vec<_>>(),
                "issues": issues,
                "healthy": issues.is_empty()
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Print the effective configuration
pub fn handle_config_show(config: &Config, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", config.to_toml()?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
    }

    Ok(())
}

/// Print the configuration file path
pub fn handle_config_path(config_path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", config_path.display());
        }
        OutputFormat::Json => {
            let output = json!({ "path": config_path });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
