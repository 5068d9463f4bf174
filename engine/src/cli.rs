//! CLI interface for Reprompt
//!
//! This module provides the command-line interface using clap's derive API.
//! It defines all commands and global flags.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::templates::TemplateKind;

/// Reprompt
///
/// Drives multi-turn conversations with a local model: asks a question, then
/// keeps asking follow-ups chosen by a template until it decides to stop.
#[derive(Parser, Debug)]
#[command(name = "reprompt")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log: Option<String>,

    /// Specify alternate configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a conversation seeded with a question and print the transcript
    Ask {
        /// The initial question
        question: String,

        /// Template to use (defaults to conversation.default_template)
        #[arg(short, long, value_enum)]
        template: Option<TemplateKind>,

        /// Upper bound on rounds (defaults to conversation.max_responses)
        #[arg(short = 'n', long, value_name = "N")]
        max_responses: Option<usize>,
    },

    /// List available templates
    Templates,

    /// Check configuration and inference backend health
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print the configuration file path
    Path,
}
