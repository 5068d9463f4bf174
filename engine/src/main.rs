// Reprompt
// Main entry point for the reprompt binary

use clap::Parser;
use reprompt_engine::cli::{Cli, Command, ConfigAction};
use reprompt_engine::config::Config;
use reprompt_engine::handlers::{
    handle_ask, handle_config_path, handle_config_show, handle_doctor, handle_templates,
    OutputFormat,
};
use reprompt_engine::telemetry::init_telemetry_with_level;
use sdk::errors::{EngineError, RepromptErrorExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Determine output format
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    // Load configuration (or use custom path if provided)
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_config_path()?,
    };
    let config = if cli.config.is_some() {
        Config::load_from_path(&config_path)?
    } else {
        Config::load_or_create()?
    };

    // --log overrides the configured level; RUST_LOG overrides both
    let log_level = cli.log.as_deref().unwrap_or(config.core.log_level.as_str());
    init_telemetry_with_level(log_level);

    let version = env!("CARGO_PKG_VERSION");
    let commit = env!("GIT_COMMIT_HASH");
    let timestamp = env!("BUILD_TIMESTAMP");

    tracing::debug!("Reprompt v{} ({} - {})", version, commit, timestamp);

    let result = match cli.command {
        Command::Ask {
            question,
            template,
            max_responses,
        } => handle_ask(question, template, max_responses, &config, format).await,

        Command::Templates => handle_templates(&config, format),

        Command::Doctor => handle_doctor(&config, &config_path, format).await,

        Command::Config { action } => match action {
            ConfigAction::Show => handle_config_show(&config, format),
            ConfigAction::Path => handle_config_path(&config_path, format),
        },
    };

    if let Err(e) = &result {
        if let Some(engine_error) = e.downcast_ref::<EngineError>() {
            eprintln!("Hint: {}", engine_error.user_hint());
        }
    }

    result
}
