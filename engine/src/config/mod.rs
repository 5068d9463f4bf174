//! Configuration management
//!
//! This module handles loading, validation, and management of the Reprompt configuration.
//! Configuration is stored in TOML format at ~/.reprompt/config.toml.
//!
//! # Configuration Sections
//!
//! - **core**: Log level
//! - **llm**: Inference backend settings
//! - **conversation**: Round ceiling and default template
//!
//! # Examples
//!
//! ```no_run
//! use reprompt_engine::config::Config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from default location
//! let config = Config::load_or_create()?;
//!
//! // Access configuration values
//! println!("Model: {}", config.llm.ollama.model);
//! println!("Max responses: {}", config.conversation.max_responses);
//! # Ok(())
//! # }
//! ```

use sdk::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::conversation::DEFAULT_MAX_RESPONSES;
use crate::llm::ollama::DEFAULT_TIMEOUT_SECS;
use crate::templates::TemplateKind;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Core settings
    #[serde(default)]
    pub core: CoreConfig,

    /// Inference backend configuration
    #[serde(default)]
    pub llm: LLMConfig,

    /// Conversation settings
    #[serde(default)]
    pub conversation: ConversationConfig,
}

/// Core configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Inference backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    /// Default backend (currently only "ollama")
    #[serde(default = "default_provider")]
    pub default_provider: String,

    /// Ollama settings
    #[serde(default)]
    pub ollama: OllamaConfig,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            ollama: OllamaConfig::default(),
        }
    }
}

/// Ollama configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Base URL for Ollama API
    #[serde(default = "default_ollama_base_url")]
    pub base_url: String,

    /// Model name
    #[serde(default = "default_ollama_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_ollama_base_url(),
            model: default_ollama_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Conversation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationConfig {
    /// Upper bound on rounds per conversation (must be positive)
    #[serde(default = "default_max_responses")]
    pub max_responses: usize,

    /// Template used when none is given on the command line
    #[serde(default = "default_template")]
    pub default_template: TemplateKind,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            max_responses: default_max_responses(),
            default_template: default_template(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_provider() -> String {
    "ollama".to_string()
}

fn default_ollama_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "mistral".to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_responses() -> usize {
    DEFAULT_MAX_RESPONSES
}

fn default_template() -> TemplateKind {
    TemplateKind::FiveWhys
}

impl Config {
    /// Load configuration from the default location (~/.reprompt/config.toml)
    ///
    /// If the configuration file doesn't exist, creates a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file cannot be read or written
    /// - TOML parsing fails
    /// - Validation fails
    pub fn load_or_create() -> Result<Self, EngineError> {
        let config_path = Self::default_config_path()?;

        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            Self::create_default(&config_path)
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    pub fn load_from_path(path: &Path) -> Result<Self, EngineError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| EngineError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, EngineError> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| EngineError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Serialize the configuration to pretty TOML
    pub fn to_toml(&self) -> Result<String, EngineError> {
        toml::to_string_pretty(self)
            .map_err(|e| EngineError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Create default configuration and save to path
    fn create_default(path: &Path) -> Result<Self, EngineError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                EngineError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let config = Self::default();
        config.validate()?;

        fs::write(path, config.to_toml()?)
            .map_err(|e| EngineError::Config(format!("Failed to write config file: {}", e)))?;

        tracing::info!("Created default configuration at {:?}", path);

        Ok(config)
    }

    /// Get the default configuration file path (~/.reprompt/config.toml)
    pub fn default_config_path() -> Result<PathBuf, EngineError> {
        let home = dirs::home_dir()
            .ok_or_else(|| EngineError::Config("Could not determine home directory".to_string()))?;

        Ok(home.join(".reprompt").join("config.toml"))
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` if:
    /// - The log level is unknown
    /// - The default provider is unknown
    /// - `max_responses` is zero
    /// - The Ollama base URL or model is empty
    /// - The Ollama request timeout is zero
    pub fn validate(&self) -> Result<(), EngineError> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.core.log_level.as_str()) {
            return Err(EngineError::Config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.core.log_level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_providers = ["ollama"];
        if !valid_providers.contains(&self.llm.default_provider.as_str()) {
            return Err(EngineError::Config(format!(
                "Invalid default provider '{}'. Must be one of: {}",
                self.llm.default_provider,
                valid_providers.join(", ")
            )));
        }

        if self.llm.ollama.base_url.trim().is_empty() {
            return Err(EngineError::Config(
                "llm.ollama.base_url must not be empty".to_string(),
            ));
        }

        if self.llm.ollama.model.trim().is_empty() {
            return Err(EngineError::Config(
                "llm.ollama.model must not be empty".to_string(),
            ));
        }

        if self.llm.ollama.timeout_secs == 0 {
            return Err(EngineError::Config(
                "llm.ollama.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.conversation.max_responses == 0 {
            return Err(EngineError::Config(
                "conversation.max_responses must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
