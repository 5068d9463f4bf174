//! Conversation Templates
//!
//! A template pairs the shared inference client with a ready-made policy and
//! runs one conversation per prompt. Templates are the outer surface used by
//! the CLI; the engine itself knows nothing about them.

use async_trait::async_trait;
use clap::ValueEnum;
use sdk::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::llm::InferenceClient;

pub mod five_whys;
pub mod technical_outline;

pub use five_whys::{CandidatePicker, FiveWhys, RandomFollowUp, RandomPicker};
pub use technical_outline::{ModelFollowUp, TechnicalOutline};

/// A named conversation strategy
#[async_trait]
pub trait Template: Send + Sync {
    /// Short identifier (e.g., "five_whys")
    fn name(&self) -> &str;

    /// One-line description for listings
    fn description(&self) -> &str;

    /// Run a fresh conversation seeded with `question` and return its transcript
    async fn prompt(&self, question: &str) -> Result<String, EngineError>;
}

/// Built-in templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Keep asking why until the model admits it does not know
    FiveWhys,

    /// Let the model pick each follow-up until it declares the outline done
    TechnicalOutline,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [TemplateKind::FiveWhys, TemplateKind::TechnicalOutline];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::FiveWhys => "five_whys",
            TemplateKind::TechnicalOutline => "technical_outline",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateKind::FiveWhys => five_whys::DESCRIPTION,
            TemplateKind::TechnicalOutline => technical_outline::DESCRIPTION,
        }
    }

    /// Instantiate the template around a shared client
    pub fn build(
        &self,
        client: Arc<dyn InferenceClient>,
        max_responses: usize,
    ) -> Box<dyn Template> {
        match self {
            TemplateKind::FiveWhys => Box::new(FiveWhys::new(client, max_responses)),
            TemplateKind::TechnicalOutline => {
                Box::new(TechnicalOutline::new(client, max_responses))
            }
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EngineError::UnknownTemplate(s.to_string()))
    }
}
