//! Configuration module
//!
//! Handles loading and layering the harness configuration.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::Args;

/// Gateway chat-completion endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3210/v1/chat/completions";

/// Providers exercised by a default run, in report order
pub const DEFAULT_PROVIDERS: &[&str] = &["perplexity", "chatgpt", "gemini"];

/// Prompt sent to every provider
pub const DEFAULT_QUESTION: &str = "What are the top 3 advantages of TypeScript over JavaScript? Keep it brief, 2-3 sentences per point.";

/// Harness configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Chat-completion endpoint of the gateway
    pub endpoint: String,

    /// Provider identifiers, tested in this order
    pub providers: Vec<String>,

    /// Question shared by all providers
    pub question: String,

    /// Request timeout in seconds (transport default when unset)
    pub timeout_secs: Option<u64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            providers: DEFAULT_PROVIDERS.iter().map(|p| p.to_string()).collect(),
            question: DEFAULT_QUESTION.to_string(),
            timeout_secs: None,
        }
    }
}

impl HarnessConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Self = if is_yaml(path) {
            serde_yaml::from_str(&content).context("Failed to parse YAML config")?
        } else {
            serde_json::from_str(&content).context("Failed to parse JSON config")?
        };

        config.validate()?;
        Ok(config)
    }

    /// Build the effective configuration: defaults, then `--config`, then flags
    pub fn from_args(args: &Args) -> Result<Self> {
        let base = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        let config = base.apply_args(args);
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides
    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(endpoint) = &args.endpoint {
            self.endpoint = endpoint.clone();
        }
        if !args.providers.is_empty() {
            self.providers = args.providers.clone();
        }
        if let Some(question) = &args.question {
            self.question = question.clone();
        }
        if args.timeout.is_some() {
            self.timeout_secs = args.timeout;
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.providers.is_empty() {
            bail!("No providers configured");
        }
        if self.endpoint.trim().is_empty() {
            bail!("Gateway endpoint must not be empty");
        }
        Ok(())
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
