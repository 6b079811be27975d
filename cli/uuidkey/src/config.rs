//! Configuration from the environment.
//!
//! Command-line flags take precedence over these values.

use anyhow::{anyhow, Result};
use clap::ValueEnum;

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output format.
    pub format: OutputFormat,

    /// Log filter directive used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Emit logs as JSON.
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_level: "warn".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(format) = var("UUIDKEY_FORMAT") {
            config.format = OutputFormat::from_str(&format, true)
                .map_err(|_| anyhow!("UUIDKEY_FORMAT must be 'table' or 'json', got '{format}'"))?;
        }

        if let Some(level) = var("UUIDKEY_LOG_LEVEL") {
            config.log_level = level;
        }

        config.log_json = var("UUIDKEY_LOG_JSON")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(config)
    }
}
