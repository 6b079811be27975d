//! CLI commands.

mod decode;
mod encode;
mod validate;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::Config;
use crate::error::CliError;
use crate::logging;
use crate::output::OutputFormat;

/// uuidkey - Encode UUIDs as readable Keys and decode them back.
#[derive(Debug, Parser)]
#[command(name = "uuidkey")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format [env: UUIDKEY_FORMAT].
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Log filter used when RUST_LOG is unset [env: UUIDKEY_LOG_LEVEL].
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON [env: UUIDKEY_LOG_JSON].
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode UUIDs into Keys.
    Encode(encode::EncodeCommand),

    /// Decode Keys into UUIDs.
    Decode(decode::DecodeCommand),

    /// Check Keys for validity.
    Validate(validate::ValidateCommand),
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let mut config = Config::from_env()?;
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        config.log_json |= self.log_json;

        logging::init(&config)?;
        debug!(format = ?config.format, "configuration loaded");

        let ctx = CommandContext {
            format: config.format,
        };

        match self.command {
            Commands::Encode(cmd) => cmd.run(ctx),
            Commands::Decode(cmd) => cmd.run(ctx),
            Commands::Validate(cmd) => cmd.run(ctx),
        }
    }
}

/// Context passed to commands.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub format: OutputFormat,
}

/// Returns the positional arguments, or stdin lines when there are none.
fn read_inputs(args: Vec<String>) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }
    collect_lines(io::stdin().lock())
}

fn collect_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }

    if inputs.is_empty() {
        return Err(CliError::NoInput.into());
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_encode_with_format() {
        let cli = Cli::try_parse_from([
            "uuidkey",
            "--format",
            "json",
            "encode",
            "d1756360-5da0-40df-9926-a76abff5601d",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Encode(_)));
    }

    #[test]
    fn test_parse_global_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["uuidkey", "validate", "--log-json", "KEY"]).unwrap();
        assert!(cli.log_json);
        assert!(matches!(cli.command, Commands::Validate(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["uuidkey", "--format", "yaml", "decode"]).is_err());
    }

    #[test]
    fn test_collect_lines_skips_blank() {
        let input = "d1756360-5da0-40df-9926-a76abff5601d\n\n  38QARV0-1ET0G6Z-2CJD9VA-2ZZAR0X  \n";
        let lines = collect_lines(input.as_bytes()).unwrap();
        assert_eq!(
            lines,
            vec![
                "d1756360-5da0-40df-9926-a76abff5601d",
                "38QARV0-1ET0G6Z-2CJD9VA-2ZZAR0X",
            ]
        );
    }

    #[test]
    fn test_collect_lines_empty_is_error() {
        let err = collect_lines("\n  \n".as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NoInput)
        ));
    }

    #[test]
    fn test_read_inputs_prefers_args() {
        let args = vec!["a".to_string()];
        assert_eq!(read_inputs(args.clone()).unwrap(), args);
    }
}
