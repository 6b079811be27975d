//! Validate command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use uuidkey::Key;

use crate::error::CliError;
use crate::output::print_output;

use super::{read_inputs, CommandContext};

/// Check Keys for validity.
///
/// A Key is reported valid only if it follows the Key grammar and every block
/// decodes. Exits non-zero if any Key is invalid.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Keys to check. Read from stdin, one per line, when omitted.
    keys: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct ValidateRow {
    key: String,
    valid: bool,
    reason: String,
}

impl ValidateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let inputs = read_inputs(self.keys)?;
        let rows = check_all(&inputs);
        print_output(&rows, ctx.format);

        let invalid = rows.iter().filter(|row| !row.valid).count();
        if invalid > 0 {
            return Err(CliError::InvalidKeys {
                invalid,
                total: rows.len(),
            }
            .into());
        }
        Ok(())
    }
}

fn check_all(inputs: &[String]) -> Vec<ValidateRow> {
    inputs
        .iter()
        .map(|input| {
            let result = Key::new_unchecked(input.as_str()).uuid_bytes();
            ValidateRow {
                key: input.clone(),
                valid: result.is_ok(),
                reason: result.err().map(|e| e.to_string()).unwrap_or_default(),
            }
        })
        .collect()
}
