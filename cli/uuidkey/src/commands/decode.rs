//! Decode command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;
use uuidkey::Key;

use crate::error::CliError;
use crate::output::print_output;

use super::{read_inputs, CommandContext};

/// Decode Keys into UUIDs.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Keys to decode. Read from stdin, one per line, when omitted.
    keys: Vec<String>,

    /// Print the 16 UUID bytes as hex instead of the hyphenated string.
    #[arg(long)]
    bytes: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct DecodeRow {
    key: String,
    uuid: String,
}

impl DecodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let inputs = read_inputs(self.keys)?;
        let rows = decode_all(&inputs, self.bytes)?;
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn decode_all(inputs: &[String], as_bytes: bool) -> Result<Vec<DecodeRow>, CliError> {
    inputs
        .iter()
        .map(|input| {
            let key = Key::new_unchecked(input.as_str());
            let decoded = if as_bytes {
                key.uuid_bytes().map(hex::encode)
            } else {
                key.uuid_string()
            };
            let uuid = decoded.map_err(|source| CliError::Decode {
                input: input.clone(),
                source,
            })?;
            debug!(key = %input, uuid = %uuid, "decoded");
            Ok(DecodeRow {
                key: input.clone(),
                uuid,
            })
        })
        .collect()
}
