//! Encode command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;
use uuid::Uuid;

use crate::error::CliError;
use crate::output::print_output;

use super::{read_inputs, CommandContext};

/// Encode UUIDs into Keys.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Hyphenated UUIDs to encode. Read from stdin, one per line, when omitted.
    uuids: Vec<String>,

    /// Generate a random v4 UUID and encode it.
    #[arg(long, conflicts_with = "uuids")]
    new: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct EncodeRow {
    uuid: String,
    key: String,
}

impl EncodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let inputs = if self.new {
            vec![Uuid::new_v4().to_string()]
        } else {
            read_inputs(self.uuids)?
        };

        let rows = encode_all(&inputs)?;
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn encode_all(inputs: &[String]) -> Result<Vec<EncodeRow>, CliError> {
    inputs
        .iter()
        .map(|input| {
            let key = uuidkey::encode(input).map_err(|source| CliError::Encode {
                input: input.clone(),
                source,
            })?;
            debug!(uuid = %input, key = %key, "encoded");
            Ok(EncodeRow {
                uuid: input.clone(),
                key: key.into_string(),
            })
        })
        .collect()
}
