//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;
use uuidkey::KeyError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot encode '{input}': {source}")]
    Encode { input: String, source: KeyError },

    #[error("cannot decode '{input}': {source}")]
    Decode { input: String, source: KeyError },

    #[error("{invalid} of {total} keys are invalid")]
    InvalidKeys { invalid: usize, total: usize },

    #[error("no input provided")]
    NoInput,
}

impl CliError {
    fn key_error(&self) -> Option<&KeyError> {
        match self {
            CliError::Encode { source, .. } | CliError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = err.downcast_ref::<CliError>().and_then(hint) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint(err: &CliError) -> Option<&'static str> {
    if matches!(err, CliError::NoInput) {
        return Some("Pass values as arguments or pipe them on stdin, one per line.");
    }

    let key_err = err.key_error()?;
    if matches!(err, CliError::Encode { .. }) {
        return Some("UUIDs must be hyphenated, e.g. d1756360-5da0-40df-9926-a76abff5601d.");
    }
    if key_err.is_alphabet_error() {
        Some("Keys use Crockford base-32: the letters I, L, O and U never appear.")
    } else if key_err.is_format_error() || key_err.is_length_error() {
        Some("Keys are four 7-character uppercase blocks joined by hyphens.")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_error_message() {
        let err = CliError::Encode {
            input: "abc".to_string(),
            source: KeyError::InvalidUuidLength {
                expected: 36,
                actual: 3,
            },
        };
        assert_eq!(
            err.to_string(),
            "cannot encode 'abc': invalid UUID length: expected 36 characters, got 3"
        );
        assert!(hint(&err).unwrap().contains("hyphenated"));
    }

    #[test]
    fn test_decode_alphabet_hint() {
        let err = CliError::Decode {
            input: "38QARV0-1ET0G6Z-2CJD9VA-2ZZARUX".to_string(),
            source: KeyError::InvalidCharacter {
                block: 3,
                character: 'U',
            },
        };
        assert!(hint(&err).unwrap().contains("Crockford"));
    }

    #[test]
    fn test_invalid_keys_has_no_hint() {
        let err = CliError::InvalidKeys {
            invalid: 1,
            total: 2,
        };
        assert_eq!(err.to_string(), "1 of 2 keys are invalid");
        assert!(hint(&err).is_none());
    }
}
