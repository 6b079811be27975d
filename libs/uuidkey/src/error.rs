//! Error types for Key encoding, decoding, and validation.

use thiserror::Error;

/// Errors that can occur when converting between UUIDs and Keys.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The UUID string does not have the canonical hyphenated length.
    #[error("invalid UUID length: expected {expected} characters, got {actual}")]
    InvalidUuidLength { expected: usize, actual: usize },

    /// The UUID string has the right length but is not a hyphenated hex UUID.
    #[error("invalid UUID: {message}")]
    InvalidUuid { message: String },

    /// The Key string does not have the fixed Key length.
    #[error("invalid Key length: expected {expected} characters, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// The Key failed structural validation.
    #[error("invalid UUID Key: '{0}'")]
    InvalidKey(String),

    /// A block separator is missing from the Key.
    #[error("invalid Key separator at position {position}: expected '-'")]
    InvalidSeparator { position: usize },

    /// A block contains a symbol outside the Crockford base-32 alphabet.
    #[error("invalid character '{character}' in Key block {block}")]
    InvalidCharacter { block: usize, character: char },

    /// A block decodes to a value wider than 32 bits.
    #[error("Key block {block} does not fit in 32 bits")]
    BlockOverflow { block: usize },
}

impl KeyError {
    /// Returns true if this error reports an input of the wrong length.
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            KeyError::InvalidUuidLength { .. } | KeyError::InvalidKeyLength { .. }
        )
    }

    /// Returns true if this error was raised by Key validation.
    pub fn is_format_error(&self) -> bool {
        matches!(self, KeyError::InvalidKey(_) | KeyError::InvalidSeparator { .. })
    }

    /// Returns true if a block could not be decoded from the alphabet.
    pub fn is_alphabet_error(&self) -> bool {
        matches!(
            self,
            KeyError::InvalidCharacter { .. } | KeyError::BlockOverflow { .. }
        )
    }
}

/// Result type for Key operations.
pub type Result<T> = std::result::Result<T, KeyError>;
