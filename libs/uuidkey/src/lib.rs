//! # uuidkey
//!
//! Reversible, human-friendlier text encoding for UUIDs.
//!
//! ## Key Format
//!
//! A Key is 31 characters: four blocks of seven Crockford base-32 symbols
//! joined by hyphens. Each block carries one big-endian 32-bit group of the
//! UUID, left-padded with `0`.
//!
//! ```text
//! d1756360-5da0-40df-9926-a76abff5601d
//! 38QARV0-1ET0G6Z-2CJD9VA-2ZZAR0X
//! ```
//!
//! The alphabet is `0-9` and `A-Z` without `I`, `L`, `O` and `U`. Keys are
//! emitted in uppercase; the block decoder also accepts lowercase.
//!
//! ## Validation
//!
//! [`is_valid`] checks structure only (length, hyphen placement, uppercase
//! alphanumerics). Block decoding is the authoritative alphabet check, so a
//! structurally valid Key holding an excluded letter still fails to decode.
//! The `uuid*` accessors on [`Key`] validate before decoding.

mod codec;
mod crockford;
mod error;
mod key;
mod validate;

pub use codec::{encode, encode_bytes, encode_uuid};
pub use error::{KeyError, Result};
pub use key::Key;
pub use validate::is_valid;

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;

/// Total length of a Key, including hyphens.
pub const KEY_LENGTH: usize = 31;

/// Length of each block in a Key.
pub const KEY_BLOCK_LENGTH: usize = 7;

/// Number of hyphens in a Key.
pub const KEY_HYPHEN_COUNT: usize = 3;

/// Number of blocks in a Key.
pub const KEY_BLOCK_COUNT: usize = KEY_HYPHEN_COUNT + 1;

/// Length of a canonical hyphenated UUID string (RFC 4122).
pub const UUID_LENGTH: usize = 36;

/// Parses and validates a Key. Same as [`Key::parse`].
pub fn parse(key: &str) -> Result<Key> {
    Key::parse(key)
}
