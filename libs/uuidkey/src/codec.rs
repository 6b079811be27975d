//! Conversion between UUIDs and Keys.
//!
//! A UUID is split into four big-endian 32-bit groups (bytes 0-3, 4-7, 8-11
//! and 12-15). In the hyphenated string form that is field 1, fields 2+3,
//! field 4 plus the first half of field 5, and the second half of field 5.
//! Each group becomes one Crockford block of the Key.

use tracing::trace;
use uuid::Uuid;

use crate::crockford::{self, BLOCK_LENGTH};
use crate::error::{KeyError, Result};
use crate::{Key, KEY_BLOCK_COUNT, KEY_LENGTH, UUID_LENGTH};

/// Byte offsets of the block separators in a Key.
const SEPARATOR_OFFSETS: [usize; 3] = [7, 15, 23];

/// Encodes a canonical hyphenated UUID string into a Key.
///
/// The input must be exactly 36 characters in the `8-4-4-4-12` layout. Hex
/// digits may be upper or lower case.
///
/// # Errors
///
/// Returns [`KeyError::InvalidUuidLength`] if the input is not 36 characters
/// long, and [`KeyError::InvalidUuid`] if it is not hyphenated hex.
///
/// ```
/// let key = uuidkey::encode("d1756360-5da0-40df-9926-a76abff5601d").unwrap();
/// assert_eq!(key.as_str(), "38QARV0-1ET0G6Z-2CJD9VA-2ZZAR0X");
/// ```
pub fn encode(uuid: &str) -> Result<Key> {
    if uuid.len() != UUID_LENGTH {
        return Err(KeyError::InvalidUuidLength {
            expected: UUID_LENGTH,
            actual: uuid.len(),
        });
    }

    // At 36 characters the only layout uuid accepts is the hyphenated one.
    let parsed = Uuid::try_parse(uuid).map_err(|e| KeyError::InvalidUuid {
        message: e.to_string(),
    })?;

    Ok(encode_bytes(*parsed.as_bytes()))
}

/// Encodes 16 raw UUID bytes into a Key.
///
/// Every byte pattern has a Key, so this cannot fail.
pub fn encode_bytes(uuid: [u8; 16]) -> Key {
    let mut key = String::with_capacity(KEY_LENGTH);
    for (index, group) in uuid.chunks_exact(4).enumerate() {
        if index > 0 {
            key.push('-');
        }
        let value = u32::from_be_bytes([group[0], group[1], group[2], group[3]]);
        key.extend(crockford::encode_block(value).iter().map(|&b| char::from(b)));
    }

    trace!(key = %key, "encoded uuid bytes");
    Key::from_encoded(key)
}

/// Encodes a [`Uuid`] into a Key.
pub fn encode_uuid(uuid: &Uuid) -> Key {
    encode_bytes(*uuid.as_bytes())
}

/// Decodes a Key string into 16 UUID bytes without running the validator.
///
/// Lowercase symbols are accepted. Symbols outside the Crockford alphabet,
/// including `I`, `L`, `O` and `U`, fail here.
pub(crate) fn decode_bytes(key: &str) -> Result<[u8; 16]> {
    let blocks = split_blocks(key)?;

    let mut uuid = [0u8; 16];
    for (index, (block, out)) in blocks.iter().zip(uuid.chunks_exact_mut(4)).enumerate() {
        let value = crockford::decode_block(block, index)?;
        out.copy_from_slice(&value.to_be_bytes());
    }
    Ok(uuid)
}

/// Decodes a Key string into the canonical lowercase hyphenated UUID string.
pub(crate) fn decode_string(key: &str) -> Result<String> {
    let bytes = decode_bytes(key)?;
    Ok(Uuid::from_bytes(bytes).hyphenated().to_string())
}

/// Splits a Key into its four blocks, checking length and separators.
///
/// The length check runs before anything else so callers always see a length
/// error for short or long input, never an alphabet error.
fn split_blocks(key: &str) -> Result<[&[u8]; KEY_BLOCK_COUNT]> {
    if key.len() != KEY_LENGTH {
        return Err(KeyError::InvalidKeyLength {
            expected: KEY_LENGTH,
            actual: key.len(),
        });
    }

    // Blocks are sliced by byte offset, which is only meaningful for ASCII.
    if let Some((position, character)) = key.char_indices().find(|(_, c)| !c.is_ascii()) {
        return Err(KeyError::InvalidCharacter {
            block: position / (BLOCK_LENGTH + 1),
            character,
        });
    }

    let bytes = key.as_bytes();
    for position in SEPARATOR_OFFSETS {
        if bytes[position] != b'-' {
            return Err(KeyError::InvalidSeparator { position });
        }
    }

    Ok([
        &bytes[0..7],
        &bytes[8..15],
        &bytes[16..23],
        &bytes[24..31],
    ])
}
