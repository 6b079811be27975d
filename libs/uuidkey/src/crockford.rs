//! Fixed-width Crockford base-32 blocks.
//!
//! A block renders one 32-bit group as seven symbols, most significant first,
//! left-padded with `0`. Seven symbols hold 35 bits, so the leading symbol of
//! an encoded block is never above `3`; decoding rejects anything wider.

use crate::error::{KeyError, Result};

/// Symbols in value order. `I`, `L`, `O` and `U` are excluded.
pub(crate) const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Number of symbols in one block.
pub(crate) const BLOCK_LENGTH: usize = crate::KEY_BLOCK_LENGTH;

const INVALID: u8 = 0xFF;

// Decoding is case-insensitive.
const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut value = 0;
    while value < ALPHABET.len() {
        let symbol = ALPHABET[value];
        table[symbol as usize] = value as u8;
        table[symbol.to_ascii_lowercase() as usize] = value as u8;
        value += 1;
    }
    table
}

/// Encodes a 32-bit group as an uppercase, zero-padded block.
pub(crate) fn encode_block(mut value: u32) -> [u8; BLOCK_LENGTH] {
    let mut block = [ALPHABET[0]; BLOCK_LENGTH];
    for symbol in block.iter_mut().rev() {
        *symbol = ALPHABET[(value & 0x1F) as usize];
        value >>= 5;
    }
    block
}

/// Decodes one block back into its 32-bit group.
///
/// `index` is the block's position in the Key and is only used for error
/// reporting. The caller guarantees `block` is ASCII.
pub(crate) fn decode_block(block: &[u8], index: usize) -> Result<u32> {
    let mut value: u64 = 0;
    for &byte in block {
        let digit = DECODE_TABLE[byte as usize];
        if digit == INVALID {
            return Err(KeyError::InvalidCharacter {
                block: index,
                character: char::from(byte),
            });
        }
        value = (value << 5) | u64::from(digit);
    }
    u32::try_from(value).map_err(|_| KeyError::BlockOverflow { block: index })
}
