//! Structural Key validation.

use crate::{KEY_BLOCK_LENGTH, KEY_HYPHEN_COUNT, KEY_LENGTH};

/// Returns true if `key` follows the Key grammar.
///
/// A valid Key is:
/// - 31 characters long
/// - four blocks of 7 characters separated by exactly 3 hyphens
/// - uppercase ASCII letters and digits only
///
/// The character check accepts every uppercase letter, including `I`, `L`,
/// `O` and `U`, which are not Crockford symbols. Block decoding is the final
/// arbiter of the alphabet, so a Key that passes here can still fail to decode.
///
/// ```
/// assert!(uuidkey::is_valid("38QARV0-1ET0G6Z-2CJD9VA-2ZZAR0X"));
/// assert!(!uuidkey::is_valid("38qarv0-1ET0G6Z-2CJD9VA-2ZZAR0X"));
/// assert!(!uuidkey::is_valid("38QARV0-1ET0G6-2CJD9VA-2ZZAR0X"));
/// ```
pub fn is_valid(key: &str) -> bool {
    if key.len() != KEY_LENGTH {
        return false;
    }

    let mut hyphens = 0;
    let mut block_len = 0;
    for byte in key.bytes() {
        match byte {
            b'-' => {
                if block_len != KEY_BLOCK_LENGTH {
                    return false;
                }
                block_len = 0;
                hyphens += 1;
            }
            b'0'..=b'9' | b'A'..=b'Z' => block_len += 1,
            _ => return false,
        }
    }

    hyphens == KEY_HYPHEN_COUNT && block_len == KEY_BLOCK_LENGTH
}
