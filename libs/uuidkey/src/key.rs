//! The [`Key`] value type.

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use uuid::Uuid;

use crate::codec;
use crate::error::{KeyError, Result};
use crate::validate;

/// A UUID Key: four 7-character Crockford base-32 blocks joined by hyphens.
///
/// Keys built by [`Key::parse`] or by the encoders always satisfy the Key
/// grammar. [`Key::new_unchecked`] wraps arbitrary text, for callers that want
/// to hold user input and check it later with [`Key::valid`].
///
/// ```
/// use uuidkey::Key;
///
/// let key = Key::parse("38QARV0-1ET0G6Z-2CJD9VA-2ZZAR0X").unwrap();
/// assert_eq!(
///     key.uuid_string().unwrap(),
///     "d1756360-5da0-40df-9926-a76abff5601d"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(String);

impl Key {
    pub(crate) fn from_encoded(key: String) -> Self {
        Self(key)
    }

    /// Wraps a string as a Key without validating it.
    #[must_use]
    pub fn new_unchecked(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Parses and validates a Key.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidKey`] if `key` does not follow the Key grammar.
    pub fn parse(key: &str) -> Result<Self> {
        if !validate::is_valid(key) {
            debug!(key, "rejected malformed key");
            return Err(KeyError::InvalidKey(key.to_string()));
        }
        Ok(Self(key.to_string()))
    }

    /// Returns the Key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the Key and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns true if this Key follows the Key grammar.
    pub fn valid(&self) -> bool {
        validate::is_valid(&self.0)
    }

    /// Decodes this Key into a canonical UUID string.
    ///
    /// Only the length is checked up front; the alphabet is enforced while
    /// decoding each block. Use [`Key::uuid_string`] to validate first.
    pub fn decode(&self) -> Result<String> {
        codec::decode_string(&self.0)
    }

    /// Decodes this Key into 16 UUID bytes.
    pub fn bytes(&self) -> Result<[u8; 16]> {
        codec::decode_bytes(&self.0)
    }

    /// Validates and decodes this Key into a [`Uuid`].
    pub fn uuid(&self) -> Result<Uuid> {
        self.uuid_bytes().map(Uuid::from_bytes)
    }

    /// Validates and decodes this Key into a canonical UUID string.
    pub fn uuid_string(&self) -> Result<String> {
        self.ensure_valid()?;
        self.decode()
    }

    /// Validates and decodes this Key into 16 UUID bytes.
    pub fn uuid_bytes(&self) -> Result<[u8; 16]> {
        self.ensure_valid()?;
        self.bytes()
    }

    fn ensure_valid(&self) -> Result<()> {
        if self.valid() {
            return Ok(());
        }
        debug!(key = %self.0, "refusing to decode malformed key");
        Err(KeyError::InvalidKey(self.0.clone()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Key {
    type Error = KeyError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Key {
    type Error = KeyError;

    fn try_from(s: String) -> Result<Self> {
        if !validate::is_valid(&s) {
            return Err(KeyError::InvalidKey(s));
        }
        Ok(Self(s))
    }
}

impl From<Uuid> for Key {
    fn from(uuid: Uuid) -> Self {
        codec::encode_uuid(&uuid)
    }
}

impl From<[u8; 16]> for Key {
    fn from(bytes: [u8; 16]) -> Self {
        codec::encode_bytes(bytes)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.0
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s).map_err(serde::de::Error::custom)
    }
}
