//! Round-trip properties, cross-checked against independently generated IDs.

use proptest::prelude::*;
use ulid::Ulid;
use uuidkey::{encode, encode_bytes, Key, Uuid};

const SAMPLES: usize = 1000;

proptest! {
    #[test]
    fn bytes_roundtrip(bytes in any::<[u8; 16]>()) {
        let key = encode_bytes(bytes);
        prop_assert!(key.valid());
        prop_assert_eq!(key.bytes().unwrap(), bytes);
        prop_assert_eq!(key.uuid_bytes().unwrap(), bytes);
    }

    #[test]
    fn string_roundtrip(bytes in any::<[u8; 16]>()) {
        let uuid = Uuid::from_bytes(bytes).hyphenated().to_string();
        let key = encode(&uuid).unwrap();
        prop_assert_eq!(key.decode().unwrap(), uuid.clone());
        prop_assert_eq!(key.uuid_string().unwrap(), uuid);
    }

    #[test]
    fn string_and_bytes_encoders_agree(bytes in any::<[u8; 16]>()) {
        let uuid = Uuid::from_bytes(bytes).hyphenated().to_string();
        prop_assert_eq!(encode(&uuid).unwrap(), encode_bytes(bytes));
    }

    #[test]
    fn wrong_length_uuid_never_encodes(s in "[0-9a-f-]{0,64}") {
        prop_assume!(s.len() != uuidkey::UUID_LENGTH);
        let err = encode(&s).unwrap_err();
        prop_assert!(err.is_length_error());
    }

    #[test]
    fn parsed_keys_are_valid(s in "[0-9A-Z]{7}-[0-9A-Z]{7}-[0-9A-Z]{7}-[0-9A-Z]{7}") {
        let key = Key::parse(&s).unwrap();
        prop_assert!(key.valid());
        prop_assert_eq!(key.as_str(), s.as_str());
    }

    #[test]
    fn arbitrary_text_never_panics(s in "\\PC{0,40}") {
        let key = Key::new_unchecked(s.clone());
        let _ = key.valid();
        let _ = key.bytes();
        let _ = key.decode();
        if key.uuid_string().is_ok() {
            prop_assert!(uuidkey::is_valid(&s));
        }
    }
}

#[test]
fn test_uuid_v4_roundtrip() {
    for _ in 0..SAMPLES {
        let original = Uuid::new_v4();

        let key = encode(&original.to_string()).unwrap();
        assert!(key.valid(), "generated key is not valid: {key}");

        let decoded = Uuid::parse_str(&key.uuid_string().unwrap()).unwrap();
        assert_eq!(original, decoded);
        assert_eq!(key.uuid().unwrap(), original);
    }
}

#[test]
fn test_ulid_bytes_roundtrip() {
    for _ in 0..SAMPLES {
        let original = Ulid::new();
        let bytes = original.to_bytes();

        let key = encode_bytes(bytes);
        assert!(key.valid(), "generated key is not valid: {key}");

        let decoded = Ulid::from_bytes(key.bytes().unwrap());
        assert_eq!(original, decoded);
    }
}

#[test]
fn test_boundary_values() {
    let zero = encode_bytes([0u8; 16]);
    assert_eq!(zero.as_str(), "0000000-0000000-0000000-0000000");
    assert_eq!(zero.uuid().unwrap(), Uuid::nil());

    let max = encode_bytes([0xFFu8; 16]);
    assert_eq!(max.as_str(), "3ZZZZZZ-3ZZZZZZ-3ZZZZZZ-3ZZZZZZ");
    assert_eq!(max.uuid().unwrap(), Uuid::from_bytes([0xFFu8; 16]));
}
