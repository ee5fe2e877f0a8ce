//! Tests for reserved-character escaping

use navtex_nrx::NrxError;
use navtex_nrx::reserved::{self, RESERVED_CHARACTERS};

#[test]
fn test_encode_line_break() {
    assert_eq!(reserved::encode("A\r\nB"), "A^0D^0AB");
}

#[test]
fn test_encode_every_reserved_character() {
    let text: String = RESERVED_CHARACTERS.iter().map(|(b, _)| *b as char).collect();
    assert_eq!(
        reserved::encode(&text),
        "^0D^0A^24^2A^2C^21^5C^5E^7E^7F"
    );
}

#[test]
fn test_encode_plain_text_unchanged() {
    let text = "ESTONIAN NAV WARN 006/18 - ICE CLASS 1D.";
    assert_eq!(reserved::encode(text), text);
}

#[test]
fn test_decode_token() {
    assert_eq!(reserved::decode("HELLO^2C WORLD").unwrap(), "HELLO, WORLD");
}

#[test]
fn test_decode_lowercase_hex() {
    assert_eq!(reserved::decode("^0d^0a").unwrap(), "\r\n");
}

#[test]
fn test_decode_non_reserved_token() {
    // Any hex byte is accepted, not just the reserved table
    assert_eq!(reserved::decode("^41").unwrap(), "A");
}

#[test]
fn test_decode_incomplete_token() {
    let err = reserved::decode("AB^0").unwrap_err();
    assert!(matches!(err, NrxError::MalformedEscape { position: 2, .. }));

    let err = reserved::decode("^").unwrap_err();
    assert!(matches!(err, NrxError::MalformedEscape { position: 0, .. }));
}

#[test]
fn test_decode_non_hex_token() {
    let err = reserved::decode("X^G1").unwrap_err();
    assert!(matches!(err, NrxError::MalformedEscape { position: 1, .. }));
}

#[test]
fn test_round_trip_with_unicode() {
    let text = "ÅLAND, 60°N\r\n~ÄÖ~";
    let encoded = reserved::encode(text);
    assert!(!encoded.contains(','));
    assert!(!encoded.contains('~'));
    assert_eq!(reserved::decode(&encoded).unwrap(), text);
}

#[test]
fn test_prefix_is_escaped() {
    assert_eq!(reserved::encode("^2C"), "^5E2C");
    assert_eq!(reserved::decode("^5E2C").unwrap(), "^2C");
}
