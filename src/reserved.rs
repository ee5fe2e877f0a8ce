//! Reserved-character escaping for NMEA text fields
//!
//! Text carried in sentences such as NRX must not contain bytes that are
//! structurally significant to the wire format. Each reserved byte is
//! transmitted as a three character token `^XX`, where `XX` is the uppercase
//! hexadecimal value of the byte. A NAVTEX message line break, for example,
//! travels as `^0D^0A`.
//!
//! `^` is itself reserved, so every `^` in escaped text starts a token.
//!
//! ```
//! use navtex_nrx::reserved::{decode, encode};
//!
//! assert_eq!(encode("A,B"), "A^2CB");
//! assert_eq!(decode("A^2CB").unwrap(), "A,B");
//! ```

use crate::{NrxError, Result};

/// Escape token prefix
pub const ESCAPE_PREFIX: u8 = b'^';

/// Length of an escape token including the prefix
pub const TOKEN_LEN: usize = 3;

/// Reserved bytes and their escape tokens
pub const RESERVED_CHARACTERS: [(u8, &str); 10] = [
    (0x0D, "^0D"), // CR
    (0x0A, "^0A"), // LF
    (0x24, "^24"), // '$'
    (0x2A, "^2A"), // '*'
    (0x2C, "^2C"), // ','
    (0x21, "^21"), // '!'
    (0x5C, "^5C"), // '\'
    (0x5E, "^5E"), // '^'
    (0x7E, "^7E"), // '~'
    (0x7F, "^7F"), // DEL
];

/// Return the escape token for `byte`, or `None` if the byte is not reserved
pub fn escape_token(byte: u8) -> Option<&'static str> {
    RESERVED_CHARACTERS
        .iter()
        .find(|(reserved, _)| *reserved == byte)
        .map(|(_, token)| *token)
}

/// Check if a byte must be escaped before it can be placed in a sentence
pub fn is_reserved(byte: u8) -> bool {
    escape_token(byte).is_some()
}

/// Escape every reserved byte in `data`
///
/// Each input byte is visited once; produced tokens are never re-scanned.
pub fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let reserved = data.iter().filter(|&&b| is_reserved(b)).count();
    let mut output = Vec::with_capacity(data.len() + reserved * (TOKEN_LEN - 1));

    for &byte in data {
        match escape_token(byte) {
            Some(token) => output.extend_from_slice(token.as_bytes()),
            None => output.push(byte),
        }
    }

    output
}

/// Escape every reserved character in `text`
///
/// All reserved bytes are ASCII, so multi-byte UTF-8 sequences pass through
/// untouched and the result is always valid UTF-8.
pub fn encode(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for ch in text.chars() {
        match u8::try_from(ch).ok().and_then(escape_token) {
            Some(token) => output.push_str(token),
            None => output.push(ch),
        }
    }
    output
}

/// Replace every `^XX` token in `escaped` with the byte it names
///
/// # Errors
/// Returns [`NrxError::MalformedEscape`] if a `^` is followed by fewer than
/// two characters or by characters that are not hexadecimal digits.
pub fn decode_bytes(escaped: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(escaped.len());
    let mut i = 0;

    while i < escaped.len() {
        let byte = escaped[i];

        if byte == ESCAPE_PREFIX {
            if i + TOKEN_LEN > escaped.len() {
                return Err(NrxError::MalformedEscape {
                    position: i,
                    reason: "incomplete escape token at end of input".to_string(),
                });
            }

            let high = hex_value(escaped[i + 1]);
            let low = hex_value(escaped[i + 2]);
            match (high, low) {
                (Some(high), Some(low)) => output.push((high << 4) | low),
                _ => {
                    return Err(NrxError::MalformedEscape {
                        position: i,
                        reason: format!(
                            "'{}' is not a hexadecimal byte",
                            String::from_utf8_lossy(&escaped[i + 1..i + TOKEN_LEN])
                        ),
                    });
                }
            }

            i += TOKEN_LEN;
        } else {
            output.push(byte);
            i += 1;
        }
    }

    Ok(output)
}

/// Replace every `^XX` token in `escaped` with the character it names
///
/// # Errors
/// Returns [`NrxError::MalformedEscape`] for broken tokens and
/// [`NrxError::Utf8`] if the unescaped bytes are not valid UTF-8.
pub fn decode(escaped: &str) -> Result<String> {
    let bytes = decode_bytes(escaped.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}
