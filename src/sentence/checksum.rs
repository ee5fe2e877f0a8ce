//! NMEA sentence checksum
//!
//! The checksum is the XOR of every byte between the leading `$` and the
//! `*` delimiter, transmitted as two uppercase hexadecimal digits.

use crate::{NrxError, Result};

/// Compute the checksum of the sentence content between `$` and `*`
pub fn calculate(content: &[u8]) -> u8 {
    content.iter().fold(0, |acc, &b| acc ^ b)
}

/// Render a checksum as two uppercase hex digits
pub fn format(checksum: u8) -> String {
    format!("{:02X}", checksum)
}

/// Parse the two uppercase hex digits following `*`
pub(crate) fn parse(digits: &str) -> Result<u8> {
    if digits.len() != 2
        || !digits
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
    {
        return Err(NrxError::Parse(format!(
            "Checksum must be two uppercase hex digits, got '{}'",
            digits
        )));
    }
    u8::from_str_radix(digits, 16)
        .map_err(|e| NrxError::Parse(format!("Invalid checksum '{}': {}", digits, e)))
}
