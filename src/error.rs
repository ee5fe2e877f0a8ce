//! NRX codec error types

use thiserror::Error;

/// Errors raised while building, parsing, escaping or reassembling NRX sentences
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NrxError {
    /// A typed accessor was called on an empty field
    #[error("No data available in field {index}")]
    DataNotAvailable {
        /// 0-based field index
        index: usize,
    },

    /// Stored or wire text cannot be coerced to the requested type
    #[error("Parse error: {0}")]
    Parse(String),

    /// Checksum computed over the sentence disagrees with the transmitted one
    #[error("Checksum mismatch: sentence says {expected:02X}, computed {computed:02X}")]
    ChecksumMismatch {
        /// Checksum carried by the sentence
        expected: u8,
        /// Checksum computed from the sentence content
        computed: u8,
    },

    /// A setter or constructor received an out-of-range value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Escaped text contains an incomplete or non-hex `^XX` token
    #[error("Malformed escape at position {position}: {reason}")]
    MalformedEscape {
        /// Byte offset of the offending `^`
        position: usize,
        /// What is wrong with the token
        reason: String,
    },

    /// Not every sentence of a series has been supplied
    #[error("Series incomplete: received {received} of {expected} sentences")]
    SeriesIncomplete {
        /// Number of sentences announced by the series
        expected: usize,
        /// Number of distinct sentences received
        received: usize,
    },

    /// Two sentences disagree on fields identifying their series
    #[error("Series mismatch: {0}")]
    SeriesMismatch(String),

    /// Unescaped text is not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias using NrxError
pub type Result<T> = std::result::Result<T, NrxError>;
