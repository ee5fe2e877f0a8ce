use tracing::{trace, warn};

use super::checksum;
use super::fields::{FRAMING_CHARS, Sentence, validate_sentence_id};
use super::types::TalkerId;
use crate::{NrxError, Result};

impl Sentence {
    /// Parse wire text of any sentence type
    ///
    /// Format: `$TTSSS,f1,f2,...,fn*CC` with an optional trailing CR LF.
    /// The checksum is mandatory, must match the content and is written as
    /// two uppercase hex digits, so serializing the parsed sentence gives the
    /// input back without its line terminator. Fields may not contain `$` or
    /// `!`, the same framing characters [`Sentence::set_field`] rejects.
    ///
    /// # Example
    ///
    /// ```
    /// use navtex_nrx::Sentence;
    ///
    /// let sentence = Sentence::parse("$CRNRX,,,,,,,,,,,,,*79\r\n").unwrap();
    /// assert_eq!(sentence.sentence_id(), "NRX");
    /// assert_eq!(sentence.field_count(), 13);
    /// ```
    pub fn parse(wire: &str) -> Result<Self> {
        let line = wire.strip_suffix("\r\n").unwrap_or(wire);

        let body = line.strip_prefix('$').ok_or_else(|| {
            NrxError::Parse(format!("Sentence must start with '$': {}", line))
        })?;

        let (content, digits) = body.split_once('*').ok_or_else(|| {
            NrxError::Parse(format!("Sentence has no checksum delimiter: {}", line))
        })?;
        let expected = checksum::parse(digits)?;
        let computed = checksum::calculate(content.as_bytes());
        if expected != computed {
            warn!(
                "Checksum mismatch in {}: expected {:02X}, computed {:02X}",
                line, expected, computed
            );
            return Err(NrxError::ChecksumMismatch { expected, computed });
        }

        let mut parts = content.split(',');
        let address = parts.next().unwrap_or_default();
        if address.len() != 5 || !address.is_ascii() {
            return Err(NrxError::Parse(format!(
                "Sentence address must be 5 characters, got '{}'",
                address
            )));
        }
        let talker = TalkerId::new(&address[..2]).map_err(|e| NrxError::Parse(e.to_string()))?;
        let sentence_id = &address[2..];
        validate_sentence_id(sentence_id).map_err(|e| NrxError::Parse(e.to_string()))?;

        let fields: Vec<String> = parts.map(str::to_string).collect();
        if let Some((index, bad)) = fields.iter().enumerate().find_map(|(i, f)| {
            f.chars().find(|c| FRAMING_CHARS.contains(c)).map(|c| (i, c))
        }) {
            return Err(NrxError::Parse(format!(
                "Field {} contains framing character {:?}",
                index, bad
            )));
        }
        trace!("Parsed {}{} with {} fields", talker, sentence_id, fields.len());

        Ok(Self::with_fields(talker, sentence_id, fields))
    }

    /// Parse wire text and require a given sentence id and field count
    ///
    /// # Errors
    /// [`NrxError::Parse`] if the sentence id or arity differ, in addition to
    /// the errors of [`Sentence::parse`].
    pub fn parse_expecting(wire: &str, sentence_id: &str, field_count: usize) -> Result<Self> {
        let sentence = Self::parse(wire)?;
        if sentence.sentence_id() != sentence_id {
            return Err(NrxError::Parse(format!(
                "Expected {} sentence, got {}",
                sentence_id,
                sentence.sentence_id()
            )));
        }
        if sentence.field_count() != field_count {
            return Err(NrxError::Parse(format!(
                "{} sentence must have {} fields, got {}",
                sentence_id,
                field_count,
                sentence.field_count()
            )));
        }
        Ok(sentence)
    }
}
