use std::fmt;

use super::checksum;
use super::types::TalkerId;
use crate::{NrxError, Result};

/// Characters that delimit or frame a sentence and can never appear in a field
pub(crate) const FRAMING_CHARS: [char; 6] = ['$', '!', '*', ',', '\r', '\n'];

/// Generic field-indexed sentence
///
/// A sentence is a talker id, a three character sentence id and a fixed
/// number of string fields. Typed accessors format and parse field values;
/// the checksum is derived from the content whenever the sentence is
/// serialized.
///
/// # Example
///
/// ```
/// use navtex_nrx::{Sentence, TalkerId};
///
/// let mut sentence = Sentence::new(TalkerId::CR, "NRX", 13).unwrap();
/// assert_eq!(sentence.to_sentence(), "$CRNRX,,,,,,,,,,,,,*79");
///
/// sentence.set_int_field(0, 1, 3).unwrap();
/// assert_eq!(sentence.field(0).unwrap(), "001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    talker: TalkerId,
    sentence_id: String,
    fields: Vec<String>,
}

impl Sentence {
    /// Create an empty sentence with `field_count` fields
    ///
    /// # Errors
    /// Returns an error if `sentence_id` is not three uppercase ASCII letters
    /// or digits.
    pub fn new(talker: TalkerId, sentence_id: &str, field_count: usize) -> Result<Self> {
        validate_sentence_id(sentence_id)?;
        Ok(Self::with_fields(talker, sentence_id, vec![String::new(); field_count]))
    }

    pub(crate) fn with_fields(talker: TalkerId, sentence_id: &str, fields: Vec<String>) -> Self {
        Self {
            talker,
            sentence_id: sentence_id.to_string(),
            fields,
        }
    }

    pub fn talker(&self) -> TalkerId {
        self.talker
    }

    /// Change the talker id; fields are left untouched
    pub fn set_talker(&mut self, talker: TalkerId) {
        self.talker = talker;
    }

    pub fn sentence_id(&self) -> &str {
        &self.sentence_id
    }

    /// Number of data fields, fixed at construction
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// All fields in order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Check if a field holds a value
    pub fn has_value(&self, index: usize) -> bool {
        self.fields.get(index).is_some_and(|f| !f.is_empty())
    }

    /// Get a field as text
    ///
    /// # Errors
    /// [`NrxError::DataNotAvailable`] if the field is empty.
    pub fn field(&self, index: usize) -> Result<&str> {
        let value = self.raw_field(index)?;
        if value.is_empty() {
            return Err(NrxError::DataNotAvailable { index });
        }
        Ok(value)
    }

    /// Get a field as a decimal integer
    pub fn int_field(&self, index: usize) -> Result<i64> {
        let value = self.field(index)?;
        value.parse().map_err(|_| {
            NrxError::Parse(format!(
                "Field {} is not an integer: '{}'",
                index, value
            ))
        })
    }

    /// Get a single character field
    pub fn char_field(&self, index: usize) -> Result<char> {
        let value = self.field(index)?;
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ch),
            _ => Err(NrxError::Parse(format!(
                "Field {} is not a single character: '{}'",
                index, value
            ))),
        }
    }

    /// Store a text value
    ///
    /// # Errors
    /// [`NrxError::InvalidArgument`] if `index` is out of range or the value
    /// contains framing characters (`$ ! * ,` CR LF). The field is left
    /// unchanged on error.
    pub fn set_field(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        self.check_index(index)?;
        if let Some(bad) = value.chars().find(|c| FRAMING_CHARS.contains(c)) {
            return Err(NrxError::InvalidArgument(format!(
                "Field {} contains reserved character {:?}",
                index, bad
            )));
        }
        self.fields[index] = value;
        Ok(())
    }

    /// Store an integer as zero padded decimal of at least `width` digits
    ///
    /// A `width` of 0 writes the plain decimal representation.
    ///
    /// # Errors
    /// [`NrxError::InvalidArgument`] if `value` is negative while a padding
    /// width is requested.
    pub fn set_int_field(&mut self, index: usize, value: i64, width: usize) -> Result<()> {
        self.check_index(index)?;
        if value < 0 && width > 0 {
            return Err(NrxError::InvalidArgument(format!(
                "Field {} cannot hold negative value {} with width {}",
                index, value, width
            )));
        }
        self.fields[index] = format!("{:0width$}", value, width = width);
        Ok(())
    }

    /// Store a single character
    pub fn set_char_field(&mut self, index: usize, value: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.set_field(index, &*value.encode_utf8(&mut buf))
    }

    /// Empty a single field
    pub fn clear_field(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.fields[index].clear();
        Ok(())
    }

    /// Empty every field, keeping the field count, ids and allocations
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
    }

    /// Checksum of the current content
    pub fn checksum(&self) -> u8 {
        checksum::calculate(self.content().as_bytes())
    }

    /// Serialize to wire text without line terminator
    pub fn to_sentence(&self) -> String {
        let content = self.content();
        let checksum = checksum::calculate(content.as_bytes());
        format!("${}*{}", content, checksum::format(checksum))
    }

    /// Text between `$` and `*`
    fn content(&self) -> String {
        let len = 5 + self.fields.iter().map(|f| f.len() + 1).sum::<usize>();
        let mut content = String::with_capacity(len);
        content.push_str(&self.talker.to_string());
        content.push_str(&self.sentence_id);
        for field in &self.fields {
            content.push(',');
            content.push_str(field);
        }
        content
    }

    fn raw_field(&self, index: usize) -> Result<&str> {
        self.check_index(index)?;
        Ok(&self.fields[index])
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.fields.len() {
            return Err(NrxError::InvalidArgument(format!(
                "Field index {} out of range for {} sentence with {} fields",
                index,
                self.sentence_id,
                self.fields.len()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sentence())
    }
}

pub(crate) fn validate_sentence_id(sentence_id: &str) -> Result<()> {
    let bytes = sentence_id.as_bytes();
    if bytes.len() != 3 || !bytes.iter().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()) {
        return Err(NrxError::InvalidArgument(format!(
            "Sentence id must be 3 uppercase letters or digits, got '{}'",
            sentence_id
        )));
    }
    Ok(())
}
