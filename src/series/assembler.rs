use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::split::reassemble;
use crate::nrx::{MessageCode, NrxSentence};
use crate::reserved;
use crate::{NrxError, Result};

/// Collects the NRX sentences of one series and rebuilds the message
///
/// Sentences may be added in any order. The series is identified by the
/// sentence count and sequential id carried on every sentence, and by the
/// message code where a sentence carries one (continuation sentences usually
/// leave it empty).
///
/// # Example
///
/// ```
/// use navtex_nrx::{NrxSentence, SeriesAssembler};
///
/// let mut assembler = SeriesAssembler::new();
/// for line in [
///     "$CRNRX,002,002,00,,,,,,,,,,WORLD*3B",
///     "$CRNRX,002,001,00,,,,,,,,,,HELLO^2C *37",
/// ] {
///     assembler.add_sentence(NrxSentence::parse(line).unwrap()).unwrap();
/// }
///
/// assert!(assembler.is_complete());
/// assert_eq!(assembler.assemble().unwrap(), "HELLO, WORLD");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeriesAssembler {
    /// Sentence count announced by the series
    total_sentences: Option<u16>,
    /// Sequential message id shared by the series
    sequential_id: Option<u8>,
    /// Message code, once a sentence carrying it has been seen
    message_code: Option<MessageCode>,
    /// Escaped body fragments indexed by sentence number
    bodies: BTreeMap<u16, String>,
    /// First sentence of the series, holding the header fields
    first: Option<NrxSentence>,
}

impl SeriesAssembler {
    /// Create an empty assembler
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sentence of the series
    ///
    /// # Errors
    /// Returns an error if:
    /// - The sentence lacks its sentence number, count or sequential id
    /// - The sentence number is outside `1..=count`
    /// - The sentence disagrees with earlier ones on count, sequential id or
    ///   message code ([`NrxError::SeriesMismatch`])
    /// - The sentence number was already added with a different body
    pub fn add_sentence(&mut self, sentence: NrxSentence) -> Result<()> {
        let number = sentence.sentence_number()?;
        let total = sentence.number_of_sentences()?;
        let sequential_id = sentence.sequential_id()?;
        let message_code = optional(sentence.message_code())?;
        let body = optional(sentence.message_body())?.unwrap_or_default();

        if number == 0 || number > total {
            return Err(NrxError::SeriesMismatch(format!(
                "Sentence number {} outside series of {}",
                number, total
            )));
        }

        self.check_consistency(total, sequential_id, message_code)?;

        if let Some(existing) = self.bodies.get(&number) {
            if existing == body {
                debug!("Ignoring duplicate NRX sentence {} of {}", number, total);
                return Ok(());
            }
            return Err(NrxError::SeriesMismatch(format!(
                "Sentence {} received twice with different bodies",
                number
            )));
        }

        self.total_sentences = Some(total);
        self.sequential_id = Some(sequential_id);
        if message_code.is_some() {
            self.message_code = message_code;
        }
        self.bodies.insert(number, body.to_string());
        if number == 1 {
            self.first = Some(sentence);
        }

        Ok(())
    }

    fn check_consistency(
        &self,
        total: u16,
        sequential_id: u8,
        message_code: Option<MessageCode>,
    ) -> Result<()> {
        if let Some(expected) = self.total_sentences
            && expected != total
        {
            return Err(NrxError::SeriesMismatch(format!(
                "Inconsistent number of sentences: expected {}, got {}",
                expected, total
            )));
        }
        if let Some(expected) = self.sequential_id
            && expected != sequential_id
        {
            return Err(NrxError::SeriesMismatch(format!(
                "Inconsistent sequential id: expected {}, got {}",
                expected, sequential_id
            )));
        }
        if let (Some(expected), Some(code)) = (self.message_code, message_code)
            && expected != code
        {
            return Err(NrxError::SeriesMismatch(format!(
                "Inconsistent message code: expected {}, got {}",
                expected, code
            )));
        }
        Ok(())
    }

    /// Check if every sentence of the series has been received
    pub fn is_complete(&self) -> bool {
        self.total_sentences
            .is_some_and(|total| self.bodies.len() == usize::from(total))
    }

    /// Number of distinct sentences received
    pub fn sentences_received(&self) -> usize {
        self.bodies.len()
    }

    /// Sentence count announced by the series
    pub fn total_sentences(&self) -> Option<u16> {
        self.total_sentences
    }

    /// Sentence numbers not yet received
    pub fn missing_sentences(&self) -> Vec<u16> {
        match self.total_sentences {
            Some(total) => (1..=total)
                .filter(|n| !self.bodies.contains_key(n))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Message code of the series, if any sentence carried one
    pub fn message_code(&self) -> Option<MessageCode> {
        self.message_code
    }

    /// First sentence of the series with its header fields
    pub fn first_sentence(&self) -> Option<&NrxSentence> {
        self.first.as_ref()
    }

    /// Concatenate the body fragments in sentence number order
    ///
    /// # Errors
    /// [`NrxError::SeriesIncomplete`] if sentences are missing.
    pub fn assemble_escaped(&self) -> Result<String> {
        if !self.is_complete() {
            return Err(NrxError::SeriesIncomplete {
                expected: usize::from(self.total_sentences.unwrap_or_default()),
                received: self.bodies.len(),
            });
        }
        let bodies: Vec<&str> = self.bodies.values().map(String::as_str).collect();
        Ok(reassemble(&bodies))
    }

    /// Rebuild the original message text
    ///
    /// # Errors
    /// [`NrxError::SeriesIncomplete`] if sentences are missing, or an escape
    /// error if the concatenated text cannot be unescaped.
    pub fn assemble(&self) -> Result<String> {
        let escaped = self.assemble_escaped()?;
        let text = reserved::decode(&escaped)?;

        if let Some(expected) = self
            .first
            .as_ref()
            .and_then(|s| s.total_characters_in_series().ok())
        {
            let actual = text.chars().count();
            if usize::try_from(expected).ok() != Some(actual) {
                warn!(
                    "NRX series announces {} characters but carries {}",
                    expected, actual
                );
            }
        }

        debug!(
            "Assembled {} NRX sentences into {} characters",
            self.bodies.len(),
            text.len()
        );
        Ok(text)
    }
}

/// Reassemble and unescape a complete series of parsed sentences
///
/// Sentences may be in any order.
pub fn reassemble_series<I>(sentences: I) -> Result<String>
where
    I: IntoIterator<Item = NrxSentence>,
{
    let mut assembler = SeriesAssembler::new();
    for sentence in sentences {
        assembler.add_sentence(sentence)?;
    }
    assembler.assemble()
}

/// Parse NRX wire lines of one series and rebuild the message
pub fn decode_series<I, S>(lines: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut assembler = SeriesAssembler::new();
    for line in lines {
        assembler.add_sentence(NrxSentence::parse(line.as_ref())?)?;
    }
    assembler.assemble()
}

/// Map an empty field to `None`
fn optional<T>(value: Result<T>) -> Result<Option<T>> {
    match value {
        Ok(v) => Ok(Some(v)),
        Err(NrxError::DataNotAvailable { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
