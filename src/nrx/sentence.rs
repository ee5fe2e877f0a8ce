use std::fmt;

use super::types::MessageCode;
use crate::reserved::{self, ESCAPE_PREFIX};
use crate::sentence::{
    DataStatus, DateSentence, NmeaDate, NmeaTime, Sentence, TalkerId, TimeSentence, TypedSentence,
};
use crate::{NrxError, Result};

// Field indices
const NUMBER_OF_SENTENCES: usize = 0;
const SENTENCE_NUMBER: usize = 1;
const SEQUENTIAL_MESSAGE_ID: usize = 2;
const NAVTEX_MESSAGE_CODE: usize = 3;
const FREQUENCY_TABLE_INDEX: usize = 4;
const UTC_OF_RECEIPT: usize = 5;
const DAY: usize = 6;
const MONTH: usize = 7;
const YEAR: usize = 8;
const TOTAL_CHARACTERS_IN_SERIES: usize = 9;
const TOTAL_BAD_CHARACTERS: usize = 10;
const DATA_STATUS: usize = 11;
const MESSAGE_BODY: usize = 12;

/// Largest sentence count representable in the 3 digit wire fields
pub const MAX_SENTENCES: u16 = 999;

/// NRX - NAVTEX received message
///
/// One sentence of a series carrying a NAVTEX message. The first sentence of
/// a series normally carries every field; continuation sentences only carry
/// the series counters, the sequential id and the next piece of the body.
///
/// The message body holds escaped text (see [`crate::reserved`]).
///
/// # Example
///
/// ```
/// use navtex_nrx::{DataStatus, NrxSentence, TalkerId, TypedSentence};
///
/// let mut nrx = NrxSentence::new(TalkerId::CR);
/// assert_eq!(nrx.to_sentence(), "$CRNRX,,,,,,,,,,,,,*79");
///
/// nrx.set_number_of_sentences(1).unwrap();
/// nrx.set_sentence_number(1).unwrap();
/// nrx.set_status(DataStatus::Active).unwrap();
/// nrx.set_message_body("HELLO^2C WORLD").unwrap();
///
/// let parsed = NrxSentence::parse(&nrx.to_sentence()).unwrap();
/// assert_eq!(parsed.message_body().unwrap(), "HELLO^2C WORLD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NrxSentence {
    sentence: Sentence,
}

impl NrxSentence {
    /// Create an NRX sentence with all fields empty
    pub fn new(talker: TalkerId) -> Self {
        Self::empty(talker)
    }

    /// Parse NRX wire text
    pub fn parse(wire: &str) -> Result<Self> {
        Self::from_wire(wire)
    }

    pub fn number_of_sentences(&self) -> Result<u16> {
        self.u16_field(NUMBER_OF_SENTENCES)
    }

    pub fn set_number_of_sentences(&mut self, count: u16) -> Result<()> {
        check_sentence_count("Number of sentences", count)?;
        self.sentence
            .set_int_field(NUMBER_OF_SENTENCES, i64::from(count), 3)
    }

    pub fn sentence_number(&self) -> Result<u16> {
        self.u16_field(SENTENCE_NUMBER)
    }

    pub fn set_sentence_number(&mut self, number: u16) -> Result<()> {
        check_sentence_count("Sentence number", number)?;
        self.sentence
            .set_int_field(SENTENCE_NUMBER, i64::from(number), 3)
    }

    /// Sequential message identifier, 0-99
    pub fn sequential_id(&self) -> Result<u8> {
        self.u8_field(SEQUENTIAL_MESSAGE_ID)
    }

    pub fn set_sequential_id(&mut self, id: u8) -> Result<()> {
        if id > 99 {
            return Err(NrxError::InvalidArgument(format!(
                "Sequential id need to be from 0 to 99, got {}",
                id
            )));
        }
        self.sentence
            .set_int_field(SEQUENTIAL_MESSAGE_ID, i64::from(id), 2)
    }

    pub fn message_code(&self) -> Result<MessageCode> {
        self.sentence.field(NAVTEX_MESSAGE_CODE)?.parse()
    }

    pub fn set_message_code(&mut self, code: MessageCode) -> Result<()> {
        self.sentence
            .set_field(NAVTEX_MESSAGE_CODE, code.to_string())
    }

    /// Index into the receiver frequency table, 0-9
    pub fn frequency_table_index(&self) -> Result<u8> {
        self.u8_field(FREQUENCY_TABLE_INDEX)
    }

    pub fn set_frequency_table_index(&mut self, index: u8) -> Result<()> {
        if index > 9 {
            return Err(NrxError::InvalidArgument(format!(
                "Frequency table index need to be from 0 to 9, got {}",
                index
            )));
        }
        self.sentence
            .set_int_field(FREQUENCY_TABLE_INDEX, i64::from(index), 0)
    }

    pub fn total_characters_in_series(&self) -> Result<u32> {
        self.u32_field(TOTAL_CHARACTERS_IN_SERIES)
    }

    pub fn set_total_characters_in_series(&mut self, total: u32) -> Result<()> {
        self.sentence
            .set_int_field(TOTAL_CHARACTERS_IN_SERIES, i64::from(total), 0)
    }

    pub fn total_bad_characters(&self) -> Result<u32> {
        self.u32_field(TOTAL_BAD_CHARACTERS)
    }

    pub fn set_total_bad_characters(&mut self, total: u32) -> Result<()> {
        self.sentence
            .set_int_field(TOTAL_BAD_CHARACTERS, i64::from(total), 0)
    }

    pub fn status(&self) -> Result<DataStatus> {
        DataStatus::from_char(self.sentence.char_field(DATA_STATUS)?)
    }

    pub fn set_status(&mut self, status: DataStatus) -> Result<()> {
        self.sentence.set_char_field(DATA_STATUS, status.to_char())
    }

    /// Escaped body fragment carried by this sentence
    pub fn message_body(&self) -> Result<&str> {
        self.sentence.field(MESSAGE_BODY)
    }

    /// Set the escaped body fragment
    ///
    /// # Errors
    /// [`NrxError::InvalidArgument`] if the text contains a reserved
    /// character that has not been escaped.
    pub fn set_message_body(&mut self, body: &str) -> Result<()> {
        if let Some(bad) = body
            .bytes()
            .find(|&b| b != ESCAPE_PREFIX && reserved::is_reserved(b))
        {
            return Err(NrxError::InvalidArgument(format!(
                "Message body contains unescaped reserved character 0x{:02X}",
                bad
            )));
        }
        self.sentence.set_field(MESSAGE_BODY, body)
    }

    /// Check if the body field holds text
    pub fn has_message_body(&self) -> bool {
        self.sentence.has_value(MESSAGE_BODY)
    }

    fn u8_field(&self, index: usize) -> Result<u8> {
        let value = self.sentence.int_field(index)?;
        u8::try_from(value).map_err(|_| out_of_range(index, value))
    }

    fn u16_field(&self, index: usize) -> Result<u16> {
        let value = self.sentence.int_field(index)?;
        u16::try_from(value).map_err(|_| out_of_range(index, value))
    }

    fn u32_field(&self, index: usize) -> Result<u32> {
        let value = self.sentence.int_field(index)?;
        u32::try_from(value).map_err(|_| out_of_range(index, value))
    }
}

impl TypedSentence for NrxSentence {
    const SENTENCE_ID: &'static str = "NRX";
    const FIELD_COUNT: usize = 13;

    fn empty(talker: TalkerId) -> Self {
        Self {
            sentence: Sentence::with_fields(
                talker,
                Self::SENTENCE_ID,
                vec![String::new(); Self::FIELD_COUNT],
            ),
        }
    }

    fn from_sentence(sentence: Sentence) -> Result<Self> {
        if sentence.sentence_id() != Self::SENTENCE_ID
            || sentence.field_count() != Self::FIELD_COUNT
        {
            return Err(NrxError::Parse(format!(
                "Not an NRX sentence: {} with {} fields",
                sentence.sentence_id(),
                sentence.field_count()
            )));
        }
        Ok(Self { sentence })
    }

    fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    fn sentence_mut(&mut self) -> &mut Sentence {
        &mut self.sentence
    }
}

impl DateSentence for NrxSentence {
    fn date(&self) -> Result<NmeaDate> {
        let year_text = self.sentence.field(YEAR)?;
        let year = self.u16_field(YEAR)?;
        let year = if year_text.len() <= 2 {
            NmeaDate::expand_year(year)
        } else {
            year
        };
        let month = self.u8_field(MONTH)?;
        let day = self.u8_field(DAY)?;
        NmeaDate::new(year, month, day).map_err(|e| NrxError::Parse(e.to_string()))
    }

    fn set_date(&mut self, date: NmeaDate) -> Result<()> {
        self.sentence.set_int_field(YEAR, i64::from(date.year()), 4)?;
        self.sentence.set_int_field(MONTH, i64::from(date.month()), 2)?;
        self.sentence.set_int_field(DAY, i64::from(date.day()), 2)
    }
}

impl TimeSentence for NrxSentence {
    fn time(&self) -> Result<NmeaTime> {
        self.sentence.field(UTC_OF_RECEIPT)?.parse()
    }

    fn set_time(&mut self, time: NmeaTime) -> Result<()> {
        self.sentence.set_field(UTC_OF_RECEIPT, time.to_string())
    }
}

impl fmt::Display for NrxSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.sentence, f)
    }
}

fn check_sentence_count(what: &str, value: u16) -> Result<()> {
    if value > MAX_SENTENCES {
        return Err(NrxError::InvalidArgument(format!(
            "{} does not fit 3 digits: {}",
            what, value
        )));
    }
    Ok(())
}

fn out_of_range(index: usize, value: i64) -> NrxError {
    NrxError::Parse(format!("Field {} value {} out of range", index, value))
}
