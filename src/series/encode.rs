use tracing::debug;

use super::split::split;
use crate::config::SeriesConfig;
use crate::nrx::{MAX_SENTENCES, MessageCode, NrxSentence};
use crate::reserved;
use crate::sentence::{DataStatus, DateSentence, NmeaDate, NmeaTime, TimeSentence, TypedSentence};
use crate::{NrxError, Result};

/// Header fields sent once, in the first sentence of a series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesHeader {
    /// Sequential message id (0-99), repeated on every sentence
    pub sequential_id: u8,
    /// NAVTEX message code
    pub message_code: MessageCode,
    /// Receiver frequency table index (0-9)
    pub frequency_table_index: u8,
    /// UTC time the message was received
    pub time: NmeaTime,
    /// Date the message was received
    pub date: NmeaDate,
    /// Characters received with errors
    pub total_bad_characters: u32,
    /// Validity of the received data
    pub status: DataStatus,
}

impl SeriesHeader {
    /// Header with frequency index 0, no bad characters and status valid
    pub fn new(sequential_id: u8, message_code: MessageCode, time: NmeaTime, date: NmeaDate) -> Self {
        Self {
            sequential_id,
            message_code,
            frequency_table_index: 0,
            time,
            date,
            total_bad_characters: 0,
            status: DataStatus::Active,
        }
    }

    pub fn with_frequency_table_index(mut self, index: u8) -> Self {
        self.frequency_table_index = index;
        self
    }

    pub fn with_total_bad_characters(mut self, total: u32) -> Self {
        self.total_bad_characters = total;
        self
    }

    pub fn with_status(mut self, status: DataStatus) -> Self {
        self.status = status;
        self
    }
}

/// Encode a message as a series of NRX sentences
///
/// The text is escaped, split by the budgets of `config` and written into a
/// single reused [`NrxSentence`]. Header fields appear in the first sentence
/// only; every sentence carries the sentence count, its number and the
/// sequential id. Returns wire text without line terminators.
///
/// # Errors
/// [`NrxError::InvalidArgument`] if the configuration or a header field is
/// invalid, or the message needs more than 999 sentences.
///
/// # Example
///
/// ```
/// use navtex_nrx::{NmeaDate, NmeaTime, SeriesConfig, SeriesHeader, decode_series, encode_series};
///
/// let header = SeriesHeader::new(
///     0,
///     "UA98".parse().unwrap(),
///     NmeaTime::new(10, 23, 8.0).unwrap(),
///     NmeaDate::new(2018, 3, 1).unwrap(),
/// );
/// let message = "GULF OF FINLAND\nSINCE 01 MAR 18\nNO ICEBREAKER SERVICE FOR TUGS AND BARGES";
///
/// let lines = encode_series(message, &header, &SeriesConfig::navtex()).unwrap();
/// assert_eq!(lines.len(), 2);
/// assert_eq!(decode_series(&lines).unwrap(), message);
/// ```
pub fn encode_series(text: &str, header: &SeriesHeader, config: &SeriesConfig) -> Result<Vec<String>> {
    config.validate()?;

    let total_characters = u32::try_from(text.chars().count()).map_err(|_| {
        NrxError::InvalidArgument("Message too long for the character count field".to_string())
    })?;

    let escaped = reserved::encode(text);
    let chunks = split(&escaped, config.first_budget, config.continuation_budget)?;
    let count = u16::try_from(chunks.len())
        .ok()
        .filter(|&n| n <= MAX_SENTENCES)
        .ok_or_else(|| {
            NrxError::InvalidArgument(format!(
                "Message needs {} sentences, at most {} are allowed",
                chunks.len(),
                MAX_SENTENCES
            ))
        })?;

    let mut nrx = NrxSentence::new(config.talker);
    let mut lines = Vec::with_capacity(chunks.len());

    for (i, chunk) in chunks.iter().enumerate() {
        nrx.reset();
        if i == 0 {
            nrx.set_message_code(header.message_code)?;
            nrx.set_frequency_table_index(header.frequency_table_index)?;
            nrx.set_time(header.time)?;
            nrx.set_date(header.date)?;
            nrx.set_total_characters_in_series(total_characters)?;
            nrx.set_total_bad_characters(header.total_bad_characters)?;
            nrx.set_status(header.status)?;
        }
        nrx.set_number_of_sentences(count)?;
        // i < count <= 999
        nrx.set_sentence_number(i as u16 + 1)?;
        nrx.set_sequential_id(header.sequential_id)?;
        nrx.set_message_body(chunk)?;
        lines.push(nrx.to_sentence());
    }

    debug!(
        "Encoded {} characters ({} escaped) as {} NRX sentences, message {}",
        total_characters,
        escaped.len(),
        count,
        header.message_code
    );
    Ok(lines)
}
