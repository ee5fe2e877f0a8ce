use super::fields::Sentence;
use super::types::{NmeaDate, NmeaTime, TalkerId};
use crate::Result;

/// A sentence type with a fixed id and field layout over [`Sentence`]
///
/// This is the interface a sentence registry uses: `empty` builds a fresh
/// instance for a talker, `from_wire` parses text known to carry
/// [`TypedSentence::SENTENCE_ID`].
pub trait TypedSentence: Sized {
    /// Three character sentence id, e.g. `NRX`
    const SENTENCE_ID: &'static str;
    /// Number of data fields
    const FIELD_COUNT: usize;

    /// Create a sentence with every field empty
    fn empty(talker: TalkerId) -> Self;

    /// Wrap an already parsed sentence with matching id and arity
    fn from_sentence(sentence: Sentence) -> Result<Self>;

    fn sentence(&self) -> &Sentence;

    fn sentence_mut(&mut self) -> &mut Sentence;

    /// Parse wire text into this sentence type
    fn from_wire(wire: &str) -> Result<Self> {
        let sentence = Sentence::parse_expecting(wire, Self::SENTENCE_ID, Self::FIELD_COUNT)?;
        Self::from_sentence(sentence)
    }

    /// Serialize to wire text without line terminator
    fn to_sentence(&self) -> String {
        self.sentence().to_sentence()
    }

    /// Clear every field so the instance can be filled again
    fn reset(&mut self) {
        self.sentence_mut().reset();
    }
}

/// Sentences carrying a calendar date
pub trait DateSentence {
    fn date(&self) -> Result<NmeaDate>;

    fn set_date(&mut self, date: NmeaDate) -> Result<()>;
}

/// Sentences carrying a UTC time of day
pub trait TimeSentence {
    fn time(&self) -> Result<NmeaTime>;

    fn set_time(&mut self, time: NmeaTime) -> Result<()>;
}
