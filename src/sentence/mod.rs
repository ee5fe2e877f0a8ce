//! Generic NMEA 0183 style sentences
//!
//! A sentence is framed as `$TTSSS,f1,...,fn*CC`: talker id `TT`, sentence id
//! `SSS`, comma separated fields and an XOR checksum `CC`. Sentence types such
//! as NRX are thin typed layers over [`Sentence`].

pub mod checksum;
mod fields;
mod parse;
mod traits;
pub mod types;

pub use fields::Sentence;
pub use traits::{DateSentence, TimeSentence, TypedSentence};
pub use types::{DataStatus, NmeaDate, NmeaTime, TalkerId};
