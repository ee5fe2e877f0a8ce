#![doc = include_str!("../README.md")]

pub mod config;
mod error;
pub mod nrx;
pub mod reserved;
pub mod sentence;
pub mod series;


pub use config::SeriesConfig;
pub use error::{NrxError, Result};
pub use nrx::{MessageCode, NrxSentence};
pub use reserved::{decode, encode};
pub use sentence::{
    DataStatus, DateSentence, NmeaDate, NmeaTime, Sentence, TalkerId, TimeSentence, TypedSentence,
};
pub use series::{
    SeriesAssembler, SeriesHeader, decode_series, encode_series, reassemble, reassemble_series,
    split,
};
