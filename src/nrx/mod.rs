//! NRX - NAVTEX received message sentence
//!
//! NAVTEX receivers relay each received message as a series of NRX
//! sentences. The message text is escaped with [`crate::reserved`] and
//! split over the message body fields of the series.

mod sentence;
mod types;

pub use sentence::{MAX_SENTENCES, NrxSentence};
pub use types::MessageCode;
