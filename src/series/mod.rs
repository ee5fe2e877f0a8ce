//! Multi-sentence NRX message series
//!
//! A NAVTEX message longer than one sentence's body budget travels as a
//! series: the escaped text is split into chunks, one per sentence, and
//! concatenated again on reception.

mod assembler;
mod encode;
mod split;

pub use assembler::{SeriesAssembler, decode_series, reassemble_series};
pub use encode::{SeriesHeader, encode_series};
pub use split::{reassemble, split};
