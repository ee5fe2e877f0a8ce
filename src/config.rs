//! Series encoding configuration

use crate::sentence::TalkerId;
use crate::{NrxError, Result};

/// Body budget of the first sentence used by NAVTEX receivers
pub const DEFAULT_FIRST_BUDGET: usize = 28;

/// Body budget of continuation sentences used by NAVTEX receivers
pub const DEFAULT_CONTINUATION_BUDGET: usize = 57;

/// Smallest budget that still fits a whole `^XX` escape token in a chunk
pub const MIN_BUDGET: usize = 2;

/// Configuration for turning a message into an NRX sentence series
///
/// The first sentence carries every header field and therefore has less
/// room for message text than continuation sentences, which leave header
/// fields empty. A budget is the largest zero-based index offset of a chunk,
/// so a chunk holds at most `budget + 1` characters.
///
/// # Example
///
/// ```
/// use navtex_nrx::{SeriesConfig, TalkerId};
///
/// // Recommended: use the constructor methods
/// let config = SeriesConfig::navtex();
/// assert_eq!(config.first_budget, 28);
///
/// // Or construct manually
/// let config = SeriesConfig {
///     talker: TalkerId::CR,
///     first_budget: 20,
///     continuation_budget: 40,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesConfig {
    /// Talker id stamped on every sentence
    #[cfg_attr(feature = "serde", serde(default = "default_talker", with = "talker_serde"))]
    pub talker: TalkerId,

    /// Budget of the first sentence's message body
    #[cfg_attr(feature = "serde", serde(default = "default_first_budget"))]
    pub first_budget: usize,

    /// Budget of every continuation sentence's message body
    #[cfg_attr(feature = "serde", serde(default = "default_continuation_budget"))]
    pub continuation_budget: usize,
}

#[cfg(feature = "serde")]
fn default_talker() -> TalkerId {
    TalkerId::CR
}

#[cfg(feature = "serde")]
fn default_first_budget() -> usize {
    DEFAULT_FIRST_BUDGET
}

#[cfg(feature = "serde")]
fn default_continuation_budget() -> usize {
    DEFAULT_CONTINUATION_BUDGET
}

#[cfg(feature = "serde")]
mod talker_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::sentence::TalkerId;

    pub fn serialize<S: Serializer>(talker: &TalkerId, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(talker)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TalkerId, D::Error> {
        let id = String::deserialize(deserializer)?;
        TalkerId::new(&id).map_err(serde::de::Error::custom)
    }
}

impl SeriesConfig {
    /// Create a configuration
    ///
    /// # Arguments
    ///
    /// * `talker` - Talker id of the emitting device
    /// * `first_budget` - Body budget of the first sentence
    /// * `continuation_budget` - Body budget of continuation sentences
    pub fn new(talker: TalkerId, first_budget: usize, continuation_budget: usize) -> Self {
        Self {
            talker,
            first_budget,
            continuation_budget,
        }
    }

    /// NAVTEX receiver defaults: talker `CR`, budgets 28 and 57
    pub fn navtex() -> Self {
        Self::new(TalkerId::CR, DEFAULT_FIRST_BUDGET, DEFAULT_CONTINUATION_BUDGET)
    }

    /// Use a different talker id
    pub fn with_talker(mut self, talker: TalkerId) -> Self {
        self.talker = talker;
        self
    }

    /// Check that both budgets can hold a whole escape token
    pub fn validate(&self) -> Result<()> {
        validate_budgets(self.first_budget, self.continuation_budget)
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self::navtex()
    }
}

pub(crate) fn validate_budgets(first_budget: usize, continuation_budget: usize) -> Result<()> {
    if first_budget < MIN_BUDGET || continuation_budget < MIN_BUDGET {
        return Err(NrxError::InvalidArgument(format!(
            "Budgets must be at least {} to fit an escape token, got {} and {}",
            MIN_BUDGET, first_budget, continuation_budget
        )));
    }
    Ok(())
}
