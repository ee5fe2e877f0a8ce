use tracing::{debug, trace};

use crate::config::validate_budgets;
use crate::reserved::{ESCAPE_PREFIX, TOKEN_LEN};
use crate::{NrxError, Result};

/// Split escaped text into chunks for the message body fields of a series
///
/// The first chunk holds at most `first_budget + 1` characters and every
/// further chunk at most `continuation_budget + 1`; the last chunk may be
/// shorter. Chunks are as long as possible, so the chunk count is minimal.
/// A chunk never ends inside a `^XX` escape token or a multi-byte character:
/// such a boundary moves back to the start of the token.
///
/// Empty input yields a single empty chunk, since a series always has at
/// least one sentence.
///
/// # Errors
/// [`NrxError::InvalidArgument`] if a budget is below
/// [`crate::config::MIN_BUDGET`] or a single character does not fit a chunk.
///
/// # Example
///
/// ```
/// use navtex_nrx::series::split;
///
/// let chunks = split("ABCDEFGH^0AIJ", 3, 3).unwrap();
/// assert_eq!(chunks, vec!["ABCD", "EFGH", "^0AI", "J"]);
/// ```
pub fn split(escaped: &str, first_budget: usize, continuation_budget: usize) -> Result<Vec<&str>> {
    validate_budgets(first_budget, continuation_budget)?;

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut limit = first_budget.saturating_add(1);

    loop {
        if escaped.len() - start <= limit {
            chunks.push(&escaped[start..]);
            break;
        }

        let max_end = start.saturating_add(limit);
        let end = chunk_end(escaped, start, max_end);
        if end == start {
            return Err(NrxError::InvalidArgument(format!(
                "Character at offset {} does not fit a chunk of {} bytes",
                start, limit
            )));
        }
        if end < max_end {
            trace!("Moved chunk boundary from {} back to {}", max_end, end);
        }

        chunks.push(&escaped[start..end]);
        start = end;
        limit = continuation_budget.saturating_add(1);
    }

    debug!(
        "Split {} escaped characters into {} chunks",
        escaped.len(),
        chunks.len()
    );
    Ok(chunks)
}

/// Concatenate escaped body fragments in order
pub fn reassemble<S: AsRef<str>>(bodies: &[S]) -> String {
    let len = bodies.iter().map(|b| b.as_ref().len()).sum();
    let mut escaped = String::with_capacity(len);
    for body in bodies {
        escaped.push_str(body.as_ref());
    }
    escaped
}

/// Last token or character boundary at or before `max_end`
fn chunk_end(text: &str, start: usize, max_end: usize) -> usize {
    let bytes = text.as_bytes();
    let mut i = start;

    while i < max_end {
        let step = if is_token_start(bytes, i) {
            TOKEN_LEN
        } else {
            text[i..].chars().next().map_or(1, char::len_utf8)
        };
        if i + step > max_end {
            break;
        }
        i += step;
    }

    i
}

fn is_token_start(bytes: &[u8], i: usize) -> bool {
    bytes[i] == ESCAPE_PREFIX
        && i + TOKEN_LEN <= bytes.len()
        && bytes[i + 1].is_ascii()
        && bytes[i + 2].is_ascii()
}
