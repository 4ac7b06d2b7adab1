//! Win and loss detection.

use crate::phases::Outcome;
use crate::types::{Hint, Hints};
use tracing::instrument;

/// True if every hint is `Correct`.
pub fn is_solved(hints: &Hints) -> bool {
    !hints.is_empty() && hints.as_slice().iter().all(|h| *h == Hint::Correct)
}

/// Decides the outcome after `try_count` evaluated guesses.
///
/// A solved guess wins even on the final try.
#[instrument(level = "debug", skip(hints), fields(hints = %hints))]
pub fn judge(hints: &Hints, try_count: u32, tries_max: u32) -> Outcome {
    if is_solved(hints) {
        Outcome::Won
    } else if try_count >= tries_max {
        Outcome::Lost
    } else {
        Outcome::Continue
    }
}
