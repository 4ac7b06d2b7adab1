//! Guess scoring.

use crate::types::{Code, Hint, Hints};
use tracing::instrument;

/// Scores `guess` against `secret`, one hint per guess position.
///
/// A digit matching the secret at the same position is `Correct`.
/// Otherwise it is `Misplaced` if it occurs anywhere in the secret and
/// `Wrong` if it does not. Misplaced credit is not rationed: a digit
/// present once in the secret earns `Misplaced` at every other guess
/// position where it appears.
///
/// Positions beyond the shorter of the two codes are not scored.
#[instrument(level = "debug", skip_all, fields(guess = %guess))]
pub fn evaluate(secret: &Code, guess: &Code) -> Hints {
    let secret_digits = secret.digits();
    let hints = guess
        .digits()
        .iter()
        .zip(secret_digits)
        .map(|(g, s)| {
            if g == s {
                Hint::Correct
            } else if secret.contains(*g) {
                Hint::Misplaced
            } else {
                Hint::Wrong
            }
        })
        .collect();
    Hints::new(hints)
}
