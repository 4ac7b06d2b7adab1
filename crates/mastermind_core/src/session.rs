//! Game session state.

use crate::phases::{Outcome, SessionState};
use crate::types::{Code, Hints};
use derive_getters::Getters;

/// Everything one game tracks between key events.
///
/// Owned by [`GameEngine`](crate::GameEngine); fields change only through
/// the engine's event handling.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameSession {
    /// Lifecycle state.
    state: SessionState,
    /// Hidden code for this game.
    secret: Code,
    /// Digits entered this round.
    guess: Code,
    /// Hints for the guess evaluated this round, if any.
    hints: Option<Hints>,
    /// Guesses evaluated so far this game.
    try_count: u32,
    /// Outcome of the most recent evaluation this round.
    outcome: Option<Outcome>,
    /// Tries allowed per game.
    tries_max: u32,
    /// Whether the secret may repeat digits.
    allow_duplicates: bool,
}

impl GameSession {
    /// Starts a session around a fresh secret.
    pub(crate) fn new(secret: Code, tries_max: u32, allow_duplicates: bool) -> Self {
        Self {
            state: SessionState::AwaitingInput,
            guess: Code::with_capacity(secret.capacity()),
            secret,
            hints: None,
            try_count: 0,
            outcome: None,
            tries_max,
            allow_duplicates,
        }
    }

    /// Clears the guess and hints, keeping the secret and try count.
    pub(crate) fn reset_round(&mut self) {
        self.guess.clear();
        self.hints = None;
        self.outcome = None;
        self.state = SessionState::AwaitingInput;
    }

    pub(crate) fn guess_mut(&mut self) -> &mut Code {
        &mut self.guess
    }

    pub(crate) fn set_guess(&mut self, guess: Code) {
        self.guess = guess;
    }

    /// Records an evaluated guess.
    pub(crate) fn record(&mut self, hints: Hints, outcome: Outcome) {
        self.hints = Some(hints);
        self.outcome = Some(outcome);
        self.state = outcome.next_state();
    }

    /// Counts one more try and returns the new total.
    pub(crate) fn add_try(&mut self) -> u32 {
        self.try_count += 1;
        self.try_count
    }

    /// Tries still available.
    pub fn tries_left(&self) -> u32 {
        self.tries_max.saturating_sub(self.try_count)
    }

    #[cfg(test)]
    pub(crate) fn corrupt_try_count(&mut self, try_count: u32) {
        self.try_count = try_count;
    }

    #[cfg(test)]
    pub(crate) fn corrupt_state(&mut self, state: SessionState) {
        self.state = state;
    }
}
