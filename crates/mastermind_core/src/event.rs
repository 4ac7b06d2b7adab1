//! Key events and keypad decoding.
//!
//! Key events are domain inputs, not side effects. The engine decides
//! what each one means in its current state.

use crate::types::Digit;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A discrete input from the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// A digit key from the game alphabet.
    Digit(Digit),
    /// Clear the guess and start the next round.
    NewRound,
    /// Discard the secret and start over.
    NewGame,
    /// Any other key. Ignored by the engine.
    Other(char),
}

/// Assignment of control symbols to keys.
///
/// Defaults follow the 4x4 keypad layout `123A 456B 789C *0#D`:
/// `#` starts the next round and `*` starts a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new, Serialize, Deserialize)]
#[serde(default)]
pub struct Keymap {
    /// Key that starts a new round.
    pub new_round: char,
    /// Key that starts a new game.
    pub new_game: char,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            new_round: '#',
            new_game: '*',
        }
    }
}

impl Keymap {
    /// Checks that both control keys are usable.
    ///
    /// # Errors
    ///
    /// Returns [`KeymapError`] if a control key is a digit or both
    /// controls share a key.
    #[instrument]
    pub fn validate(&self) -> Result<(), KeymapError> {
        for key in [self.new_round, self.new_game] {
            if key.is_ascii_digit() {
                return Err(KeymapError::DigitControl { key });
            }
        }
        if self.new_round == self.new_game {
            return Err(KeymapError::SharedControl {
                key: self.new_round,
            });
        }
        Ok(())
    }

    /// Decodes a key for an alphabet of `digit_count` digits.
    ///
    /// Digit keys outside the alphabet decode to [`KeyEvent::Other`].
    /// Control keys take precedence over digits.
    #[instrument(level = "trace")]
    pub fn decode(&self, key: char, digit_count: usize) -> KeyEvent {
        if key == self.new_game {
            return KeyEvent::NewGame;
        }
        if key == self.new_round {
            return KeyEvent::NewRound;
        }
        match Digit::from_char(key) {
            Some(digit) if usize::from(digit.value()) < digit_count => KeyEvent::Digit(digit),
            _ => KeyEvent::Other(key),
        }
    }
}

/// Unusable control key assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum KeymapError {
    /// A control is bound to a digit key, which could then never be entered.
    #[display("Control key '{}' is a digit", key)]
    DigitControl {
        /// Offending key.
        key: char,
    },

    /// New-round and new-game are bound to the same key.
    #[display("Key '{}' is bound to both new round and new game", key)]
    SharedControl {
        /// Shared key.
        key: char,
    },
}
