//! Game configuration and its validation.

use crate::generator::ShufflePolicy;
use crate::types::{MAX_CODE_LENGTH, MAX_DIGIT_COUNT};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default alphabet size (digits 0-9).
pub const DIGIT_COUNT: usize = 10;

/// Default secret length.
pub const SECRET_LENGTH: usize = 4;

/// Default number of tries per game.
pub const TRIES_MAX: u32 = 12;

/// Parameters of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// Alphabet size; digits are drawn from `0..digit_count`.
    digit_count: usize,
    /// Number of digits in the secret and in each guess.
    secret_length: usize,
    /// Evaluated guesses allowed before the game is lost.
    tries_max: u32,
    /// Whether the secret may repeat a digit.
    allow_duplicates: bool,
    /// Draw range used by the no-duplicate shuffle.
    shuffle: ShufflePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            digit_count: DIGIT_COUNT,
            secret_length: SECRET_LENGTH,
            tries_max: TRIES_MAX,
            allow_duplicates: false,
            shuffle: ShufflePolicy::default(),
        }
    }
}

impl GameConfig {
    /// Checks the configuration can produce a playable game.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.digit_count == 0 {
            return Err(ConfigError::NoDigits);
        }
        if self.digit_count > MAX_DIGIT_COUNT {
            return Err(ConfigError::TooManyDigits {
                digit_count: self.digit_count,
            });
        }
        if self.secret_length == 0 {
            return Err(ConfigError::EmptySecret);
        }
        if self.secret_length > MAX_CODE_LENGTH {
            return Err(ConfigError::SecretTooLong {
                secret_length: self.secret_length,
            });
        }
        if self.tries_max == 0 {
            return Err(ConfigError::NoTries);
        }
        if !self.allow_duplicates && self.secret_length > self.digit_count {
            return Err(ConfigError::NotEnoughDistinctDigits {
                secret_length: self.secret_length,
                digit_count: self.digit_count,
            });
        }
        debug!("Game config is valid");
        Ok(())
    }
}

/// Invalid game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The alphabet is empty.
    #[display("Alphabet must contain at least one digit")]
    NoDigits,

    /// The alphabet is larger than the keypad can enter.
    #[display("Alphabet of {} digits exceeds the {} digit keys", digit_count, MAX_DIGIT_COUNT)]
    TooManyDigits {
        /// Requested alphabet size.
        digit_count: usize,
    },

    /// The secret has no digits.
    #[display("Secret length must be at least 1")]
    EmptySecret,

    /// The secret does not fit a code buffer.
    #[display("Secret length {} exceeds the maximum of {}", secret_length, MAX_CODE_LENGTH)]
    SecretTooLong {
        /// Requested secret length.
        secret_length: usize,
    },

    /// No guesses would be allowed.
    #[display("At least one try is required")]
    NoTries,

    /// Duplicates are disallowed but the alphabet is too small.
    #[display(
        "Secret length {} needs duplicates with only {} digits",
        secret_length,
        digit_count
    )]
    NotEnoughDistinctDigits {
        /// Requested secret length.
        secret_length: usize,
        /// Alphabet size.
        digit_count: usize,
    },
}
