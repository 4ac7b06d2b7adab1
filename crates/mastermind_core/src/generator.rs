//! Secret generation.
//!
//! Secrets are either independent draws from the alphabet or, when
//! duplicates are disallowed, the head of a shuffled alphabet pool.

use crate::config::GameConfig;
use crate::entropy::Entropy;
use crate::types::{Code, Digit};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Swap-target range used by the Fisher-Yates shuffle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShufflePolicy {
    /// Unbiased shuffle: at step `i` the target is drawn from `[0, i]`.
    #[default]
    Standard,
    /// Firmware-compatible shuffle: the target is drawn from `[1, i]`.
    ///
    /// Index 0 is never a swap target, so the first pool element
    /// never moves. Kept for output parity with the keypad device.
    Legacy,
}

impl ShufflePolicy {
    /// Draws the swap target for step `i` (`i >= 1`).
    fn target(self, i: usize, entropy: &mut impl Entropy) -> usize {
        match self {
            ShufflePolicy::Standard => entropy.random_below(i + 1),
            ShufflePolicy::Legacy => entropy.random_below(i) + 1,
        }
    }
}

/// Shuffles `pool` in place, iterating from the last index down to 1.
#[instrument(level = "trace", skip(pool, entropy), fields(len = pool.len()))]
pub fn shuffle<T>(pool: &mut [T], policy: ShufflePolicy, entropy: &mut impl Entropy) {
    for i in (1..pool.len()).rev() {
        let z = policy.target(i, entropy);
        pool.swap(i, z);
        trace!(i, z, "Swapped pool entries");
    }
}

/// Produces secrets for a fixed game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretGenerator {
    digit_count: usize,
    secret_length: usize,
    allow_duplicates: bool,
    shuffle: ShufflePolicy,
}

impl SecretGenerator {
    /// Creates a generator for an already validated configuration.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            digit_count: *config.digit_count(),
            secret_length: *config.secret_length(),
            allow_duplicates: *config.allow_duplicates(),
            shuffle: *config.shuffle(),
        }
    }

    /// Whether generated secrets may repeat digits.
    pub fn allow_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    /// Generates a new secret.
    ///
    /// Never fails; the output is fully determined by the entropy source.
    #[instrument(skip(self, entropy), fields(allow_duplicates = self.allow_duplicates))]
    pub fn generate(&self, entropy: &mut impl Entropy) -> Code {
        let mut pool: Vec<Digit> = Digit::alphabet(self.digit_count).collect();

        let secret: Code = if self.allow_duplicates {
            (0..self.secret_length)
                .map(|_| pool[entropy.random_below(pool.len())])
                .collect()
        } else {
            shuffle(&mut pool, self.shuffle, entropy);
            pool.into_iter().take(self.secret_length).collect()
        };

        trace!(%secret, "Secret generated");
        secret
    }
}
