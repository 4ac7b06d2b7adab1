//! Mastermind game logic for a keypad-and-display console.
//!
//! The player guesses a hidden code of digits one key at a time. Each
//! completed guess is scored per position and the game ends on a solve
//! or when the tries run out.
//!
//! # Architecture
//!
//! - **Generator**: draws secrets from an [`Entropy`] source
//! - **Rules**: pure scoring and win/loss judgement
//! - **Engine**: the round/game state machine driven by [`KeyEvent`]s
//! - **Snapshot**: read-only view for whatever draws the display
//!
//! # Example
//!
//! ```
//! use mastermind_core::{GameConfig, GameEngine, Keymap, RandEntropy, SessionState};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let entropy = RandEntropy::new(StdRng::seed_from_u64(7));
//! let mut engine = GameEngine::new(GameConfig::default(), entropy)?;
//! let keymap = Keymap::default();
//!
//! for key in "1234".chars() {
//!     engine.handle(keymap.decode(key, 10));
//! }
//! assert_eq!(*engine.snapshot().try_count(), 1);
//! assert_ne!(*engine.snapshot().state(), SessionState::AwaitingInput);
//! # Ok::<(), mastermind_core::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod engine;
mod entropy;
mod event;
mod generator;
mod phases;
mod session;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

pub use config::{ConfigError, DIGIT_COUNT, GameConfig, SECRET_LENGTH, TRIES_MAX};
pub use engine::{Evaluation, GameEngine, Transition};
pub use entropy::{Entropy, RandEntropy};
pub use event::{KeyEvent, Keymap, KeymapError};
pub use generator::{SecretGenerator, ShufflePolicy, shuffle};
pub use phases::{Message, Outcome, SessionState};
pub use session::GameSession;
pub use snapshot::Snapshot;
pub use types::{Code, CodeError, Digit, Hint, Hints, MAX_CODE_LENGTH, MAX_DIGIT_COUNT};
