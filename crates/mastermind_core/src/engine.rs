//! Event-driven game engine.
//!
//! The engine owns one [`GameSession`] and advances it one key event at
//! a time:
//!
//! - `AwaitingInput` collects digits until the guess is full, then
//!   evaluates it and moves to `RoundOver` or `GameOver`.
//! - New-round clears the guess; from `GameOver` it starts a new game.
//! - New-game always regenerates the secret and resets the try count.
//!
//! Anything else is ignored without touching the session.

use crate::config::{ConfigError, GameConfig};
use crate::entropy::Entropy;
use crate::event::KeyEvent;
use crate::generator::SecretGenerator;
use crate::phases::{Outcome, SessionState};
use crate::rules;
use crate::session::GameSession;
use crate::snapshot::Snapshot;
use crate::types::{Code, Digit, Hints};
use derive_new::new;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Hints and outcome of one evaluated guess.
#[derive(Debug, Clone, PartialEq, Eq, new, Serialize)]
pub struct Evaluation {
    /// Per-position hints.
    pub hints: Hints,
    /// Whether the game continues, was won or was lost.
    pub outcome: Outcome,
}

/// What a processed event did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Event had no effect.
    Ignored,
    /// Digit appended; the guess is not yet complete.
    DigitAccepted,
    /// The guess was completed and evaluated.
    Evaluated(Evaluation),
    /// Guess cleared for the next round.
    RoundStarted,
    /// Fresh secret drawn and try count reset.
    GameStarted,
}

/// Mastermind engine over an entropy source.
#[derive(Debug)]
pub struct GameEngine<E> {
    config: GameConfig,
    generator: SecretGenerator,
    entropy: E,
    session: GameSession,
}

impl<E: Entropy> GameEngine<E> {
    /// Validates `config` and starts the first game.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration cannot produce a game.
    #[instrument(skip(entropy))]
    pub fn new(config: GameConfig, mut entropy: E) -> Result<Self, ConfigError> {
        config.validate()?;
        let generator = SecretGenerator::new(&config);
        let session = Self::fresh_session(&config, &generator, &mut entropy);
        info!(tries_max = config.tries_max(), "Game engine ready");
        Ok(Self {
            config,
            generator,
            entropy,
            session,
        })
    }

    /// The configuration in effect.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read access to the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Current view for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.session)
    }

    /// Processes one key event to completion.
    #[instrument(skip(self), fields(state = %self.session.state()))]
    pub fn handle(&mut self, event: KeyEvent) -> Transition {
        let transition = match (*self.session.state(), event) {
            (_, KeyEvent::NewGame) | (SessionState::GameOver, KeyEvent::NewRound) => {
                self.new_game();
                Transition::GameStarted
            }
            (_, KeyEvent::NewRound) => {
                self.new_round();
                Transition::RoundStarted
            }
            (SessionState::AwaitingInput, KeyEvent::Digit(digit)) => self.press_digit(digit),
            _ => {
                debug!(?event, "Key ignored");
                Transition::Ignored
            }
        };

        self.check_invariants();
        transition
    }

    /// Processes a polled key, where `None` means no key was pressed.
    pub fn poll(&mut self, event: Option<KeyEvent>) -> Transition {
        match event {
            Some(event) => self.handle(event),
            None => Transition::Ignored,
        }
    }

    /// Evaluates a completed guess in one step.
    ///
    /// Returns `None` and leaves the session untouched unless the engine is
    /// awaiting input and `guess` has exactly the secret's length, using
    /// only digits from the configured alphabet.
    #[instrument(skip(self), fields(guess = %guess))]
    pub fn submit_guess(&mut self, guess: Code) -> Option<Evaluation> {
        let digit_count = *self.config.digit_count();
        if !self.session.state().accepts_digits()
            || !guess.is_full()
            || guess.len() != self.session.secret().len()
            || guess.digits().iter().any(|d| usize::from(d.value()) >= digit_count)
        {
            debug!("Guess submission ignored");
            return None;
        }
        self.session.set_guess(guess);
        let evaluation = self.evaluate_guess();
        self.check_invariants();
        Some(evaluation)
    }

    /// Draws a new secret and resets the session.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.session = Self::fresh_session(&self.config, &self.generator, &mut self.entropy);
        info!("New game started");
    }

    /// Clears the guess and hints for the next round.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) {
        self.session.reset_round();
        info!(
            try_count = self.session.try_count(),
            tries_left = self.session.tries_left(),
            "New round started"
        );
    }

    fn fresh_session(config: &GameConfig, generator: &SecretGenerator, entropy: &mut E) -> GameSession {
        let secret = generator.generate(entropy);
        GameSession::new(secret, *config.tries_max(), generator.allow_duplicates())
    }

    fn press_digit(&mut self, digit: Digit) -> Transition {
        if self.session.guess_mut().push(digit).is_err() {
            debug!(%digit, "Guess already full");
            return Transition::Ignored;
        }
        debug!(%digit, guess = %self.session.guess(), "Digit accepted");

        if self.session.guess().is_full() {
            Transition::Evaluated(self.evaluate_guess())
        } else {
            Transition::DigitAccepted
        }
    }

    fn evaluate_guess(&mut self) -> Evaluation {
        let hints = rules::evaluate(self.session.secret(), self.session.guess());
        let try_count = self.session.add_try();
        let outcome = rules::judge(&hints, try_count, *self.session.tries_max());
        info!(
            guess = %self.session.guess(),
            hints = %hints,
            try_count,
            %outcome,
            "Guess evaluated"
        );
        self.session.record(hints.clone(), outcome);
        Evaluation::new(hints, outcome)
    }

    /// Panics in debug builds if the session breaks an invariant.
    fn check_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            use crate::invariants::{InvariantSet, SessionInvariants};

            if let Err(violations) = SessionInvariants::check_all(&self.session) {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                panic!("Session invariant violated: {}", descriptions);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::RandEntropy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine() -> GameEngine<RandEntropy<StdRng>> {
        GameEngine::new(GameConfig::default(), RandEntropy::new(StdRng::seed_from_u64(1))).unwrap()
    }

    fn digit(c: char) -> KeyEvent {
        KeyEvent::Digit(Digit::from_char(c).unwrap())
    }

    #[test]
    fn test_starts_awaiting_input() {
        let engine = engine();
        let snapshot = engine.snapshot();
        assert_eq!(*snapshot.state(), SessionState::AwaitingInput);
        assert_eq!(*snapshot.try_count(), 0);
        assert!(snapshot.guess().is_empty());
        assert!(snapshot.revealed().is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::default().with_digit_count(3);
        let result = GameEngine::new(config, RandEntropy::new(StdRng::seed_from_u64(1)));
        assert!(matches!(result, Err(ConfigError::NotEnoughDistinctDigits { .. })));
    }

    #[test]
    fn test_digits_accumulate_until_full() {
        let mut engine = engine();
        assert_eq!(engine.handle(digit('1')), Transition::DigitAccepted);
        assert_eq!(engine.handle(digit('2')), Transition::DigitAccepted);
        assert_eq!(engine.handle(digit('3')), Transition::DigitAccepted);
        assert!(matches!(engine.handle(digit('4')), Transition::Evaluated(_)));
        assert_eq!(*engine.session().try_count(), 1);
    }

    #[test]
    fn test_digit_in_round_over_ignored() {
        let mut engine = engine();
        let secret = *engine.session().secret();
        // Any guess differing from the secret in the first digit.
        let first = (secret.digits()[0].value() + 1) % 10;
        let guess = Code::parse(&format!("{}{}", first, "000")).unwrap();
        let evaluation = engine.submit_guess(guess).unwrap();
        assert_eq!(evaluation.outcome, Outcome::Continue);

        let before = engine.snapshot();
        assert_eq!(engine.handle(digit('5')), Transition::Ignored);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_submit_requires_complete_guess() {
        let mut engine = engine();
        assert!(engine.submit_guess(Code::parse("12").unwrap()).is_none());
        assert_eq!(*engine.session().try_count(), 0);
    }

    #[test]
    fn test_submit_rejects_digits_outside_alphabet() {
        let config = GameConfig::default().with_digit_count(6);
        let mut engine =
            GameEngine::new(config, RandEntropy::new(StdRng::seed_from_u64(5))).unwrap();
        let before = engine.snapshot();

        assert!(engine.submit_guess(Code::parse("9999").unwrap()).is_none());
        assert!(engine.submit_guess(Code::parse("0126").unwrap()).is_none());
        assert_eq!(engine.snapshot(), before);

        assert!(engine.submit_guess(Code::parse("0125").unwrap()).is_some());
        assert_eq!(*engine.session().try_count(), 1);
    }

    #[test]
    fn test_poll_without_key_is_ignored() {
        let mut engine = engine();
        let before = engine.snapshot();
        assert_eq!(engine.poll(None), Transition::Ignored);
        assert_eq!(engine.snapshot(), before);
    }
}
