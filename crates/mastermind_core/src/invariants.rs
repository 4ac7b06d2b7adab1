//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every event.
//! The engine checks them in debug builds; each one is also testable on
//! its own.

use crate::phases::{Outcome, SessionState};
use crate::session::GameSession;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Invariant: the try count never exceeds the allowed tries.
pub struct TryCountBounded;

impl Invariant<GameSession> for TryCountBounded {
    fn holds(session: &GameSession) -> bool {
        session.try_count() <= session.tries_max()
    }

    fn description() -> &'static str {
        "Try count stays within the allowed tries"
    }
}

/// Invariant: the secret is full and the guess fits inside it.
pub struct GuessFitsSecret;

impl Invariant<GameSession> for GuessFitsSecret {
    fn holds(session: &GameSession) -> bool {
        let secret = session.secret();
        let guess = session.guess();
        secret.is_full() && guess.capacity() == secret.len() && guess.len() <= secret.len()
    }

    fn description() -> &'static str {
        "Guess capacity matches the full secret"
    }
}

/// Invariant: a no-duplicate secret never repeats a digit.
pub struct DistinctSecret;

impl Invariant<GameSession> for DistinctSecret {
    fn holds(session: &GameSession) -> bool {
        *session.allow_duplicates() || session.secret().is_distinct()
    }

    fn description() -> &'static str {
        "Secret digits are distinct when duplicates are disallowed"
    }
}

/// Invariant: state, hints and outcome agree.
pub struct StateMatchesOutcome;

impl Invariant<GameSession> for StateMatchesOutcome {
    fn holds(session: &GameSession) -> bool {
        match (session.state(), session.outcome()) {
            (SessionState::AwaitingInput, None) => session.hints().is_none(),
            (SessionState::RoundOver, Some(Outcome::Continue)) => {
                session.hints().is_some() && session.guess().is_full()
            }
            (SessionState::GameOver, Some(Outcome::Won | Outcome::Lost)) => {
                session.hints().is_some()
            }
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Session state agrees with the last outcome"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    TryCountBounded,
    GuessFitsSecret,
    DistinctSecret,
    StateMatchesOutcome,
);
