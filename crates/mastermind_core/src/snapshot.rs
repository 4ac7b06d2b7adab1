//! Read-only view of a session for presentation.

use crate::phases::{Message, SessionState};
use crate::session::GameSession;
use crate::types::{Code, Hints};
use derive_getters::Getters;
use serde::Serialize;

/// What the display needs after an event.
///
/// The secret is only revealed once the game is over.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Snapshot {
    state: SessionState,
    guess: Code,
    hints: Option<Hints>,
    try_count: u32,
    tries_max: u32,
    message: Option<Message>,
    revealed: Option<Code>,
}

impl From<&GameSession> for Snapshot {
    fn from(session: &GameSession) -> Self {
        let state = *session.state();
        Self {
            state,
            guess: *session.guess(),
            hints: session.hints().clone(),
            try_count: *session.try_count(),
            tries_max: *session.tries_max(),
            message: session.outcome().map(|o| o.message()),
            revealed: (state == SessionState::GameOver).then(|| *session.secret()),
        }
    }
}
