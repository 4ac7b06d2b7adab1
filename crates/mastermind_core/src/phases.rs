//! Session states and round outcomes.

use serde::Serialize;

/// Lifecycle state of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    /// Accepting guess digits.
    #[default]
    AwaitingInput,
    /// A guess was evaluated, unsolved, with tries remaining.
    RoundOver,
    /// Secret solved or tries exhausted. Only new-round/new-game leave it.
    GameOver,
}

impl SessionState {
    /// True if digit keys are accepted in this state.
    pub fn accepts_digits(self) -> bool {
        matches!(self, SessionState::AwaitingInput)
    }
}

/// Result of evaluating one completed guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// Unsolved, tries remain.
    Continue,
    /// Every position correct.
    Won,
    /// Tries exhausted without solving.
    Lost,
}

impl Outcome {
    /// True if this outcome ends the game.
    pub fn is_final(self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    /// State the session enters after this outcome.
    pub fn next_state(self) -> SessionState {
        if self.is_final() {
            SessionState::GameOver
        } else {
            SessionState::RoundOver
        }
    }

    /// Message shown to the player.
    pub fn message(self) -> Message {
        match self {
            Outcome::Continue => Message::NextTry,
            Outcome::Won => Message::Win,
            Outcome::Lost => Message::Lose,
        }
    }
}

/// Status message for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Message {
    /// The secret was solved.
    #[strum(serialize = "WIN")]
    Win,
    /// The game was lost.
    #[strum(serialize = "LOSE")]
    Lose,
    /// Another guess may be entered after a new round.
    #[strum(serialize = "NEXT-TRY")]
    #[serde(rename = "NEXT-TRY")]
    NextTry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_drives_state() {
        assert_eq!(Outcome::Continue.next_state(), SessionState::RoundOver);
        assert_eq!(Outcome::Won.next_state(), SessionState::GameOver);
        assert_eq!(Outcome::Lost.next_state(), SessionState::GameOver);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(SessionState::AwaitingInput.to_string(), "AWAITING_INPUT");
        assert_eq!(Outcome::Won.to_string(), "WON");
        assert_eq!(Message::NextTry.to_string(), "NEXT-TRY");
    }

    #[test]
    fn test_message_json_matches_display() {
        for message in [Message::Win, Message::Lose, Message::NextTry] {
            let json = serde_json::to_value(message).unwrap();
            assert_eq!(json, message.to_string());
        }
    }
}
