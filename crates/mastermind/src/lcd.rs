//! 16x2 character display rendering.
//!
//! Turns a [`Snapshot`] into the two fixed-width lines the device shows.
//! Layout only; the engine never sees any of this.

use mastermind_core::{Keymap, Message, Snapshot};
use tracing::instrument;

/// Display width in characters.
pub const LCD_COLUMNS: usize = 16;

/// Two lines of exactly [`LCD_COLUMNS`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcdFrame {
    lines: [String; 2],
}

impl LcdFrame {
    /// Top line: guess and try counter.
    pub fn top(&self) -> &str {
        &self.lines[0]
    }

    /// Bottom line: hints and status.
    pub fn bottom(&self) -> &str {
        &self.lines[1]
    }

    /// Both lines.
    pub fn lines(&self) -> &[String; 2] {
        &self.lines
    }
}

impl std::fmt::Display for LcdFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.top(), self.bottom())
    }
}

/// Renders snapshots for a given key assignment.
#[derive(Debug, Clone, Copy)]
pub struct Lcd {
    keymap: Keymap,
}

impl Lcd {
    /// Creates a renderer that names the configured control keys.
    pub fn new(keymap: Keymap) -> Self {
        Self { keymap }
    }

    /// Renders one frame.
    #[instrument(level = "trace", skip(self))]
    pub fn render(&self, snapshot: &Snapshot) -> LcdFrame {
        let guess = snapshot.guess();
        let mut entered = guess.to_string();
        entered.extend(std::iter::repeat_n('_', guess.capacity() - guess.len()));
        let counter = format!("T{:02}/{:02}", snapshot.try_count(), snapshot.tries_max());
        let top = fit(&entered, &counter);

        let bottom = match snapshot.hints() {
            Some(hints) => {
                let status = match snapshot.message() {
                    Some(Message::NextTry) => format!("NEXT {}", self.keymap.new_round),
                    Some(Message::Win) => format!("WIN! {}", self.keymap.new_game),
                    Some(Message::Lose) => match snapshot.revealed() {
                        Some(secret) => format!("LOSE {}", secret),
                        None => "LOSE".to_string(),
                    },
                    None => String::new(),
                };
                fit(&hints.to_string(), &status)
            }
            None => fit("ENTER CODE", ""),
        };

        LcdFrame {
            lines: [top, bottom],
        }
    }
}

/// Left-aligns `left` and right-aligns `right` on one display line.
///
/// If both do not fit, `left` wins and the line is cut at the edge.
fn fit(left: &str, right: &str) -> String {
    let used = left.chars().count() + right.chars().count();
    let line = if used < LCD_COLUMNS {
        format!("{}{}{}", left, " ".repeat(LCD_COLUMNS - used), right)
    } else {
        format!("{} {}", left, right)
    };
    let mut line: String = line.chars().take(LCD_COLUMNS).collect();
    let len = line.chars().count();
    line.extend(std::iter::repeat_n(' ', LCD_COLUMNS - len));
    line
}
