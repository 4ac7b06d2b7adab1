//! Terminal front-end emulating the keypad and display.

use crate::app::App;
use crate::lcd::{LCD_COLUMNS, LcdFrame};
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mastermind_core::{Entropy, Keymap};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Keypad legend, row by row.
const KEYPAD: [&str; 4] = ["1 2 3 A", "4 5 6 B", "7 8 9 C", "* 0 # D"];

/// Raw mode and alternate screen. Restores the terminal on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        // From here on, any early return restores the terminal.
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

/// What a terminal key means to the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Quit,
    Key(char),
    Unmapped,
}

impl From<KeyCode> for Input {
    /// Characters pass through unchanged so control keys match the keymap exactly.
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Esc => Input::Quit,
            KeyCode::Char(c) => Input::Key(c),
            _ => Input::Unmapped,
        }
    }
}

/// Runs the interactive game until the player presses Esc.
#[instrument(skip_all)]
pub fn run<E: Entropy>(mut app: App<E>) -> Result<()> {
    info!("Starting terminal UI");

    let res = {
        let _guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        event_loop(&mut terminal, &mut app)
    };

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

fn event_loop<E: Entropy>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<E>,
) -> Result<()> {
    loop {
        let frame = app.frame();
        let keymap = *app.keymap();
        terminal.draw(|f| draw(f, &frame, &keymap))?;

        // Non-blocking poll; no key means nothing to process.
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match Input::from(key.code) {
                Input::Quit => {
                    info!("User quit");
                    return Ok(());
                }
                Input::Key(c) => {
                    app.press(c);
                }
                Input::Unmapped => {}
            }
        }
    }
}

/// Draws the display, the keypad legend and the help line.
fn draw(frame: &mut Frame, lcd: &LcdFrame, keymap: &Keymap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Display
            Constraint::Length(6), // Keypad
            Constraint::Min(1),    // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Keypad Mastermind")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let lines: Vec<Line> = lcd.lines().iter().map(|l| Line::from(l.as_str())).collect();
    let display = Paragraph::new(lines)
        .style(Style::default().fg(Color::Black).bg(Color::Green))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(display, center_rect(chunks[1], LCD_COLUMNS as u16 + 2, 4));

    let keypad: Vec<Line> = KEYPAD.iter().map(|row| Line::from(*row)).collect();
    let keypad = Paragraph::new(keypad)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Keypad"));
    frame.render_widget(keypad, center_rect(chunks[2], 13, 6));

    let help = Paragraph::new(format!(
        "{} next round   {} new game   Esc quit",
        keymap.new_round, keymap.new_game
    ))
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
