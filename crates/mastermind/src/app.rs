//! Application state shared by the interactive and scripted front-ends.

use crate::lcd::{Lcd, LcdFrame};
use crate::settings::Settings;
use mastermind_core::{ConfigError, Entropy, GameEngine, Keymap, Snapshot, Transition};
use tracing::{debug, instrument};

/// Engine plus the key and display mapping around it.
pub struct App<E> {
    engine: GameEngine<E>,
    keymap: Keymap,
    lcd: Lcd,
}

impl<E: Entropy> App<E> {
    /// Creates the application and starts the first game.
    #[instrument(skip(entropy))]
    pub fn new(settings: &Settings, entropy: E) -> Result<Self, ConfigError> {
        let keymap = *settings.keys();
        Ok(Self {
            engine: GameEngine::new(settings.game_config(), entropy)?,
            keymap,
            lcd: Lcd::new(keymap),
        })
    }

    /// Feeds one key character through the keymap into the engine.
    pub fn press(&mut self, key: char) -> Transition {
        let event = self.keymap.decode(key, *self.engine.config().digit_count());
        let transition = self.engine.handle(event);
        debug!(%key, ?transition, "Key processed");
        transition
    }

    /// Control key assignment.
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Current display frame.
    pub fn frame(&self) -> LcdFrame {
        self.lcd.render(&self.engine.snapshot())
    }

    /// Current engine snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }
}
