//! Settings file for the terminal game.

use crate::cli::GameArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use mastermind_core::{GameConfig, Keymap, ShufflePolicy, TRIES_MAX};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Game options a player may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Guesses allowed per game.
    tries_max: u32,
    /// Whether the secret may repeat digits.
    allow_duplicates: bool,
    /// Shuffle draw range.
    shuffle: ShufflePolicy,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            tries_max: TRIES_MAX,
            allow_duplicates: false,
            shuffle: ShufflePolicy::default(),
        }
    }
}

/// Contents of `mastermind.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Game options.
    game: GameSettings,
    /// Control key assignment.
    keys: Keymap,
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!(?settings, "Settings loaded successfully");
        Ok(settings)
    }

    /// Loads settings if the file exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses settings from TOML text and checks the key assignment.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;
        settings
            .keys
            .validate()
            .map_err(|e| SettingsError::new(format!("Invalid key assignment: {}", e)))?;
        Ok(settings)
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn apply(mut self, args: &GameArgs) -> Self {
        if let Some(tries_max) = args.tries_max {
            self.game.tries_max = tries_max;
        }
        if args.allow_duplicates {
            self.game.allow_duplicates = true;
        }
        if let Some(shuffle) = args.shuffle {
            self.game.shuffle = shuffle;
        }
        self
    }

    /// Builds the engine configuration. Alphabet and secret length stay fixed.
    pub fn game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_tries_max(self.game.tries_max)
            .with_allow_duplicates(self.game.allow_duplicates)
            .with_shuffle(self.game.shuffle)
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
