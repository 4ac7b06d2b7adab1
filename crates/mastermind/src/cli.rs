//! Command-line interface for mastermind.

use clap::{Args, Parser, Subcommand};
use mastermind_core::ShufflePolicy;
use std::path::PathBuf;

/// Keypad Mastermind - crack the hidden digit code
#[derive(Parser, Debug)]
#[command(name = "mastermind")]
#[command(about = "Mastermind on an emulated 4x4 keypad and 16x2 display", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "mastermind.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Game options
        #[command(flatten)]
        game: GameArgs,

        /// File receiving log output (keeps the screen clean)
        #[arg(long, default_value = "mastermind.log")]
        log_file: PathBuf,
    },

    /// Feed a key sequence through the game and print every frame
    Script {
        /// Keys to press, e.g. "1234#5678"
        keys: String,

        /// Game options
        #[command(flatten)]
        game: GameArgs,

        /// Print JSON snapshots instead of display frames
        #[arg(long)]
        json: bool,
    },
}

/// Options overriding the settings file.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Seed for the secret generator (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Guesses allowed per game
    #[arg(long)]
    pub tries_max: Option<u32>,

    /// Allow the secret to repeat digits
    #[arg(long)]
    pub allow_duplicates: bool,

    /// Shuffle draw range: standard or legacy
    #[arg(long)]
    pub shuffle: Option<ShufflePolicy>,
}
