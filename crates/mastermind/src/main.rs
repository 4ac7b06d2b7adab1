//! Keypad Mastermind - terminal front-end
//!
//! Emulates the 4x4 keypad and 16x2 display around the game engine.

#![warn(missing_docs)]

mod app;
mod cli;
mod lcd;
mod settings;
mod tui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Command, GameArgs};
use mastermind_core::RandEntropy;
use rand::SeedableRng;
use rand::rngs::StdRng;
use settings::Settings;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { game, log_file } => run_play(&cli.config, &game, log_file),
        Command::Script { keys, game, json } => run_script(&cli.config, &keys, &game, json),
    }
}

/// Run the interactive terminal game
fn run_play(config: &Path, game: &GameArgs, log_file: PathBuf) -> Result<()> {
    // Log to a file so output does not corrupt the screen
    let file = std::fs::File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    let app = build_app(config, game)?;
    tui::run(app)
}

/// Feed keys through the game, printing one frame per key
fn run_script(config: &Path, keys: &str, game: &GameArgs, json: bool) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let mut app = build_app(config, game)?;
    info!(keys, "Running key script");

    for key in keys.chars() {
        app.press(key);
        if json {
            println!("{}", serde_json::to_string(&app.snapshot())?);
        } else {
            println!("> {}\n{}", key, app.frame());
        }
    }
    Ok(())
}

#[instrument(skip_all, fields(config = %config.display()))]
fn build_app(config: &Path, game: &GameArgs) -> Result<App<RandEntropy<StdRng>>> {
    let settings = Settings::load_or_default(config)?.apply(game);

    let rng = match game.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    App::new(&settings, RandEntropy::new(rng)).context("Invalid game settings")
}
