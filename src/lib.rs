pub mod card;
pub mod command;
pub mod config;
pub mod console;
pub mod deck;
pub mod display;
pub mod error;
pub mod game;
pub mod moves;
pub mod pile;
pub mod pysol;
pub mod selection;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::GameConfig;
use crate::display::USAGE;

pub use crate::error::{Error, Result};

/// Entry point for the `solitaire` binary.
///
/// This:
///   - Parses the command line (`x`, `xN`, `--pysol=`, `--deck=`,
///     `--verbose`, `-h`).
///   - Installs a stderr log subscriber (`RUST_LOG` wins over `--verbose`).
///   - Builds the deck, deals, and runs the console loop on stdin/stdout.
///
/// Example:
///   cargo run -- x3
pub fn run() -> Result<()> {
    let cfg = GameConfig::from_args(std::env::args().skip(1))?;
    if cfg.show_help {
        println!("{USAGE}");
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();

    info!(deal = ?cfg.deal, "starting game");
    let mut deck = cfg.build_deck()?;
    info!(randomized = deck.is_randomized(), "deck ready");
    let mut game = game::Game::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    game.start(&mut deck, stdin.lock(), &mut stdout)
}
