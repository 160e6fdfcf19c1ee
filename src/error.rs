//! Error types.
//!
//! Illegal moves are *not* errors: every `choose` reports a rejected move by
//! returning `false`. The enums here cover malformed input and invariant
//! violations only.

use thiserror::Error;

/// A card could not be built from a raw index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("bad value for card init: {0}")]
    InvalidIndex(u8),
}

/// Failures of a card source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Dealing from a source with no cards left.
    #[error("no cards left")]
    Exhausted,
    #[error("invalid deck list: {0}")]
    InvalidList(String),
    #[error("invalid PySol seed: {0}")]
    InvalidSeed(String),
}

/// A token typed at the prompt was not a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unrecognized command. Try again: [{0}]")]
    Unrecognized(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unrecognized argument '{0}' (try -h)")]
    UnknownArgument(String),
    #[error("invalid value for {flag}: {reason}")]
    InvalidValue { flag: &'static str, reason: String },
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
