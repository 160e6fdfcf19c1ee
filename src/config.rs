//! Start-up configuration from the command line.
//!
//! The surface is tiny, so it is parsed by hand:
//!
//! * `x` / `xN`       derandomized shuffle, `N` extra passes
//! * `--pysol=<seed>` deal a PySol game number
//! * `--deck=<list>`  deal an explicit `[i0, .., i51]` order
//! * `--verbose`      debug logging
//! * `-h`, `--help`   usage only

use crate::deck::Deck;
use crate::error::{ConfigError, Result};
use crate::pysol;

/// How the deck is put in order before dealing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DealSource {
    /// A fresh deck, shuffled once and then `extra_shuffles` more times.
    Shuffled { randomize: bool, extra_shuffles: usize },
    /// A PySol game number.
    Pysol(String),
    /// An explicit index list.
    List(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub deal: DealSource,
    pub verbose: bool,
    pub show_help: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            deal: DealSource::Shuffled {
                randomize: true,
                extra_shuffles: 1,
            },
            verbose: false,
            show_help: false,
        }
    }
}

impl GameConfig {
    /// Parse arguments, not including the program name.
    pub fn from_args<I, S>(args: I) -> std::result::Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cfg = GameConfig::default();
        for arg in args {
            let arg = arg.as_ref();
            if arg == "-h" || arg == "--help" {
                cfg.show_help = true;
            } else if arg == "--verbose" {
                cfg.verbose = true;
            } else if let Some(seed) = arg.strip_prefix("--pysol=") {
                cfg.deal = DealSource::Pysol(seed.to_string());
            } else if let Some(list) = arg.strip_prefix("--deck=") {
                cfg.deal = DealSource::List(list.to_string());
            } else if let Some(count) = arg.strip_prefix('x') {
                let extra_shuffles = if count.is_empty() {
                    1
                } else {
                    count.parse().map_err(|_| ConfigError::InvalidValue {
                        flag: "x",
                        reason: format!("'{count}' is not a shuffle count"),
                    })?
                };
                cfg.deal = DealSource::Shuffled {
                    randomize: false,
                    extra_shuffles,
                };
            } else {
                return Err(ConfigError::UnknownArgument(arg.to_string()));
            }
        }
        Ok(cfg)
    }

    /// Build the deck this configuration asks for.
    pub fn build_deck(&self) -> Result<Deck> {
        let deck = match &self.deal {
            DealSource::Shuffled {
                randomize,
                extra_shuffles,
            } => {
                let mut deck = Deck::new(*randomize);
                deck.shuffle(1).shuffle(*extra_shuffles);
                deck
            }
            DealSource::Pysol(seed) => pysol::deck_from_seed(seed)?,
            DealSource::List(list) => Deck::from_deal_order(pysol::parse_index_list(list)?),
        };
        Ok(deck)
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
