//! Parsing of the console command language.
//!
//! A line holds one or more commands separated by `;`:
//!
//! ```text
//! s          draw from the stock (or restock when it is empty)
//! d          pick the top discard
//! f<i>       choose foundation i (0..=3)
//! t<i>[,n]   choose tableau i (0..=6), picking a run of n cards (default 1)
//! Q          quit
//! ```
//!
//! The whole line is parsed before anything runs, so one bad token rejects
//! the line.

use crate::error::CommandError;
use crate::pile::{FOUNDATION_COUNT, TABLEAU_COUNT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Stock,
    Discards,
    Foundation(u8),
    /// `count` is kept as typed; non-positive counts are rejected by the
    /// game rather than by the parser.
    Tableau { index: u8, count: i32 },
    Quit,
}

impl Command {
    /// Parse a single token such as `t3,2`.
    pub fn parse(token: &str) -> Result<Self, CommandError> {
        let bad = || CommandError::Unrecognized(token.to_string());
        let mut chars = token.chars();
        let head = chars.next().ok_or_else(bad)?;
        let rest = chars.as_str();

        match (head, rest) {
            ('s', "") => Ok(Command::Stock),
            ('d', "") => Ok(Command::Discards),
            ('Q', "") => Ok(Command::Quit),
            ('f', idx) => pile_index(idx, FOUNDATION_COUNT)
                .map(Command::Foundation)
                .ok_or_else(bad),
            ('t', spec) => {
                let (idx, count) = match spec.split_once(',') {
                    Some((idx, "")) => (idx, 1),
                    Some((idx, n)) => (idx, n.trim().parse::<i32>().map_err(|_| bad())?),
                    None => (spec, 1),
                };
                let index = pile_index(idx, TABLEAU_COUNT).ok_or_else(bad)?;
                Ok(Command::Tableau { index, count })
            }
            _ => Err(bad()),
        }
    }
}

/// A single decimal digit below `limit`.
fn pile_index(s: &str, limit: usize) -> Option<u8> {
    let mut chars = s.chars();
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() || digit as usize >= limit {
        return None;
    }
    Some(digit as u8)
}

/// Parse a whole input line. Empty tokens (`s;;d`) are skipped.
pub fn parse_line(line: &str) -> Result<Vec<Command>, CommandError> {
    line.trim()
        .split(';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(Command::parse)
        .collect()
}
