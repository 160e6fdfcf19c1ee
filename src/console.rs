//! The interactive command loop.
//!
//! Generic over the reader and writer so that whole sessions can be driven
//! from strings in tests.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::command::{Command, parse_line};
use crate::deck::CardSource;
use crate::display::{PROMPT, render_board, render_status};
use crate::error::Result;
use crate::game::Game;

impl Game {
    /// Deal from `source`, then play commands read from `input` until `Q`
    /// or end of input.
    pub fn start<S, R, W>(&mut self, source: &mut S, input: R, output: &mut W) -> Result<()>
    where
        S: CardSource,
        R: BufRead,
        W: Write,
    {
        self.deal(source)?;
        play(self, input, output)
    }
}

/// Run the prompt / parse / dispatch loop on an already dealt game.
pub fn play<R: BufRead, W: Write>(game: &mut Game, mut input: R, output: &mut W) -> Result<()> {
    write!(output, "{}", render_board(game, false))?;
    let mut announced_win = false;
    let mut buf = Vec::new();

    loop {
        if !announced_win && game.is_won() {
            info!("board won");
            announced_win = true;
        }
        write!(output, "\n{}{}", render_status(game), PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            return Ok(());
        }
        // Undecodable bytes become U+FFFD and fail to parse like any typo.
        let line = String::from_utf8_lossy(&buf);

        let commands = match parse_line(&line) {
            Ok(commands) => commands,
            Err(e) => {
                warn!(input = line.trim(), "rejected command line");
                writeln!(output, "\n{e}")?;
                continue;
            }
        };

        let last = commands.len().saturating_sub(1);
        for (i, command) in commands.into_iter().enumerate() {
            if command == Command::Quit {
                return Ok(());
            }
            game.dispatch(command);
            // Mid-line picks are not worth a redraw.
            if !game.has_pick() || i == last {
                write!(output, "{}", render_board(game, command == Command::Stock))?;
            }
        }
    }
}
