//! Human-readable rendering of piles and of the whole board.
//!
//! Face-down cards are never shown, only counted. Each pile variant has its
//! own one-line summary:
//!
//! ```text
//! t3:    [3]   8_H  7_S
//! f0: [1] 2_C
//! s: [23]   d:  [0]  A_C
//! ```

use crate::game::Game;
use crate::pile::{Pile, PileKind};

/// Prompt shown after the board.
pub const PROMPT: &str = "Enter command (s|d|t{i}[,n]|f{i})[;..]|Q: ";

/// One-line summary of a pile.
pub fn render_pile(pile: &Pile) -> String {
    match pile.kind() {
        PileKind::Tableau => render_tableau_pile(pile),
        PileKind::Foundation => {
            let mut s = format!("[{}] ", pile.len().saturating_sub(1));
            if let Some(top) = pile.top() {
                s.push_str(&top.short_name());
            }
            s
        }
        PileKind::Stock => format!("[{}]", pile.len()),
        PileKind::Discards => match pile.top() {
            None => "[0]".to_string(),
            Some(top) => format!(" [{}] {:>4}", pile.len() - 1, top.read()),
        },
    }
}

/// Hidden count, then every visible card bottom to top.
fn render_tableau_pile(pile: &Pile) -> String {
    let mut s = format!("{:>4}{}] ", "[", pile.face_down_count());
    let mut face_up = pile.face_up_cards().iter();
    if let Some(first) = face_up.next() {
        s.push_str(&format!("{:>5} ", first.read()));
    }
    for card in face_up {
        s.push_str(&format!("{:>4} ", card.read()));
    }
    s
}

/// The board. `minimal` shows only the stock and discards line.
pub fn render_board(game: &Game, minimal: bool) -> String {
    let mut s = String::new();
    if !minimal {
        s.push('\n');
        for (i, pile) in game.tableau().iter().enumerate() {
            s.push_str(&format!("\nt{}: {}", i, render_pile(pile)));
        }
        s.push_str("\n\n");
        for (i, pile) in game.foundations().iter().enumerate() {
            s.push_str(&format!("f{}: {}\n", i, render_pile(pile)));
        }
    }
    s.push('\n');
    s.push_str(&format!(
        "s: {}   d: {}\n",
        render_pile(game.stock()),
        render_pile(game.discards())
    ));
    s
}

/// Text shown before the command prompt: the pending pick, or the win
/// banner.
pub fn render_status(game: &Game) -> String {
    match game.selection() {
        Some(sel) => format!("{{{sel}}} "),
        None if game.is_won() => "\nWINNER! \n".to_string(),
        None => String::new(),
    }
}

pub const USAGE: &str = "\nSolitaire game\n\nusage:\n\tsolitaire [xN|-h] [--pysol=<seed>] [--deck=<list>] [--verbose]\n  where\n\t x derandomizes the initial shuffle. (N is a small positive number of extra shuffles giving a repeatable deal)\n\t--pysol=<seed> deals the PySol game with that number (msN for Microsoft numbering)\n\t--deck=[i0,..,i51] deals an explicit card order\n\t--verbose logs every move to stderr\n\t-h shows this help and exits\n";
