//! The single pending pick.
//!
//! A selection records which pile a run was picked from, a snapshot of the
//! run's bottom card and how many cards the run holds. It never borrows the
//! pile: the live run is re-derived from the source pile when a move is
//! completed, and rejected if it no longer matches.

use core::fmt;

use crate::card::Card;
use crate::pile::{Pile, PileId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    source: PileId,
    card: Card,
    count: usize,
}

impl Selection {
    /// A selection of `count` cards whose bottom card is `card`.
    ///
    /// Returns `None` for an empty run; a selection always covers at least
    /// one card.
    pub fn new(source: PileId, card: Card, count: usize) -> Option<Self> {
        (count >= 1).then_some(Selection {
            source,
            card,
            count,
        })
    }

    #[inline]
    pub fn source(&self) -> PileId {
        self.source
    }

    /// Snapshot of the bottom card of the run.
    #[inline]
    pub fn card(&self) -> Card {
        self.card
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether `pile` still holds this run: enough cards, and the card where
    /// the run starts is face-up and is the recorded one.
    pub fn is_live_in(&self, pile: &Pile) -> bool {
        pile.id() == self.source
            && pile
                .run_start(self.count)
                .is_some_and(|c| c.is_face_up() && c.same_card(self.card))
    }
}

/// Prompt form: `T3(7_H+2)`.
impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}", self.source, self.card.short_name())?;
        if self.count > 1 {
            write!(f, "+{}", self.count - 1)?;
        }
        f.write_str(")")
    }
}
