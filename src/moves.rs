//! Move rules for the four pile variants.
//!
//! Every player action is a `choose` on one pile. With nothing selected, a
//! choose tries to pick a source run from that pile. With a selection
//! pending, it either cancels the selection (choosing the source again) or
//! tries to complete a move onto that pile. Rejected moves return `false`
//! and leave the game exactly as it was.

use tracing::trace;

use crate::card::{Adjacency, Rank, alternating_color, same_suit};
use crate::game::Game;
use crate::pile::{PileId, PileKind};
use crate::selection::Selection;

impl Game {
    /// Choose pile `id`, picking `count` cards if this starts a move.
    ///
    /// `count` only matters for tableau picks; the other piles always work
    /// on a single card. Returns whether the game state changed.
    pub fn choose(&mut self, id: PileId, count: usize) -> bool {
        match id.kind() {
            PileKind::Tableau => self.choose_tableau(id, count),
            PileKind::Foundation => self.choose_foundation(id),
            PileKind::Stock => self.choose_stock(),
            PileKind::Discards => self.choose_discards(),
        }
    }

    fn choose_tableau(&mut self, id: PileId, count: usize) -> bool {
        let Some(sel) = self.selection().copied() else {
            let Some(card) = self.pile(id).run_start(count) else {
                return false;
            };
            if card.is_face_down() {
                return false;
            }
            self.pick(id, card, count);
            trace!(pile = %id, %card, count, "picked run");
            return true;
        };

        if sel.source() == id {
            self.unpick();
            return true;
        }
        if !sel.is_live_in(self.pile(sel.source())) {
            return false;
        }

        let moving = sel.card();
        let accepts = match self.pile(id).top() {
            None => moving.rank() == Rank::King,
            Some(top) => {
                top.adjacency(moving, || alternating_color(top, moving)) == Adjacency::Descending
            }
        };
        if accepts {
            self.complete_move(sel, id);
        }
        accepts
    }

    fn choose_foundation(&mut self, id: PileId) -> bool {
        let Some(sel) = self.selection().copied() else {
            let Some(card) = self.pile(id).top() else {
                return false;
            };
            self.pick(id, card, 1);
            return true;
        };

        let top = self.pile(id).top();
        if top.is_some_and(|t| t.same_card(sel.card())) {
            self.unpick();
            return true;
        }
        if sel.count() != 1 || !sel.is_live_in(self.pile(sel.source())) {
            return false;
        }

        let moving = sel.card();
        let accepts = match top {
            None => moving.rank() == Rank::Ace,
            Some(top) => top.adjacency(moving, || same_suit(top, moving)) == Adjacency::Ascending,
        };
        if accepts {
            self.complete_move(sel, id);
        }
        accepts
    }

    /// Draw one card, or turn the discards over when the stock is empty.
    ///
    /// The stock is never a destination, so any pending selection makes
    /// this a no-op.
    fn choose_stock(&mut self) -> bool {
        if self.has_pick() {
            return false;
        }
        let Some(mut card) = self.pile_mut(PileId::Stock).take_top(1).pop() else {
            return self.restock();
        };
        card.flip();
        self.pile_mut(PileId::Discards).push(card);
        trace!(%card, "drew from stock");
        true
    }

    /// Move every discard back to the stock, face-down, so that the next
    /// draws come out in the same order as before.
    fn restock(&mut self) -> bool {
        let cards = self.pile_mut(PileId::Discards).drain_from_top();
        if cards.is_empty() {
            return false;
        }
        trace!(count = cards.len(), "restocked");
        let stock = self.pile_mut(PileId::Stock);
        for card in cards {
            stock.push(card.face_down());
        }
        true
    }

    fn choose_discards(&mut self) -> bool {
        match self.selection().copied() {
            None => match self.pile(PileId::Discards).top() {
                Some(card) => {
                    self.pick(PileId::Discards, card, 1);
                    true
                }
                None => false,
            },
            Some(sel) if sel.source() == PileId::Discards => {
                self.unpick();
                true
            }
            Some(_) => false,
        }
    }

    /// Move the selected run onto `dest`, expose the source's new top card
    /// and clear the selection.
    fn complete_move(&mut self, sel: Selection, dest: PileId) {
        let source = self.pile_mut(sel.source());
        let run = source.take_top(sel.count());
        source.flip_exposed_top();
        self.pile_mut(dest).extend(run);
        self.unpick();
        trace!(from = %sel.source(), to = %dest, count = sel.count(), "moved");
    }
}
