//! Game-level state: every pile plus the pending selection.
//!
//! `Game` owns all thirteen piles and the one optional `Selection`. Piles
//! never reach into each other; every transfer goes through `Game`, which is
//! the only mutator. The per-variant move rules are in `crate::moves`.

use tracing::{debug, info};

use crate::card::Card;
use crate::command::Command;
use crate::deck::CardSource;
use crate::error::DeckError;
use crate::pile::{FOUNDATION_COUNT, Pile, PileId, TABLEAU_COUNT};
use crate::selection::Selection;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    tableau: [Pile; TABLEAU_COUNT],
    foundations: [Pile; FOUNDATION_COUNT],
    stock: Pile,
    discards: Pile,
    selection: Option<Selection>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// An empty table: no cards dealt, nothing selected.
    pub fn new() -> Self {
        Game {
            tableau: std::array::from_fn(|i| Pile::new(PileId::Tableau(i as u8))),
            foundations: std::array::from_fn(|i| Pile::new(PileId::Foundation(i as u8))),
            stock: Pile::new(PileId::Stock),
            discards: Pile::new(PileId::Discards),
            selection: None,
        }
    }

    /// Deal a new layout from `source`.
    ///
    /// Cards go out row by row: pile `i` ends up with `i + 1` cards, only the
    /// last of which is face-up. Everything left over goes to the stock,
    /// face-down, in deal order.
    pub fn deal<S: CardSource>(&mut self, source: &mut S) -> Result<(), DeckError> {
        *self = Game::new();
        for row in 0..TABLEAU_COUNT {
            for col in row..TABLEAU_COUNT {
                let mut card = source.deal()?.face_down();
                if col == row {
                    card.flip();
                }
                self.tableau[col].push(card);
            }
        }
        while source.remaining() > 0 {
            let card = source.deal()?;
            self.stock.push(card.face_down());
        }
        info!(stock = self.stock.len(), "dealt new layout");
        Ok(())
    }

    // ----- Pile access -----

    pub fn pile(&self, id: PileId) -> &Pile {
        match id {
            PileId::Tableau(i) => &self.tableau[i as usize],
            PileId::Foundation(i) => &self.foundations[i as usize],
            PileId::Stock => &self.stock,
            PileId::Discards => &self.discards,
        }
    }

    pub(crate) fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match id {
            PileId::Tableau(i) => &mut self.tableau[i as usize],
            PileId::Foundation(i) => &mut self.foundations[i as usize],
            PileId::Stock => &mut self.stock,
            PileId::Discards => &mut self.discards,
        }
    }

    pub fn tableau(&self) -> &[Pile; TABLEAU_COUNT] {
        &self.tableau
    }

    pub fn foundations(&self) -> &[Pile; FOUNDATION_COUNT] {
        &self.foundations
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn discards(&self) -> &Pile {
        &self.discards
    }

    /// Every pile, tableau first.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        self.tableau
            .iter()
            .chain(self.foundations.iter())
            .chain([&self.stock, &self.discards])
    }

    /// Replace the contents of one pile. Clears any pending selection.
    ///
    /// Intended for setting up positions in tests and tools; normal play
    /// only changes piles through `choose`.
    pub fn set_pile(&mut self, id: PileId, cards: Vec<Card>) {
        *self.pile_mut(id) = Pile::with_cards(id, cards);
        self.selection = None;
    }

    // ----- Selection -----

    /// Record a pick of `count` cards from `source` whose bottom card is
    /// `card`. A zero count leaves nothing selected.
    pub fn pick(&mut self, source: PileId, card: Card, count: usize) {
        self.selection = Selection::new(source, card, count);
    }

    pub fn unpick(&mut self) {
        self.selection = None;
    }

    #[inline]
    pub fn has_pick(&self) -> bool {
        self.selection.is_some()
    }

    #[inline]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn picked_pile(&self) -> Option<PileId> {
        self.selection.map(|s| s.source())
    }

    pub fn picked_card(&self) -> Option<Card> {
        self.selection.map(|s| s.card())
    }

    /// Run length of the pending pick, 0 when nothing is selected.
    pub fn picked_count(&self) -> usize {
        self.selection.map_or(0, |s| s.count())
    }

    // ----- Play -----

    /// Route one command to the pile it names.
    ///
    /// Only tableau picks carry a run length; the other piles always act on
    /// a single card. Returns whether the board changed. `Quit` is handled
    /// by the caller and is a no-op here.
    pub fn dispatch(&mut self, command: Command) -> bool {
        let changed = match command {
            Command::Stock => self.choose(PileId::Stock, 1),
            Command::Discards => self.choose(PileId::Discards, 1),
            Command::Foundation(i) => self.choose(PileId::Foundation(i), 1),
            Command::Tableau { index, count } => match usize::try_from(count) {
                Ok(count) => self.choose(PileId::Tableau(index), count),
                Err(_) => false,
            },
            Command::Quit => false,
        };
        debug!(?command, changed, "dispatched");
        changed
    }

    /// True when no tableau pile still hides a card at its bottom.
    ///
    /// Cards only start face-down from the initial deal, so this means every
    /// tableau card is visible and the rest is mechanical.
    pub fn is_won(&self) -> bool {
        self.tableau
            .iter()
            .all(|p| p.bottom().is_none_or(|c| c.is_face_up()))
    }

    /// Total number of cards on the table.
    pub fn card_count(&self) -> usize {
        self.piles().map(Pile::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CARDS_PER_DECK, Rank, Suit};
    use crate::deck::Deck;

    fn dealt() -> Game {
        let mut g = Game::new();
        let mut deck = Deck::new(false);
        g.deal(&mut deck).unwrap();
        g
    }

    #[test]
    fn triangular_deal() {
        let g = dealt();
        for (i, pile) in g.tableau().iter().enumerate() {
            assert_eq!(pile.len(), i + 1, "pile {i}");
            assert_eq!(pile.face_down_count(), i);
            assert!(pile.top().unwrap().is_face_up());
        }
        assert_eq!(g.stock().len(), 24);
        assert!(g.stock().cards().iter().all(|c| c.is_face_down()));
        assert!(g.discards().is_empty());
        assert!(g.foundations().iter().all(Pile::is_empty));
        assert_eq!(g.card_count(), CARDS_PER_DECK as usize);
    }

    #[test]
    fn unshuffled_deal_order() {
        // The unshuffled deck deals K_S, Q_S, ... so the first row is
        // K_S..7_S and T0 holds only K_S.
        let g = dealt();
        let t0 = g.pile(PileId::Tableau(0));
        assert!(t0.top().unwrap().same_card(Card::new(Suit::Spades, Rank::King)));
        let t6 = g.pile(PileId::Tableau(6));
        assert!(t6.bottom().unwrap().same_card(Card::new(Suit::Spades, Rank::Seven)));
    }

    #[test]
    fn short_source_is_an_error() {
        let mut g = Game::new();
        let mut deck = Deck::from_deal_order(vec![Card::new(Suit::Clubs, Rank::Ace); 3]);
        assert_eq!(g.deal(&mut deck), Err(DeckError::Exhausted));
    }

    #[test]
    fn win_requires_visible_bottoms() {
        let mut g = dealt();
        assert!(!g.is_won());

        let mut empty = Game::new();
        assert!(empty.is_won());
        empty.set_pile(
            PileId::Tableau(4),
            vec![
                Card::new(Suit::Hearts, Rank::Five),
                Card::new(Suit::Clubs, Rank::Four).face_up(),
            ],
        );
        assert!(!empty.is_won());

        for i in 0..TABLEAU_COUNT as u8 {
            let cards: Vec<Card> = g
                .pile(PileId::Tableau(i))
                .cards()
                .iter()
                .map(|c| c.face_up())
                .collect();
            g.set_pile(PileId::Tableau(i), cards);
        }
        assert!(g.is_won());
    }

    #[test]
    fn pick_and_unpick() {
        let mut g = dealt();
        assert!(!g.has_pick());
        assert_eq!(g.picked_count(), 0);

        let top = g.pile(PileId::Tableau(2)).top().unwrap();
        g.pick(PileId::Tableau(2), top, 1);
        assert!(g.has_pick());
        assert_eq!(g.picked_pile(), Some(PileId::Tableau(2)));
        assert_eq!(g.picked_card(), Some(top));
        assert_eq!(g.picked_count(), 1);

        g.unpick();
        assert!(g.selection().is_none());
        assert_eq!(g.picked_pile(), None);

        g.pick(PileId::Tableau(2), top, 0);
        assert!(!g.has_pick());
    }

    #[test]
    fn negative_run_count_is_rejected() {
        let mut g = dealt();
        let before = g.clone();
        assert!(!g.dispatch(Command::Tableau { index: 3, count: -2 }));
        assert!(!g.dispatch(Command::Tableau { index: 3, count: 0 }));
        assert_eq!(g, before);
    }
}
