//! Piles: ordered stacks of cards with a fixed identity.
//!
//! A pile's variant is fixed by its `PileId` at construction; the move rules
//! for each variant live in `crate::moves`. Cards are stored bottom-to-top in
//! insertion order, so the playable card is always the last element.

use core::fmt;

use crate::card::Card;

/// Number of tableau piles.
pub const TABLEAU_COUNT: usize = 7;
/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Identity of a pile, which also selects its rule set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileId {
    Tableau(u8),
    Foundation(u8),
    Stock,
    Discards,
}

/// The four rule sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileKind {
    Tableau,
    Foundation,
    Stock,
    Discards,
}

impl PileId {
    #[inline]
    pub fn kind(self) -> PileKind {
        match self {
            PileId::Tableau(_) => PileKind::Tableau,
            PileId::Foundation(_) => PileKind::Foundation,
            PileId::Stock => PileKind::Stock,
            PileId::Discards => PileKind::Discards,
        }
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Tableau(i) => write!(f, "T{i}"),
            PileId::Foundation(i) => write!(f, "F{i}"),
            PileId::Stock => f.write_str("S"),
            PileId::Discards => f.write_str("D"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pile {
    id: PileId,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(id: PileId) -> Self {
        Pile {
            id,
            cards: Vec::new(),
        }
    }

    /// Build a pile holding `cards` (bottom first).
    pub fn with_cards(id: PileId, cards: Vec<Card>) -> Self {
        Pile { id, cards }
    }

    #[inline]
    pub fn id(&self) -> PileId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> PileKind {
        self.id.kind()
    }

    /// Stable label such as "T3", "F0", "S" or "D".
    pub fn label(&self) -> String {
        self.id.to_string()
    }

    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The playable card, if any.
    #[inline]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// The first card placed on the pile.
    #[inline]
    pub fn bottom(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// The bottom card of the top-aligned run of `count` cards.
    ///
    /// `None` when `count` is zero or larger than the pile.
    pub fn run_start(&self, count: usize) -> Option<Card> {
        if count == 0 || count > self.cards.len() {
            return None;
        }
        Some(self.cards[self.cards.len() - count])
    }

    /// Number of face-down cards below the first face-up one.
    pub fn face_down_count(&self) -> usize {
        self.cards.iter().take_while(|c| c.is_face_down()).count()
    }

    /// Cards from the first face-up one to the top.
    pub fn face_up_cards(&self) -> &[Card] {
        &self.cards[self.face_down_count()..]
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top `count` cards, bottom-most first.
    pub(crate) fn take_top(&mut self, count: usize) -> Vec<Card> {
        let at = self.cards.len().saturating_sub(count);
        self.cards.split_off(at)
    }

    pub(crate) fn extend(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }

    /// Remove every card, top-most first.
    pub(crate) fn drain_from_top(&mut self) -> Vec<Card> {
        let mut all = std::mem::take(&mut self.cards);
        all.reverse();
        all
    }

    /// Turn the top card face-up if it is hidden. Returns whether it flipped.
    pub(crate) fn flip_exposed_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(top) if top.is_face_down() => {
                top.flip();
                true
            }
            _ => false,
        }
    }
}
