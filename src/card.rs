//! Card, Suit, and Rank types for a standard 52-card deck.
//!
//! - A `Card` packs its identity into one byte (0..=51) and carries a
//!   face-up / face-down flag next to it.
//! - `Suit` and `Rank` give human-readable structure on top of that.

use core::fmt;

use crate::error::CardError;

/// Number of suits in a standard deck.
pub const NUM_SUITS: u8 = 4;
/// Number of ranks in a standard deck.
pub const NUM_RANKS: u8 = 13;
/// Number of cards in a standard deck.
pub const CARDS_PER_DECK: u8 = NUM_SUITS * NUM_RANKS;

/// A playing card: packed identity plus visibility.
///
/// The identity mapping is:
/// ```text
/// index = suit as u8 * 13 + rank as u8
/// ```
/// where `rank` is 0=Ace, 1=Two, ..., 12=King and suits are ordered
/// Clubs, Diamonds, Hearts, Spades.
///
/// Two cards with the same index are the same card for every rule; use
/// [`Card::same_card`] for that comparison; `==` also compares visibility.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Card {
    index: u8,
    face_up: bool,
}

/// The four suits in a standard deck.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

/// The thirteen ranks in a standard deck, Ace low.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // 12
}

/// Result of comparing the ranks of two cards under a caller constraint.
///
/// Read it from the point of view of the card the comparison is called on:
/// `top.adjacency(other, ..)` is `Descending` when `other` sits exactly one
/// rank below `top` (a tableau build) and `Ascending` when it sits exactly
/// one rank above (a foundation build).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(i8)]
pub enum Adjacency {
    Descending = -1,
    None = 0,
    Ascending = 1,
}

impl Card {
    /// Create a new face-down card from a suit and rank.
    #[inline]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card {
            index: suit as u8 * NUM_RANKS + rank as u8,
            face_up: false,
        }
    }

    /// Create a face-down card from a raw index in 0..=51.
    pub fn from_index(index: u8) -> Result<Self, CardError> {
        if index >= CARDS_PER_DECK {
            return Err(CardError::InvalidIndex(index));
        }
        Ok(Card {
            index,
            face_up: false,
        })
    }

    /// Return the raw 0..=51 index of this card.
    #[inline]
    pub fn index(self) -> u8 {
        self.index
    }

    #[inline]
    pub fn suit(self) -> Suit {
        Suit::ALL[(self.index / NUM_RANKS) as usize]
    }

    #[inline]
    pub fn rank(self) -> Rank {
        Rank::ALL[(self.index % NUM_RANKS) as usize]
    }

    #[inline]
    pub fn is_face_up(self) -> bool {
        self.face_up
    }

    #[inline]
    pub fn is_face_down(self) -> bool {
        !self.face_up
    }

    /// Turn the card over in place.
    #[inline]
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// This card turned face-up.
    #[inline]
    pub fn face_up(self) -> Self {
        Card {
            face_up: true,
            ..self
        }
    }

    /// This card turned face-down.
    #[inline]
    pub fn face_down(self) -> Self {
        Card {
            face_up: false,
            ..self
        }
    }

    /// Same rank and suit, whatever the visibility.
    #[inline]
    pub fn same_card(self, other: Card) -> bool {
        self.index == other.index
    }

    #[inline]
    pub fn is_red(self) -> bool {
        self.suit().is_red()
    }

    /// Compare ranks with `other`, gated by `constraint`.
    ///
    /// `constraint` is only evaluated when the ranks are exactly one step
    /// apart; for any other pair it is never called. There is no Ace/King
    /// wrap-around.
    pub fn adjacency<F>(self, other: Card, constraint: F) -> Adjacency
    where
        F: FnOnce() -> bool,
    {
        let step = match self.rank() as i8 - other.rank() as i8 {
            1 => Adjacency::Descending,
            -1 => Adjacency::Ascending,
            _ => return Adjacency::None,
        };
        if constraint() { step } else { Adjacency::None }
    }

    /// Short name like "A_C", "10_H", "K_S".
    pub fn short_name(self) -> String {
        format!("{}_{}", self.rank().symbol(), self.suit().short_char())
    }

    /// What a player sees: the short name, or `[?]` while face-down.
    pub fn read(self) -> String {
        if self.face_up {
            self.short_name()
        } else {
            "[?]".to_string()
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}

/// Tableau constraint: one red card and one black card.
#[inline]
pub fn alternating_color(a: Card, b: Card) -> bool {
    a.is_red() != b.is_red()
}

/// Foundation constraint.
#[inline]
pub fn same_suit(a: Card, b: Card) -> bool {
    a.suit() == b.suit()
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Suit; NUM_SUITS as usize] =
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// First letter of the suit name.
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    #[inline]
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

impl Rank {
    /// All ranks in a fixed order (Ace..King).
    pub const ALL: [Rank; NUM_RANKS as usize] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// "A", "2", ..., "10", "J", "Q", "K".
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// The 52 cards in index order, all face-down.
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn card_index_round_trip() {
        for &suit in Suit::ALL.iter() {
            for &rank in Rank::ALL.iter() {
                let c = Card::new(suit, rank);
                assert!(c.index() < CARDS_PER_DECK);
                assert_eq!(c.suit(), suit);
                assert_eq!(c.rank(), rank);
                assert_eq!(Card::from_index(c.index()), Ok(c));
            }
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(Card::from_index(52), Err(CardError::InvalidIndex(52)));
        assert_eq!(Card::from_index(255), Err(CardError::InvalidIndex(255)));
    }

    #[test]
    fn flip_is_visible_immediately() {
        let mut c = Card::new(Suit::Hearts, Rank::Queen);
        assert!(c.is_face_down());
        assert_eq!(c.read(), "[?]");
        c.flip();
        assert!(c.is_face_up());
        assert_eq!(c.read(), "Q_H");
        c.flip();
        assert!(c.is_face_down());
        assert!(c.same_card(c.face_up()));
        assert_ne!(c, c.face_up());
    }

    #[test]
    fn short_names() {
        assert_eq!(Card::new(Suit::Clubs, Rank::Ace).short_name(), "A_C");
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).short_name(), "10_H");
        assert_eq!(Card::new(Suit::Spades, Rank::King).to_string(), "K_S");
        assert_eq!(Card::new(Suit::Diamonds, Rank::Seven).to_string(), "7_D");
    }

    #[test]
    fn adjacency_directions() {
        let eight_h = Card::new(Suit::Hearts, Rank::Eight);
        let seven_s = Card::new(Suit::Spades, Rank::Seven);
        let nine_h = Card::new(Suit::Hearts, Rank::Nine);

        assert_eq!(eight_h.adjacency(seven_s, || true), Adjacency::Descending);
        assert_eq!(eight_h.adjacency(nine_h, || true), Adjacency::Ascending);
        assert_eq!(eight_h.adjacency(seven_s, || false), Adjacency::None);
        assert_eq!(eight_h.adjacency(eight_h, || true), Adjacency::None);
        assert_eq!(Adjacency::Descending as i8, -1);
        assert_eq!(Adjacency::Ascending as i8, 1);
    }

    #[test]
    fn no_wrap_between_king_and_ace() {
        let king = Card::new(Suit::Clubs, Rank::King);
        let ace = Card::new(Suit::Hearts, Rank::Ace);
        assert_eq!(king.adjacency(ace, || true), Adjacency::None);
        assert_eq!(ace.adjacency(king, || true), Adjacency::None);
    }

    #[test]
    fn constraint_runs_only_for_one_step_ranks() {
        let calls = Cell::new(0);
        let counted = || {
            calls.set(calls.get() + 1);
            true
        };
        let five = Card::new(Suit::Clubs, Rank::Five);
        let nine = Card::new(Suit::Hearts, Rank::Nine);
        assert_eq!(five.adjacency(nine, counted), Adjacency::None);
        assert_eq!(calls.get(), 0);

        let four = Card::new(Suit::Hearts, Rank::Four);
        assert_eq!(
            five.adjacency(four, || {
                calls.set(calls.get() + 1);
                true
            }),
            Adjacency::Descending
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn colour_and_suit_constraints() {
        let ah = Card::new(Suit::Hearts, Rank::Ace);
        let ad = Card::new(Suit::Diamonds, Rank::Ace);
        let ac = Card::new(Suit::Clubs, Rank::Ace);
        assert!(alternating_color(ah, ac));
        assert!(!alternating_color(ah, ad));
        assert!(same_suit(ah, Card::new(Suit::Hearts, Rank::Two)));
        assert!(!same_suit(ah, ad));
    }

    #[test]
    fn standard_deck_has_52_unique_cards() {
        let deck = standard_deck();
        assert_eq!(deck.len(), CARDS_PER_DECK as usize);

        let mut seen = [false; CARDS_PER_DECK as usize];
        for card in deck.iter() {
            let idx = card.index() as usize;
            assert!(!seen[idx], "duplicate card index {idx}");
            seen[idx] = true;
            assert!(card.is_face_down());
        }
        assert!(seen.iter().all(|&b| b));
    }
}
