//! Card sources.
//!
//! The game only ever asks a source for "one more card" and "how many are
//! left"; everything about ordering (shuffles, imported deals) stays here.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, standard_deck};
use crate::error::DeckError;

/// Seed used when shuffling is derandomized, so `xN` always yields the same
/// deal on every platform.
pub const FIXED_SHUFFLE_SEED: u64 = 0x5017_7A12_E000_0001;

/// Something the game can deal cards from.
pub trait CardSource {
    /// Remove and return the top card.
    fn deal(&mut self) -> Result<Card, DeckError>;

    /// Number of cards not dealt yet.
    fn remaining(&self) -> usize;
}

/// A physical deck: a stack of cards dealt from its end.
#[derive(Clone, Debug)]
pub struct Deck {
    /// Bottom first; `deal` pops from the end.
    cards: Vec<Card>,
    rng: ChaCha8Rng,
    randomize: bool,
}

impl Deck {
    /// A fresh 52-card deck in index order.
    ///
    /// With `randomize == false` every shuffle is driven by a fixed seed.
    pub fn new(randomize: bool) -> Self {
        let rng = if randomize {
            ChaCha8Rng::from_entropy()
        } else {
            ChaCha8Rng::seed_from_u64(FIXED_SHUFFLE_SEED)
        };
        Deck {
            cards: standard_deck(),
            rng,
            randomize,
        }
    }

    /// A deck that deals `order` front to back.
    pub fn from_deal_order(mut order: Vec<Card>) -> Self {
        order.reverse();
        Deck {
            cards: order.into_iter().map(Card::face_down).collect(),
            rng: ChaCha8Rng::seed_from_u64(FIXED_SHUFFLE_SEED),
            randomize: false,
        }
    }

    pub fn is_randomized(&self) -> bool {
        self.randomize
    }

    /// Shuffle `times` times in a row.
    pub fn shuffle(&mut self, times: usize) -> &mut Self {
        for _ in 0..times {
            self.cards.shuffle(&mut self.rng);
        }
        self
    }

    /// Cards in the order they will be dealt.
    pub fn deal_order(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().rev().copied()
    }
}

impl CardSource for Deck {
    fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}
