//! Deals identified by PySol game numbers, and explicit deal lists.
//!
//! PySol names every deal by a seed. Small numbers (below 32000) and
//! `msNNNN` seeds use the Microsoft-compatible 31-bit LCG; anything larger
//! seeds a Mersenne Twister the way CPython's `random.Random` does, which is
//! why the seed is kept as an arbitrary-precision integer.
//!
//! The shuffled talon is reversed into dealing order and mapped onto our
//! card indices.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::card::{CARDS_PER_DECK, Card, NUM_RANKS};
use crate::deck::Deck;
use crate::error::DeckError;

const DECK_LEN: usize = CARDS_PER_DECK as usize;

/// Seeds below this use the LCG even without the `ms` prefix.
const MS_THRESHOLD: u32 = 32_000;

/// PySol suit order is Clubs, Spades, Hearts, Diamonds.
const PYSOL_TO_SUIT_INDEX: [u8; 4] = [0, 3, 2, 1];

/// A normalised PySol seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameNumber {
    Ms(u64),
    Num(BigUint),
}

impl GameNumber {
    /// Normalise a seed the way PySol does: drop a trailing `L`, lowercase,
    /// and strip whitespace and `#-_.,`.
    pub fn parse(raw: &str) -> Result<Self, DeckError> {
        let invalid = |why: &str| DeckError::InvalidSeed(format!("{raw:?}: {why}"));

        let trimmed = raw.trim();
        let trimmed = trimmed.strip_suffix('L').unwrap_or(trimmed);
        let cleaned: String = trimmed
            .chars()
            .filter(|c| !c.is_whitespace() && !"#-_.,".contains(*c))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if cleaned.is_empty() {
            return Err(invalid("empty seed"));
        }

        if let Some(digits) = cleaned.strip_prefix("ms") {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("ms seed must be digits"));
            }
            let n = digits.parse().map_err(|_| invalid("ms seed too large"))?;
            return Ok(GameNumber::Ms(n));
        }
        if !cleaned.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("seed must be a number"));
        }
        BigUint::parse_bytes(cleaned.as_bytes(), 10)
            .map(GameNumber::Num)
            .ok_or_else(|| invalid("seed must be a number"))
    }

    /// Cards in dealing order for this game.
    pub fn deal_order(&self) -> Result<Vec<Card>, DeckError> {
        // PySol talon order: suit-major, rank-minor.
        let mut talon: Vec<(u8, u8)> = (0..4u8)
            .flat_map(|suit| (0..NUM_RANKS).map(move |rank| (suit, rank)))
            .collect();

        match self {
            GameNumber::Ms(n) => MsRandom::new(*n)?.shuffle(&mut talon),
            GameNumber::Num(n) => match n.to_u32().filter(|&v| v < MS_THRESHOLD) {
                Some(small) => MsRandom::new(u64::from(small))?.shuffle(&mut talon),
                None => Mt19937::from_big(n).shuffle(&mut talon),
            },
        }

        talon
            .into_iter()
            .rev()
            .map(|(suit, rank)| {
                Card::from_index(PYSOL_TO_SUIT_INDEX[suit as usize] * NUM_RANKS + rank)
            })
            .collect::<Result<Vec<Card>, _>>()
            .map_err(|e| DeckError::InvalidSeed(e.to_string()))
    }
}

/// The deck for PySol game `seed`.
pub fn deck_from_seed(seed: &str) -> Result<Deck, DeckError> {
    let order = GameNumber::parse(seed)?.deal_order()?;
    Ok(Deck::from_deal_order(order))
}

/// Parse `[i0, i1, ..., i51]`: 52 distinct card indices, first dealt first.
pub fn parse_index_list(s: &str) -> Result<Vec<Card>, DeckError> {
    let invalid = |why: String| DeckError::InvalidList(why);

    let open = s.find('[').ok_or_else(|| invalid("missing '['".into()))?;
    let close = s.rfind(']').ok_or_else(|| invalid("missing ']'".into()))?;
    if close <= open {
        return Err(invalid("malformed [...] list".into()));
    }

    let mut seen = [false; DECK_LEN];
    let mut cards = Vec::with_capacity(DECK_LEN);
    for part in s[open + 1..close].split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let v: u8 = part
            .parse()
            .map_err(|_| invalid(format!("could not parse '{part}' as a card index")))?;
        let card = Card::from_index(v).map_err(|e| invalid(e.to_string()))?;
        if std::mem::replace(&mut seen[v as usize], true) {
            return Err(invalid(format!("duplicate card index {v}")));
        }
        cards.push(card);
    }
    if cards.len() != DECK_LEN {
        return Err(invalid(format!(
            "deck list must have {DECK_LEN} numbers, got {}",
            cards.len()
        )));
    }
    Ok(cards)
}

// ----- PySol's shuffle: Fisher-Yates driven by randint(0, n) -----

trait PysolRandom {
    /// Uniform integer in `0..=hi`.
    fn randint(&mut self, hi: usize) -> usize;

    fn shuffle<T>(&mut self, seq: &mut [T]) {
        for n in (1..seq.len()).rev() {
            let j = self.randint(n);
            seq.swap(n, j);
        }
    }
}

/// Microsoft-compatible LCG over 33 bits.
struct MsRandom {
    seed: u64,
    state: u64,
}

impl MsRandom {
    const MAX_SEED: u64 = (1 << 33) - 1;

    fn new(seed: u64) -> Result<Self, DeckError> {
        if !(1..=Self::MAX_SEED).contains(&seed) {
            return Err(DeckError::InvalidSeed(format!("ms seed {seed} out of range")));
        }
        let state = if seed < 1 << 32 { seed } else { seed - (1 << 32) };
        Ok(MsRandom { seed, state })
    }

    fn step(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(214_013).wrapping_add(2_531_011) & Self::MAX_SEED;
        self.state >> 16
    }

    fn next_value(&mut self) -> u32 {
        if self.seed < 1 << 32 {
            let r = (self.step() & 0x7fff) as u32;
            if self.seed < 0x8000_0000 { r } else { r | 0x8000 }
        } else {
            (self.step() & 0xffff) as u32 + 1
        }
    }
}

impl PysolRandom for MsRandom {
    fn randint(&mut self, hi: usize) -> usize {
        self.next_value() as usize % (hi + 1)
    }
}

const MT_N: usize = 624;
const MT_M: usize = 397;

/// MT19937 with CPython's seeding and `random()`.
struct Mt19937 {
    mt: [u32; MT_N],
    index: usize,
}

impl Mt19937 {
    fn from_big(seed: &BigUint) -> Self {
        let mut key: Vec<u32> = if seed.is_zero() { vec![0] } else { seed.to_u32_digits() };
        if key.is_empty() {
            key.push(0);
        }
        let mut r = Mt19937 {
            mt: [0; MT_N],
            index: MT_N,
        };
        r.init_by_array(&key);
        r
    }

    fn init_genrand(&mut self, s: u32) {
        self.mt[0] = s;
        for i in 1..MT_N {
            let prev = self.mt[i - 1];
            self.mt[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = MT_N;
    }

    fn init_by_array(&mut self, key: &[u32]) {
        self.init_genrand(19_650_218);
        let (mut i, mut j) = (1usize, 0usize);
        for _ in 0..MT_N.max(key.len()) {
            let prev = self.mt[i - 1];
            self.mt[i] = (self.mt[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= MT_N {
                self.mt[0] = self.mt[MT_N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..MT_N - 1 {
            let prev = self.mt[i - 1];
            self.mt[i] = (self.mt[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_566_083_941))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= MT_N {
                self.mt[0] = self.mt[MT_N - 1];
                i = 1;
            }
        }
        self.mt[0] = 0x8000_0000;
    }

    fn twist(&mut self) {
        for i in 0..MT_N {
            let y = (self.mt[i] & 0x8000_0000) | (self.mt[(i + 1) % MT_N] & 0x7fff_ffff);
            let mut next = self.mt[(i + MT_M) % MT_N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= 0x9908_b0df;
            }
            self.mt[i] = next;
        }
        self.index = 0;
    }

    fn next_u32(&mut self) -> u32 {
        if self.index >= MT_N {
            self.twist();
        }
        let mut y = self.mt[self.index];
        self.index += 1;
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    /// 53-bit float in [0, 1).
    fn random(&mut self) -> f64 {
        let a = u64::from(self.next_u32() >> 5);
        let b = u64::from(self.next_u32() >> 6);
        ((a << 26) + b) as f64 / (1u64 << 53) as f64
    }
}

impl PysolRandom for Mt19937 {
    fn randint(&mut self, hi: usize) -> usize {
        (self.random() * (hi + 1) as f64) as usize
    }
}
