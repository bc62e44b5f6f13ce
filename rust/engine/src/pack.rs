use std::io::Read;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::cards::{euchre_cards, Card, Rank};
use crate::errors::{GameError, PackError};

/// Number of cards in a Euchre pack.
pub const PACK_SIZE: usize = 24;

const RIFFLES_PER_SHUFFLE: usize = 7;

/// How a game reorders its pack before each hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShuffleMode {
    /// Deal the pack in its loaded order every hand.
    NoShuffle,
    /// Apply the deterministic [`Pack::shuffle`] riffle.
    Riffle,
    /// Draw a uniformly random order from a ChaCha20 stream with this seed.
    Random(u64),
}

/// The 24-card pack and a cursor over how many cards have been dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    cards: Vec<Card>,
    next: usize,
}

impl Default for Pack {
    fn default() -> Self {
        Self::new()
    }
}

impl Pack {
    /// Creates a pack in canonical order: Spades, Hearts, Clubs, Diamonds,
    /// each from Nine up to Ace.
    pub fn new() -> Self {
        Self {
            cards: euchre_cards(),
            next: 0,
        }
    }

    /// Reads a pack from whitespace-separated `"<Rank> of <Suit>"` entries
    /// that define the deal order directly.
    ///
    /// The source must hold exactly the 24 distinct Euchre cards; anything
    /// short, malformed, duplicated, or left over is an error.
    pub fn from_reader<R: Read>(mut input: R) -> Result<Self, PackError> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        text.parse()
    }

    /// Deals the next card and advances the cursor.
    pub fn deal_one(&mut self) -> Result<Card, GameError> {
        let card = *self.cards.get(self.next).ok_or(GameError::PackExhausted)?;
        self.next += 1;
        Ok(card)
    }

    /// Rewinds the cursor without reordering.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// Deterministic riffle: split the pack in half and interleave, second
    /// half first, seven times over. Rewinds the cursor.
    pub fn shuffle(&mut self) {
        let half = PACK_SIZE / 2;
        for _ in 0..RIFFLES_PER_SHUFFLE {
            let (first, second) = self.cards.split_at(half);
            self.cards = second
                .iter()
                .zip(first)
                .flat_map(|(&s, &f)| [s, f])
                .collect();
        }
        self.next = 0;
    }

    /// Reorders the pack uniformly at random from `rng`. Rewinds the cursor.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.next = 0;
    }

    pub fn empty(&self) -> bool {
        self.next >= self.cards.len()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.next)
    }

    /// The full pack order, including cards already dealt.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl FromStr for Pack {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let mut cards: Vec<Card> = Vec::with_capacity(PACK_SIZE);

        while cards.len() < PACK_SIZE {
            let entry: Vec<&str> = words.by_ref().take(3).collect();
            if entry.is_empty() {
                return Err(PackError::TooFewCards {
                    found: cards.len(),
                    expected: PACK_SIZE,
                });
            }
            let card: Card = entry
                .join(" ")
                .parse()
                .map_err(|source| PackError::InvalidCard {
                    position: cards.len() + 1,
                    source,
                })?;
            if card.rank < Rank::Nine {
                return Err(PackError::NotEuchreRank(card));
            }
            if cards.contains(&card) {
                return Err(PackError::DuplicateCard(card));
            }
            cards.push(card);
        }

        let extra: Vec<&str> = words.collect();
        if !extra.is_empty() {
            return Err(PackError::TrailingInput {
                expected: PACK_SIZE,
                extra: extra.join(" "),
            });
        }

        Ok(Self { cards, next: 0 })
    }
}
