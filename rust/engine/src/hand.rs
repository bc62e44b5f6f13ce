use crate::cards::Card;
use crate::errors::GameError;

/// Most cards a player holds between tricks.
pub const MAX_HAND_SIZE: usize = 5;

/// The cards a single player holds, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(MAX_HAND_SIZE + 1),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Adds a card, refusing to grow past [`MAX_HAND_SIZE`].
    pub fn add(&mut self, card: Card) -> Result<(), GameError> {
        if self.cards.len() >= MAX_HAND_SIZE {
            return Err(GameError::HandFull {
                max: MAX_HAND_SIZE,
            });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Adds the upcard on top of a full hand. The caller must discard
    /// straight after so the hand returns to [`MAX_HAND_SIZE`].
    pub fn pick_up(&mut self, card: Card) -> Result<(), GameError> {
        if self.cards.len() > MAX_HAND_SIZE {
            return Err(GameError::HandFull {
                max: MAX_HAND_SIZE,
            });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Removes the first card equal to `card`.
    pub fn remove(&mut self, card: &Card) -> Result<Card, GameError> {
        let index = self
            .cards
            .iter()
            .position(|c| c == card)
            .ok_or(GameError::CardNotInHand(*card))?;
        Ok(self.cards.remove(index))
    }

    /// Removes the card at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Card, GameError> {
        if index >= self.cards.len() {
            return Err(GameError::NoSuchCard {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    /// Sorts by the trump-agnostic display ordering.
    pub fn sort(&mut self) {
        self.cards.sort();
    }
}
