use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::errors::GameError;

/// Which pass around the table a bid is made in.
///
/// In the first round only the upcard's suit may be ordered up. In the
/// second round any other suit may be named, and the dealer may not pass.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum BidRound {
    First,
    Second,
}

impl BidRound {
    pub fn number(self) -> u8 {
        match self {
            BidRound::First => 1,
            BidRound::Second => 2,
        }
    }
}

/// The decisions a seat at the table makes during a hand.
///
/// Every player owns its hand exclusively; the game only passes cards in and
/// receives the cards played back. Trump, the led card, the bidding round,
/// and the dealer flag are always supplied by the caller.
///
/// # Example Implementation
///
/// ```rust
/// use euchre_engine::cards::{Card, Suit};
/// use euchre_engine::errors::GameError;
/// use euchre_engine::hand::Hand;
/// use euchre_engine::player::{BidRound, Player};
///
/// struct FirstCard {
///     hand: Hand,
/// }
///
/// impl Player for FirstCard {
///     fn name(&self) -> &str {
///         "FirstCard"
///     }
///     fn add_card(&mut self, card: Card) -> Result<(), GameError> {
///         self.hand.add(card)
///     }
///     fn make_trump(&self, upcard: &Card, is_dealer: bool, round: BidRound)
///         -> Result<Option<Suit>, GameError> {
///         Ok((round == BidRound::Second && is_dealer).then(|| upcard.suit.same_color()))
///     }
///     fn add_and_discard(&mut self, upcard: &Card) -> Result<(), GameError> {
///         self.hand.pick_up(*upcard)?;
///         self.hand.remove_at(0).map(|_| ())
///     }
///     fn lead_card(&mut self, _trump: Suit) -> Result<Card, GameError> {
///         self.hand.remove_at(0)
///     }
///     fn play_card(&mut self, _led: &Card, _trump: Suit) -> Result<Card, GameError> {
///         self.hand.remove_at(0)
///     }
/// }
/// ```
pub trait Player {
    fn name(&self) -> &str;

    /// Receives a dealt card. Fails once the hand already holds five.
    fn add_card(&mut self, card: Card) -> Result<(), GameError>;

    /// Decides whether to name trump, returning the chosen suit or `None`
    /// to pass.
    fn make_trump(
        &self,
        upcard: &Card,
        is_dealer: bool,
        round: BidRound,
    ) -> Result<Option<Suit>, GameError>;

    /// Dealer only: takes the upcard into hand and discards one card.
    fn add_and_discard(&mut self, upcard: &Card) -> Result<(), GameError>;

    /// Removes and returns the card to lead a trick with.
    fn lead_card(&mut self, trump: Suit) -> Result<Card, GameError>;

    /// Removes and returns the card to play after `led` was led.
    fn play_card(&mut self, led: &Card, trump: Suit) -> Result<Card, GameError>;
}
