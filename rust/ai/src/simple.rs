//! Rule-based Euchre strategy.
//!
//! Bids on face cards, discards and sloughs its weakest card, leads its best
//! off-suit card, and follows suit as high as it can.

use euchre_engine::cards::{Card, Suit};
use euchre_engine::errors::GameError;
use euchre_engine::hand::Hand;
use euchre_engine::player::{BidRound, Player};
use euchre_engine::rules::compare;
use tracing::trace;

/// Automated player driven by fixed heuristics.
///
/// # Strategy
///
/// **Bidding:**
/// - Round one: order up the upcard's suit when holding two or more face
///   cards or aces of that suit
/// - Round two: name the upcard's same-color suit when holding at least one
///   face card or ace of it; the dealer always names it
///
/// **Play:**
/// - Discard the weakest card after picking up the upcard
/// - Lead the strongest non-trump card, or the strongest trump if that is
///   all that is left
/// - Follow suit with the strongest matching card, otherwise throw off the
///   weakest card in hand
///
/// # Example
///
/// ```rust
/// use euchre_ai::simple::SimplePlayer;
/// use euchre_engine::cards::{Card, Rank, Suit};
/// use euchre_engine::player::{BidRound, Player};
///
/// let mut p = SimplePlayer::new("Adi");
/// p.add_card(Card::new(Rank::Jack, Suit::Hearts)).unwrap();
/// p.add_card(Card::new(Rank::Ace, Suit::Hearts)).unwrap();
///
/// let upcard = Card::new(Rank::Ten, Suit::Hearts);
/// assert_eq!(p.make_trump(&upcard, false, BidRound::First).unwrap(), Some(Suit::Hearts));
/// ```
#[derive(Debug, Clone)]
pub struct SimplePlayer {
    name: String,
    hand: Hand,
}

impl SimplePlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    fn count_face_or_ace(&self, suit: Suit) -> usize {
        self.hand
            .cards()
            .iter()
            .filter(|c| c.suit == suit && c.is_face_or_ace())
            .count()
    }
}

fn strongest<'a>(cards: impl Iterator<Item = &'a Card>, trump: Suit) -> Option<Card> {
    cards.max_by(|a, b| compare(a, b, trump)).copied()
}

impl Player for SimplePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_card(&mut self, card: Card) -> Result<(), GameError> {
        self.hand.add(card)
    }

    fn make_trump(
        &self,
        upcard: &Card,
        is_dealer: bool,
        round: BidRound,
    ) -> Result<Option<Suit>, GameError> {
        let (candidate, wanted) = match round {
            BidRound::First => (upcard.suit, 2),
            BidRound::Second => (upcard.suit.same_color(), 1),
        };
        let held = self.count_face_or_ace(candidate);
        let forced = round == BidRound::Second && is_dealer;
        let order = held >= wanted || forced;
        trace!(player = %self.name, round = round.number(), held, forced, order, "bid");
        Ok(order.then_some(candidate))
    }

    fn add_and_discard(&mut self, upcard: &Card) -> Result<(), GameError> {
        let trump = upcard.suit;
        self.hand.pick_up(*upcard)?;
        let weakest = self
            .hand
            .cards()
            .iter()
            .copied()
            .min_by(|a, b| compare(a, b, trump))
            .ok_or(GameError::EmptyHand)?;
        trace!(player = %self.name, %weakest, "discard");
        self.hand.remove(&weakest).map(|_| ())
    }

    fn lead_card(&mut self, trump: Suit) -> Result<Card, GameError> {
        let cards = self.hand.cards();
        let card = strongest(cards.iter().filter(|c| !c.is_trump(trump)), trump)
            .or_else(|| strongest(cards.iter(), trump))
            .ok_or(GameError::EmptyHand)?;
        trace!(player = %self.name, %card, %trump, "lead");
        self.hand.remove(&card)
    }

    fn play_card(&mut self, led: &Card, trump: Suit) -> Result<Card, GameError> {
        let led_suit = led.effective_suit(trump);
        let cards = self.hand.cards();
        let card = cards
            .iter()
            .filter(|c| c.effective_suit(trump) == led_suit)
            .max_by(|a, b| compare(a, b, trump))
            .or_else(|| cards.iter().min_by(|a, b| compare(a, b, trump)))
            .copied()
            .ok_or(GameError::EmptyHand)?;
        trace!(player = %self.name, %card, %led, %trump, "play");
        self.hand.remove(&card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euchre_engine::cards::Rank;

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn player_with(cards: &[Card]) -> SimplePlayer {
        let mut p = SimplePlayer::new("Manav");
        for &card in cards {
            p.add_card(card).unwrap();
        }
        p
    }

    #[test]
    fn name_is_kept() {
        assert_eq!(SimplePlayer::new("Alice").name(), "Alice");
    }

    #[test]
    fn sixth_card_is_refused() {
        let mut p = player_with(&[c(Rank::Nine, Suit::Spades); 5]);
        assert_eq!(
            p.add_card(c(Rank::Ace, Suit::Spades)),
            Err(GameError::HandFull { max: 5 })
        );
    }

    #[test]
    fn round_one_needs_two_face_cards_of_upcard_suit() {
        let upcard = c(Rank::Ten, Suit::Hearts);
        let two = player_with(&[
            c(Rank::Five, Suit::Clubs),
            c(Rank::Jack, Suit::Hearts),
            c(Rank::Jack, Suit::Clubs),
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Ace, Suit::Hearts),
        ]);
        assert_eq!(
            two.make_trump(&upcard, false, BidRound::First).unwrap(),
            Some(Suit::Hearts)
        );

        let one = player_with(&[
            c(Rank::Five, Suit::Clubs),
            c(Rank::Jack, Suit::Spades),
            c(Rank::Jack, Suit::Clubs),
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Ace, Suit::Hearts),
        ]);
        assert_eq!(one.make_trump(&upcard, false, BidRound::First).unwrap(), None);

        let off_suit = player_with(&[
            c(Rank::Jack, Suit::Clubs),
            c(Rank::Jack, Suit::Spades),
            c(Rank::Jack, Suit::Clubs),
            c(Rank::Jack, Suit::Clubs),
            c(Rank::Ace, Suit::Spades),
        ]);
        assert_eq!(off_suit.make_trump(&upcard, false, BidRound::First).unwrap(), None);
    }

    #[test]
    fn dealer_is_not_forced_in_round_one() {
        let p = player_with(&[c(Rank::Nine, Suit::Hearts); 5]);
        let upcard = c(Rank::Ten, Suit::Hearts);
        assert_eq!(p.make_trump(&upcard, true, BidRound::First).unwrap(), None);
    }

    #[test]
    fn round_two_names_same_color_suit() {
        let upcard = c(Rank::Jack, Suit::Spades);
        let p = player_with(&[
            c(Rank::Ace, Suit::Clubs),
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Nine, Suit::Hearts),
        ]);
        assert_eq!(
            p.make_trump(&upcard, false, BidRound::Second).unwrap(),
            Some(Suit::Clubs)
        );

        // an ace of the opposite color does not count
        let p = player_with(&[
            c(Rank::Ace, Suit::Spades),
            c(Rank::Nine, Suit::Spades),
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Nine, Suit::Clubs),
        ]);
        let upcard = c(Rank::Nine, Suit::Hearts);
        assert_eq!(p.make_trump(&upcard, false, BidRound::Second).unwrap(), None);
    }

    #[test]
    fn screw_the_dealer() {
        let p = player_with(&[c(Rank::Nine, Suit::Hearts); 5]);
        let upcard = c(Rank::Jack, Suit::Hearts);
        assert_eq!(p.make_trump(&upcard, false, BidRound::Second).unwrap(), None);
        assert_eq!(
            p.make_trump(&upcard, true, BidRound::Second).unwrap(),
            Some(Suit::Diamonds)
        );
    }

    #[test]
    fn discard_drops_weakest_card() {
        let mut p = player_with(&[
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Ace, Suit::Clubs),
            c(Rank::King, Suit::Clubs),
            c(Rank::Ten, Suit::Clubs),
            c(Rank::Jack, Suit::Clubs),
        ]);
        p.add_and_discard(&c(Rank::Queen, Suit::Hearts)).unwrap();
        assert_eq!(p.hand().len(), 5);
        assert!(!p.hand().contains(&c(Rank::Nine, Suit::Clubs)));
        assert!(p.hand().contains(&c(Rank::Queen, Suit::Hearts)));
    }

    #[test]
    fn discard_can_drop_the_upcard() {
        let mut p = player_with(&[
            c(Rank::Ten, Suit::Spades),
            c(Rank::Ace, Suit::Spades),
            c(Rank::King, Suit::Spades),
            c(Rank::Ten, Suit::Spades),
            c(Rank::Jack, Suit::Spades),
        ]);
        let upcard = c(Rank::Nine, Suit::Spades);
        p.add_and_discard(&upcard).unwrap();
        assert!(!p.hand().contains(&upcard));
    }

    #[test]
    fn discard_prefers_off_suit_and_breaks_ties_by_suit() {
        let mut p = player_with(&[
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Ace, Suit::Spades),
            c(Rank::King, Suit::Hearts),
            c(Rank::Ten, Suit::Hearts),
            c(Rank::Jack, Suit::Hearts),
        ]);
        p.add_and_discard(&c(Rank::Ten, Suit::Hearts)).unwrap();
        assert!(!p.hand().contains(&c(Rank::Nine, Suit::Clubs)));

        let mut p = player_with(&[
            c(Rank::Nine, Suit::Spades),
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Ten, Suit::Hearts),
            c(Rank::Queen, Suit::Diamonds),
            c(Rank::King, Suit::Diamonds),
        ]);
        p.add_and_discard(&c(Rank::Ace, Suit::Hearts)).unwrap();
        assert!(!p.hand().contains(&c(Rank::Nine, Suit::Spades)));
        assert!(p.hand().contains(&c(Rank::Nine, Suit::Clubs)));
    }

    #[test]
    fn lead_prefers_best_off_suit_card() {
        let mut p = player_with(&[
            c(Rank::Nine, Suit::Spades),
            c(Rank::Ten, Suit::Clubs),
            c(Rank::Jack, Suit::Hearts),
            c(Rank::Queen, Suit::Hearts),
            c(Rank::King, Suit::Diamonds),
        ]);
        assert_eq!(p.lead_card(Suit::Hearts).unwrap(), c(Rank::King, Suit::Diamonds));

        let mut p = player_with(&[
            c(Rank::Ace, Suit::Spades),
            c(Rank::Ace, Suit::Hearts),
            c(Rank::Ace, Suit::Clubs),
            c(Rank::Ace, Suit::Diamonds),
            c(Rank::King, Suit::Clubs),
        ]);
        assert_eq!(p.lead_card(Suit::Clubs).unwrap(), c(Rank::Ace, Suit::Diamonds));
    }

    #[test]
    fn all_trump_hand_leads_a_bower() {
        let mut p = player_with(&[
            c(Rank::Nine, Suit::Spades),
            c(Rank::Ten, Suit::Spades),
            c(Rank::Jack, Suit::Clubs),
            c(Rank::Queen, Suit::Spades),
            c(Rank::King, Suit::Spades),
        ]);
        let first = p.lead_card(Suit::Spades).unwrap();
        assert_eq!(first, c(Rank::Jack, Suit::Clubs));
        let second = p.lead_card(Suit::Spades).unwrap();
        assert_eq!(second, c(Rank::King, Suit::Spades));
        assert_eq!(p.hand().len(), 3);
    }

    #[test]
    fn follow_suit_with_highest_card() {
        let mut p = player_with(&[
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Ten, Suit::Clubs),
            c(Rank::Jack, Suit::Clubs),
            c(Rank::Jack, Suit::Spades),
            c(Rank::King, Suit::Hearts),
        ]);
        // the jack of clubs is the left bower and no longer a club
        let played = p.play_card(&c(Rank::Nine, Suit::Clubs), Suit::Spades).unwrap();
        assert_eq!(played, c(Rank::Ten, Suit::Clubs));
    }

    #[test]
    fn cannot_follow_throws_off_weakest() {
        let mut p = player_with(&[
            c(Rank::Nine, Suit::Spades),
            c(Rank::Ten, Suit::Diamonds),
            c(Rank::Jack, Suit::Spades),
            c(Rank::King, Suit::Hearts),
            c(Rank::Queen, Suit::Hearts),
        ]);
        let played = p.play_card(&c(Rank::Nine, Suit::Clubs), Suit::Hearts).unwrap();
        assert_eq!(played, c(Rank::Nine, Suit::Spades));
    }

    #[test]
    fn left_bower_follows_trump_lead() {
        let mut p = player_with(&[
            c(Rank::Jack, Suit::Clubs),
            c(Rank::King, Suit::Clubs),
            c(Rank::Queen, Suit::Diamonds),
            c(Rank::King, Suit::Hearts),
            c(Rank::Ten, Suit::Spades),
        ]);
        let played = p.play_card(&c(Rank::Ace, Suit::Spades), Suit::Spades).unwrap();
        assert_eq!(played, c(Rank::Jack, Suit::Clubs));
    }

    #[test]
    fn empty_hand_cannot_lead_or_play() {
        let mut p = SimplePlayer::new("Empty");
        assert_eq!(p.lead_card(Suit::Hearts), Err(GameError::EmptyHand));
        assert_eq!(
            p.play_card(&c(Rank::Nine, Suit::Hearts), Suit::Hearts),
            Err(GameError::EmptyHand)
        );
    }
}
