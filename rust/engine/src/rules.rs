//! Trump-aware card ordering.
//!
//! Every comparison ranks cards by a strength key `(tier, rank, suit)`. The
//! tier captures the Euchre precedence (bowers, then trump, then the led
//! suit when there is one); rank and the nominal suit order settle cards in
//! the same tier, so both orderings are total and two identical cards are
//! never less than each other.

use std::cmp::Ordering;

use crate::cards::{Card, Rank, Suit};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
enum Tier {
    OffSuit = 0,
    LedSuit = 1,
    Trump = 2,
    LeftBower = 3,
    RightBower = 4,
}

type StrengthKey = (Tier, Rank, Suit);

fn strength(card: &Card, led: Option<&Card>, trump: Suit) -> StrengthKey {
    let tier = if card.is_right_bower(trump) {
        Tier::RightBower
    } else if card.is_left_bower(trump) {
        Tier::LeftBower
    } else if card.is_trump(trump) {
        Tier::Trump
    } else if led.is_some_and(|l| card.effective_suit(trump) == l.effective_suit(trump)) {
        Tier::LedSuit
    } else {
        Tier::OffSuit
    };
    (tier, card.rank, card.suit)
}

/// Orders two cards by raw strength under `trump`, with no trick context.
///
/// Right bower, then left bower, then other trump by rank, then everything
/// else by rank; equal ranks fall back to the nominal suit order.
pub fn compare(a: &Card, b: &Card, trump: Suit) -> Ordering {
    strength(a, None, trump).cmp(&strength(b, None, trump))
}

/// Orders two cards within a trick led by `led`.
///
/// Cards following the led card's effective suit rank above all other
/// non-trump cards.
pub fn compare_led(a: &Card, b: &Card, led: &Card, trump: Suit) -> Ordering {
    strength(a, Some(led), trump).cmp(&strength(b, Some(led), trump))
}

/// Returns true if `a` is strictly weaker than `b` when no suit has been led.
///
/// # Examples
///
/// ```
/// use euchre_engine::cards::{Card, Rank, Suit};
/// use euchre_engine::rules::card_less;
///
/// let right = Card::new(Rank::Jack, Suit::Hearts);
/// let left = Card::new(Rank::Jack, Suit::Diamonds);
/// let nine_trump = Card::new(Rank::Nine, Suit::Hearts);
/// let ace_spades = Card::new(Rank::Ace, Suit::Spades);
///
/// assert!(card_less(&left, &right, Suit::Hearts));
/// assert!(card_less(&ace_spades, &nine_trump, Suit::Hearts));
/// assert!(!card_less(&nine_trump, &ace_spades, Suit::Hearts));
/// ```
pub fn card_less(a: &Card, b: &Card, trump: Suit) -> bool {
    compare(a, b, trump) == Ordering::Less
}

/// Returns true if `a` is strictly weaker than `b` in a trick led by `led`.
///
/// # Examples
///
/// ```
/// use euchre_engine::cards::{Card, Rank, Suit};
/// use euchre_engine::rules::card_less_led;
///
/// let led = Card::new(Rank::Two, Suit::Hearts);
/// let ace_led = Card::new(Rank::Ace, Suit::Hearts);
/// let king_trump = Card::new(Rank::King, Suit::Spades);
/// let jack_diamonds = Card::new(Rank::Jack, Suit::Diamonds);
///
/// assert!(card_less_led(&ace_led, &king_trump, &led, Suit::Spades));
/// assert!(card_less_led(&jack_diamonds, &ace_led, &led, Suit::Spades));
/// ```
pub fn card_less_led(a: &Card, b: &Card, led: &Card, trump: Suit) -> bool {
    compare_led(a, b, led, trump) == Ordering::Less
}

/// Index of the card that takes the trick, where `plays[0]` is the led card
/// and the rest follow in play order.
///
/// A later card only displaces the current winner when strictly stronger, so
/// the first of two equally strong cards keeps the trick. Returns `None` for
/// an empty trick.
pub fn trick_winner(plays: &[Card], trump: Suit) -> Option<usize> {
    let led = plays.first()?;
    let mut best = 0;
    for (i, card) in plays.iter().enumerate().skip(1) {
        if card_less_led(&plays[best], card, led, trump) {
            best = i;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::euchre_cards;

    #[test]
    fn identical_cards_are_equal_in_both_modes() {
        let c = Card::new(Rank::Queen, Suit::Clubs);
        let led = Card::new(Rank::Nine, Suit::Hearts);
        assert_eq!(compare(&c, &c, Suit::Spades), Ordering::Equal);
        assert_eq!(compare_led(&c, &c, &led, Suit::Spades), Ordering::Equal);
    }

    #[test]
    fn distinct_cards_never_tie() {
        let cards = euchre_cards();
        let led = Card::new(Rank::Ten, Suit::Diamonds);
        for trump in Suit::ALL {
            for a in &cards {
                for b in &cards {
                    if a != b {
                        assert_ne!(compare(a, b, trump), Ordering::Equal);
                        assert_ne!(compare_led(a, b, &led, trump), Ordering::Equal);
                    }
                }
            }
        }
    }

    #[test]
    fn trick_winner_keeps_first_of_equal_strength() {
        let led = Card::new(Rank::Ace, Suit::Hearts);
        let plays = [led, Card::new(Rank::King, Suit::Hearts), led];
        assert_eq!(trick_winner(&plays, Suit::Spades), Some(0));
        assert_eq!(trick_winner(&[], Suit::Spades), None);
    }

    #[test]
    fn trick_winner_trump_beats_led_suit() {
        let plays = [
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Diamonds),
        ];
        assert_eq!(trick_winner(&plays, Suit::Spades), Some(1));
    }
}
