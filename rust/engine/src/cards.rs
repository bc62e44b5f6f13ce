use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseCardError;

/// Represents one of the four suits.
///
/// Declaration order is the fixed nominal order used to break ties between
/// cards of equal strength: Spades < Hearts < Clubs < Diamonds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
}

impl Suit {
    /// All four suits in nominal order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    /// Returns the other suit of the same color.
    ///
    /// Spades pair with Clubs and Hearts pair with Diamonds. Applying this
    /// twice returns the original suit.
    ///
    /// ```
    /// use euchre_engine::cards::Suit;
    ///
    /// assert_eq!(Suit::Hearts.same_color(), Suit::Diamonds);
    /// assert_eq!(Suit::Clubs.same_color().same_color(), Suit::Clubs);
    /// ```
    pub fn same_color(self) -> Suit {
        match self {
            Suit::Spades => Suit::Clubs,
            Suit::Clubs => Suit::Spades,
            Suit::Hearts => Suit::Diamonds,
            Suit::Diamonds => Suit::Hearts,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| ParseCardError::UnknownSuit(s.to_string()))
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
///
/// Only [`Rank::EUCHRE`] ranks (Nine through Ace) make up a pack. Lower ranks
/// exist so that placeholder cards such as [`Card::default`] are representable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// The six ranks of a Euchre pack, lowest first.
    pub const EUCHRE: [Rank; 6] = [
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    const ALL: [Rank; 13] = [
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
        Rank::Ace,
    ];

    pub fn is_face_or_ace(self) -> bool {
        self >= Rank::Jack
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .into_iter()
            .find(|rank| rank.name() == s)
            .ok_or_else(|| ParseCardError::UnknownRank(s.to_string()))
    }
}

/// Represents a single playing card with a rank and suit.
///
/// The derived ordering compares rank first and suit second. It knows nothing
/// about trump and is only used to sort hands for display; trick resolution
/// goes through [`crate::rules`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Default for Card {
    /// The Two of Spades, a placeholder that never appears in a pack.
    fn default() -> Self {
        Card::new(Rank::Two, Suit::Spades)
    }
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn is_face_or_ace(&self) -> bool {
        self.rank.is_face_or_ace()
    }

    /// True for the Jack of the trump suit.
    pub fn is_right_bower(&self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump
    }

    /// True for the Jack of the suit sharing trump's color.
    pub fn is_left_bower(&self, trump: Suit) -> bool {
        self.rank == Rank::Jack && self.suit == trump.same_color()
    }

    /// True for any card of the trump suit and for the left bower.
    pub fn is_trump(&self, trump: Suit) -> bool {
        self.suit == trump || self.is_left_bower(trump)
    }

    /// The suit this card counts as when following suit.
    ///
    /// ```
    /// use euchre_engine::cards::{Card, Rank, Suit};
    ///
    /// let jack = Card::new(Rank::Jack, Suit::Clubs);
    /// assert_eq!(jack.effective_suit(Suit::Spades), Suit::Spades);
    /// assert_eq!(jack.effective_suit(Suit::Hearts), Suit::Clubs);
    /// ```
    pub fn effective_suit(&self, trump: Suit) -> Suit {
        if self.is_left_bower(trump) {
            trump
        } else {
            self.suit
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses `"<Rank> of <Suit>"`, tolerating any whitespace between words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            [rank, "of", suit] => Ok(Card::new(rank.parse()?, suit.parse()?)),
            _ => Err(ParseCardError::Malformed(s.to_string())),
        }
    }
}

/// All 24 Euchre cards in canonical pack order: suits in nominal order, and
/// Nine through Ace within each suit.
pub fn euchre_cards() -> Vec<Card> {
    let mut v = Vec::with_capacity(Suit::ALL.len() * Rank::EUCHRE.len());
    for &s in &Suit::ALL {
        for &r in &Rank::EUCHRE {
            v.push(Card::new(r, s));
        }
    }
    v
}
