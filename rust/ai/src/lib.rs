//! # euchre-ai: Player Strategies for Euchre
//!
//! Implementations of the engine's [`Player`] trait, selected by a
//! [`Strategy`] tag.
//!
//! ## Core Components
//!
//! - [`simple`] - Rule-based automated player
//! - [`human`] - Interactive player reading answers from a terminal
//! - [`create_player`] - Factory function for creating players
//!
//! ## Quick Start
//!
//! ```rust
//! use euchre_ai::{create_player, Strategy};
//!
//! let strategy: Strategy = "Simple".parse().unwrap();
//! let player = create_player("Adi", strategy);
//! assert_eq!(player.name(), "Adi");
//! ```
//!
//! ## Strategy Tags
//!
//! - `"Simple"` - [`simple::SimplePlayer`]
//! - `"Human"` - [`human::HumanPlayer`] on stdin/stdout

use std::fmt;
use std::str::FromStr;

use euchre_engine::player::Player;
use thiserror::Error;

pub mod human;
pub mod simple;

pub use human::HumanPlayer;
pub use simple::SimplePlayer;

/// Which kind of player sits in a seat.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Strategy {
    Simple,
    Human,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Simple, Strategy::Human];

    pub fn tag(self) -> &'static str {
        match self {
            Strategy::Simple => "Simple",
            Strategy::Human => "Human",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown player type {0:?} (expected Simple or Human)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.tag() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Factory function to create a player by strategy.
///
/// The returned handle owns the player; dropping it releases the player.
///
/// # Example
///
/// ```rust
/// use euchre_ai::{create_player, Strategy};
///
/// let players: Vec<_> = ["Adi", "Barbara"]
///     .iter()
///     .map(|n| create_player(n, Strategy::Simple))
///     .collect();
/// assert_eq!(players[1].name(), "Barbara");
/// ```
pub fn create_player(name: &str, strategy: Strategy) -> Box<dyn Player> {
    match strategy {
        Strategy::Simple => Box::new(SimplePlayer::new(name)),
        Strategy::Human => Box::new(HumanPlayer::new(name)),
    }
}
