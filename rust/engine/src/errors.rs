use thiserror::Error;

use crate::cards::Card;

/// Precondition violations and interactive input failures raised while a
/// hand is being played.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Hand already holds {max} cards")]
    HandFull { max: usize },
    #[error("{0} is not in hand")]
    CardNotInHand(Card),
    #[error("No card at hand position {index} (hand holds {len})")]
    NoSuchCard { index: usize, len: usize },
    #[error("Hand is empty")]
    EmptyHand,
    #[error("Pack is exhausted")]
    PackExhausted,
    #[error("No player named trump after two rounds")]
    NoTrumpMade,
    #[error("Input closed while waiting for {0}")]
    InputClosed(String),
    #[error("Player I/O failed: {0}")]
    PlayerIo(String),
}

/// Failure to read a rank, suit, or card from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("Unrecognized suit: {0:?}")]
    UnknownSuit(String),
    #[error("Unrecognized rank: {0:?}")]
    UnknownRank(String),
    #[error("Expected \"<Rank> of <Suit>\", got {0:?}")]
    Malformed(String),
}

/// Failure to load a pack from an external ordered source.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("Failed to read pack: {0}")]
    Io(#[from] std::io::Error),
    #[error("Card {position} of pack is invalid: {source}")]
    InvalidCard {
        position: usize,
        #[source]
        source: ParseCardError,
    },
    #[error("Pack holds only {found} cards, expected {expected}")]
    TooFewCards { found: usize, expected: usize },
    #[error("Unexpected content after card {expected}: {extra:?}")]
    TrailingInput { expected: usize, extra: String },
    #[error("{0} cannot appear in a Euchre pack")]
    NotEuchreRank(Card),
    #[error("{0} appears more than once in pack")]
    DuplicateCard(Card),
}

/// Errors surfaced by [`crate::engine::Engine`] while running a game.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Failed to write game transcript: {0}")]
    Io(#[from] std::io::Error),
}
