//! # euchre-engine: Euchre Game Engine Core
//!
//! A four-handed Euchre engine: the 24-card pack, trump-aware card
//! comparison, the `Player` capability trait, scoring, and the hand loop
//! that deals, bids, plays tricks, and writes a game transcript.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and trump predicates
//! - [`rules`] - Card comparison with and without a led card, trick winners
//! - [`pack`] - The 24-card pack, the deterministic riffle, and pack files
//! - [`hand`] - A player's bounded hand of cards
//! - [`player`] - The decisions every seat makes
//! - [`game`] - Teams, hand scoring, and game state
//! - [`engine`] - Main game orchestration and hand execution
//! - [`logger`] - HandRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use euchre_engine::cards::{Card, Rank, Suit};
//! use euchre_engine::rules::{card_less, card_less_led};
//!
//! let right = Card::new(Rank::Jack, Suit::Hearts);
//! let left = Card::new(Rank::Jack, Suit::Diamonds);
//! let ace = Card::new(Rank::Ace, Suit::Hearts);
//!
//! // With Hearts as trump the bowers outrank the ace of trump
//! assert!(card_less(&left, &right, Suit::Hearts));
//! assert!(card_less(&ace, &left, Suit::Hearts));
//!
//! // A card that cannot follow the led suit never wins the trick
//! let led = Card::new(Rank::Nine, Suit::Clubs);
//! let off = Card::new(Rank::Ace, Suit::Spades);
//! assert!(card_less_led(&off, &led, &led, Suit::Hearts));
//! ```
//!
//! ## Deterministic Dealing
//!
//! The riffle is a fixed permutation, and seeded random shuffles are
//! reproducible:
//!
//! ```rust
//! use euchre_engine::pack::Pack;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut a = Pack::new();
//! let mut b = Pack::new();
//! a.shuffle_with(&mut ChaCha20Rng::seed_from_u64(42));
//! b.shuffle_with(&mut ChaCha20Rng::seed_from_u64(42));
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod pack;
pub mod player;
pub mod rules;
