use std::io::Write;

use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::cards::{Card, Suit};
use crate::errors::{EngineError, GameError};
use crate::game::{score_hand, GameState, HandOutcome, Team, SEATS, TRICKS_PER_HAND};
use crate::logger::{Bid, HandLogger, HandRecord, TrickRecord};
use crate::pack::{Pack, ShuffleMode};
use crate::player::{BidRound, Player};
use crate::rules::trick_winner;

/// Cards handed to each seat, starting left of the dealer: two passes of
/// 3-2-3-2 then 2-3-2-3.
const DEAL_BATCHES: [usize; 8] = [3, 2, 3, 2, 2, 3, 2, 3];

/// Runs a four-handed game of Euchre and writes its transcript.
///
/// Seats 0 and 2 form [`Team::One`], seats 1 and 3 form [`Team::Two`]. The
/// first hand is dealt by seat 0 and the deal moves one seat left per hand.
///
/// # Examples
///
/// ```
/// use euchre_engine::cards::{Card, Suit};
/// use euchre_engine::engine::Engine;
/// use euchre_engine::errors::GameError;
/// use euchre_engine::hand::Hand;
/// use euchre_engine::pack::{Pack, ShuffleMode};
/// use euchre_engine::player::{BidRound, Player};
///
/// struct Eager {
///     name: String,
///     hand: Hand,
/// }
///
/// impl Player for Eager {
///     fn name(&self) -> &str {
///         &self.name
///     }
///     fn add_card(&mut self, card: Card) -> Result<(), GameError> {
///         self.hand.add(card)
///     }
///     fn make_trump(&self, upcard: &Card, _: bool, _: BidRound)
///         -> Result<Option<Suit>, GameError> {
///         Ok(Some(upcard.suit))
///     }
///     fn add_and_discard(&mut self, upcard: &Card) -> Result<(), GameError> {
///         self.hand.pick_up(*upcard)?;
///         self.hand.remove_at(0).map(|_| ())
///     }
///     fn lead_card(&mut self, _: Suit) -> Result<Card, GameError> {
///         self.hand.remove_at(0)
///     }
///     fn play_card(&mut self, _: &Card, _: Suit) -> Result<Card, GameError> {
///         self.hand.remove_at(0)
///     }
/// }
///
/// let players: [Box<dyn Player>; 4] = ["a", "b", "c", "d"].map(|n| {
///     Box::new(Eager { name: n.to_string(), hand: Hand::new() }) as Box<dyn Player>
/// });
/// let mut engine = Engine::new(Pack::new(), ShuffleMode::NoShuffle, 1, players);
/// let mut transcript = Vec::new();
/// let record = engine.play_hand(&mut transcript).unwrap();
/// assert_eq!(record.tricks.len(), 5);
/// assert!(String::from_utf8(transcript).unwrap().starts_with("Hand 0\na deals\n"));
/// ```
pub struct Engine {
    pack: Pack,
    shuffle: ShuffleMode,
    rng: Option<ChaCha20Rng>,
    players: [Box<dyn Player>; SEATS],
    state: GameState,
    logger: HandLogger,
}

impl Engine {
    /// A riffled pack is shuffled here once and again before every hand, so
    /// the permutations compound.
    pub fn new(
        mut pack: Pack,
        shuffle: ShuffleMode,
        points_to_win: u32,
        players: [Box<dyn Player>; SEATS],
    ) -> Self {
        let rng = match shuffle {
            ShuffleMode::Random(seed) => Some(ChaCha20Rng::seed_from_u64(seed)),
            ShuffleMode::Riffle => {
                pack.shuffle();
                None
            }
            ShuffleMode::NoShuffle => None,
        };
        Self {
            pack,
            shuffle,
            rng,
            players,
            state: GameState::new(points_to_win),
            logger: HandLogger::detached(&Utc::now().format("%Y%m%d").to_string()),
        }
    }

    /// Appends every finished hand to `logger`.
    pub fn with_hand_logger(mut self, logger: HandLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Releases the hand logger so a following game can keep numbering hands.
    pub fn into_hand_logger(self) -> HandLogger {
        self.logger
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays hands until one team reaches the target, then announces and
    /// returns the winners.
    pub fn play(&mut self, out: &mut dyn Write) -> Result<Team, EngineError> {
        while !self.state.is_over() {
            self.play_hand(out)?;
        }
        let winner = self.state.leader();
        writeln!(out, "{} win!", self.team_names(winner))?;
        info!(?winner, scores = ?self.state.scores(), "game over");
        Ok(winner)
    }

    /// Deals, bids, plays five tricks, and scores a single hand.
    pub fn play_hand(&mut self, out: &mut dyn Write) -> Result<HandRecord, EngineError> {
        self.prepare_pack();
        let dealer = self.state.dealer();
        let hand_number = self.state.hand_number();
        writeln!(out, "Hand {}", hand_number)?;
        writeln!(out, "{} deals", self.players[dealer].name())?;

        self.deal()?;
        let upcard = self.pack.deal_one()?;
        writeln!(out, "{} turned up", upcard)?;
        debug!(hand = hand_number, dealer, %upcard, "dealt");

        let bid = self.make_trump(&upcard, out)?;
        writeln!(out)?;

        let tricks = self.play_tricks(bid.trump, out)?;
        let mut tricks_won = [0u32; 2];
        for trick in &tricks {
            tricks_won[Team::of_seat(trick.winner).index()] += 1;
        }

        let score = score_hand(Team::of_seat(bid.seat), tricks_won);
        self.state.award(&score);
        writeln!(out, "{} win the hand", self.team_names(score.winner))?;
        match score.outcome {
            HandOutcome::March => writeln!(out, "march!")?,
            HandOutcome::Euchred => writeln!(out, "euchred!")?,
            HandOutcome::Made => {}
        }
        for team in [Team::One, Team::Two] {
            writeln!(
                out,
                "{} have {} points",
                self.team_names(team),
                self.state.score(team)
            )?;
        }
        writeln!(out)?;
        info!(
            hand = hand_number,
            winner = ?score.winner,
            outcome = ?score.outcome,
            points = score.points,
            "hand scored"
        );

        let record = HandRecord {
            hand_id: self.logger.next_id(),
            hand_number,
            dealer,
            upcard,
            bid,
            tricks,
            tricks_won,
            winner: score.winner,
            outcome: score.outcome,
            points: score.points,
            scores: self.state.scores(),
            ts: None,
        };
        self.logger.write(&record)?;
        self.state.finish_hand();
        Ok(record)
    }

    fn prepare_pack(&mut self) {
        match (self.shuffle, self.rng.as_mut()) {
            (ShuffleMode::Riffle, _) => self.pack.shuffle(),
            (ShuffleMode::Random(_), Some(rng)) => self.pack.shuffle_with(rng),
            _ => self.pack.reset(),
        }
    }

    fn deal(&mut self) -> Result<(), GameError> {
        for (i, &batch) in DEAL_BATCHES.iter().enumerate() {
            let seat = self.state.seat_after_dealer(1 + i % SEATS);
            for _ in 0..batch {
                let card = self.pack.deal_one()?;
                self.players[seat].add_card(card)?;
            }
        }
        Ok(())
    }

    fn make_trump(&mut self, upcard: &Card, out: &mut dyn Write) -> Result<Bid, EngineError> {
        let dealer = self.state.dealer();
        for round in [BidRound::First, BidRound::Second] {
            for offset in 1..=SEATS {
                let seat = self.state.seat_after_dealer(offset);
                let player = &self.players[seat];
                let Some(suit) = player.make_trump(upcard, seat == dealer, round)? else {
                    writeln!(out, "{} passes", player.name())?;
                    continue;
                };
                // first round can only order up the upcard's suit
                let trump = match round {
                    BidRound::First => upcard.suit,
                    BidRound::Second => suit,
                };
                writeln!(out, "{} orders up {}", player.name(), trump)?;
                debug!(seat, round = round.number(), %trump, "trump made");
                if round == BidRound::First {
                    self.players[dealer].add_and_discard(upcard)?;
                }
                return Ok(Bid { seat, round, trump });
            }
        }
        Err(GameError::NoTrumpMade.into())
    }

    fn play_tricks(
        &mut self,
        trump: Suit,
        out: &mut dyn Write,
    ) -> Result<Vec<TrickRecord>, EngineError> {
        let mut leader = self.state.seat_after_dealer(1);
        let mut tricks = Vec::with_capacity(TRICKS_PER_HAND);
        for _ in 0..TRICKS_PER_HAND {
            let led = self.players[leader].lead_card(trump)?;
            writeln!(out, "{} led by {}", led, self.players[leader].name())?;
            let mut plays = vec![(leader, led)];
            for offset in 1..SEATS {
                let seat = (leader + offset) % SEATS;
                let card = self.players[seat].play_card(&led, trump)?;
                writeln!(out, "{} played by {}", card, self.players[seat].name())?;
                plays.push((seat, card));
            }

            let cards: Vec<Card> = plays.iter().map(|&(_, card)| card).collect();
            let winner = trick_winner(&cards, trump).map_or(leader, |i| plays[i].0);
            writeln!(out, "{} takes the trick", self.players[winner].name())?;
            writeln!(out)?;
            debug!(leader, winner, "trick played");

            tricks.push(TrickRecord {
                leader,
                plays,
                winner,
            });
            leader = winner;
        }
        Ok(tricks)
    }

    fn team_names(&self, team: Team) -> String {
        let [a, b] = team.seats();
        format!("{} and {}", self.players[a].name(), self.players[b].name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Hand;

    /// Passes unless it is the dealer in round two; plays its first card.
    struct Passive {
        name: String,
        hand: Hand,
    }

    impl Player for Passive {
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
            Ok((is_dealer && round == BidRound::Second).then(|| upcard.suit.same_color()))
        }
        fn add_and_discard(&mut self, upcard: &Card) -> Result<(), GameError> {
            self.hand.pick_up(*upcard)?;
            self.hand.remove_at(0).map(|_| ())
        }
        fn lead_card(&mut self, _trump: Suit) -> Result<Card, GameError> {
            self.hand.remove_at(0)
        }
        fn play_card(&mut self, _led: &Card, _trump: Suit) -> Result<Card, GameError> {
            self.hand.remove_at(0)
        }
    }

    fn table() -> [Box<dyn Player>; SEATS] {
        ["a", "b", "c", "d"].map(|n| {
            Box::new(Passive {
                name: n.to_string(),
                hand: Hand::new(),
            }) as Box<dyn Player>
        })
    }

    #[test]
    fn deal_follows_batches_left_of_dealer() {
        let mut engine = Engine::new(Pack::new(), ShuffleMode::NoShuffle, 10, table());
        engine.deal().unwrap();
        assert_eq!(engine.pack.remaining(), 4);
        // every seat is full, so a sixth card is refused
        for seat in 0..SEATS {
            let extra = Card::new(crate::cards::Rank::Two, Suit::Spades);
            assert!(engine.players[seat].add_card(extra).is_err());
        }
        assert_eq!(engine.state.dealer(), 0);
    }

    #[test]
    fn dealer_is_forced_in_second_round() {
        let mut engine = Engine::new(Pack::new(), ShuffleMode::NoShuffle, 10, table());
        let mut out = Vec::new();
        let record = engine.play_hand(&mut out).unwrap();
        assert_eq!(record.bid.seat, 0);
        assert_eq!(record.bid.round, BidRound::Second);
        assert_eq!(record.bid.trump, record.upcard.suit.same_color());
        assert_eq!(record.tricks_won.iter().sum::<u32>(), 5);
        assert_eq!(engine.state.dealer(), 1);
    }

    #[test]
    fn random_mode_is_reproducible() {
        let mut a = Engine::new(Pack::new(), ShuffleMode::Random(7), 10, table());
        let mut b = Engine::new(Pack::new(), ShuffleMode::Random(7), 10, table());
        let ra = a.play_hand(&mut Vec::new()).unwrap();
        let rb = b.play_hand(&mut Vec::new()).unwrap();
        assert_eq!(ra.upcard, rb.upcard);
        assert_eq!(ra.tricks, rb.tricks);
    }

    #[test]
    fn game_ends_with_announcement() {
        let mut engine = Engine::new(Pack::new(), ShuffleMode::Riffle, 3, table());
        let mut out = Vec::new();
        let winner = engine.play(&mut out).unwrap();
        assert!(engine.state.score(winner) >= 3);
        let text = String::from_utf8(out).unwrap();
        let last = text.lines().last().unwrap();
        assert!(last.ends_with(" win!"));
    }
}
