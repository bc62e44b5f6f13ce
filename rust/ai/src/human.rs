//! Interactive player that asks a person at the terminal for every decision.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use euchre_engine::cards::{Card, Suit};
use euchre_engine::errors::GameError;
use euchre_engine::hand::Hand;
use euchre_engine::player::{BidRound, Player};
use tracing::trace;

/// Answer that discards the upcard itself.
const DISCARD_UPCARD: i64 = -1;

enum Input {
    /// The process-wide stdin buffer, shared by every human seat.
    Stdin,
    Reader(Box<dyn BufRead>),
}

struct Console {
    input: Input,
    output: Box<dyn Write>,
}

impl Console {
    /// Prints `prompt` and returns the next answer, trimmed.
    fn ask(&mut self, prompt: &str, waiting_for: &str) -> Result<String, GameError> {
        writeln!(self.output, "{}", prompt).map_err(io_error)?;
        self.output.flush().map_err(io_error)?;
        let mut line = String::new();
        let read = match &mut self.input {
            Input::Stdin => io::stdin().read_line(&mut line),
            Input::Reader(r) => r.read_line(&mut line),
        }
        .map_err(io_error)?;
        if read == 0 {
            return Err(GameError::InputClosed(waiting_for.to_string()));
        }
        Ok(line.trim().to_string())
    }

    fn print_hand(&mut self, name: &str, hand: &Hand) -> Result<(), GameError> {
        for (i, card) in hand.cards().iter().enumerate() {
            writeln!(self.output, "Human player {}'s hand: [{}] {}", name, i, card)
                .map_err(io_error)?;
        }
        Ok(())
    }

    fn complain(&mut self, message: &str) -> Result<(), GameError> {
        writeln!(self.output, "{}", message).map_err(io_error)
    }
}

fn io_error(e: io::Error) -> GameError {
    GameError::PlayerIo(e.to_string())
}

/// A seat played by a person.
///
/// Prompts go to the output stream and answers are read one per line. The
/// hand is kept in display order and listed before every decision.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use euchre_ai::human::HumanPlayer;
/// use euchre_engine::cards::{Card, Rank, Suit};
/// use euchre_engine::player::{BidRound, Player};
///
/// let mut p = HumanPlayer::with_io("Judea", Cursor::new("pass\n"), Vec::new());
/// p.add_card(Card::new(Rank::Ace, Suit::Clubs)).unwrap();
/// let upcard = Card::new(Rank::Nine, Suit::Hearts);
/// assert_eq!(p.make_trump(&upcard, false, BidRound::First).unwrap(), None);
/// ```
pub struct HumanPlayer {
    name: String,
    hand: Hand,
    console: RefCell<Console>,
}

impl HumanPlayer {
    /// Reads answers from stdin and prompts on stdout.
    pub fn new(name: impl Into<String>) -> Self {
        Self::build(name.into(), Input::Stdin, Box::new(io::stdout()))
    }

    pub fn with_io<R, W>(name: impl Into<String>, input: R, output: W) -> Self
    where
        R: BufRead + 'static,
        W: Write + 'static,
    {
        Self::build(
            name.into(),
            Input::Reader(Box::new(input)),
            Box::new(output),
        )
    }

    fn build(name: String, input: Input, output: Box<dyn Write>) -> Self {
        Self {
            name,
            hand: Hand::new(),
            console: RefCell::new(Console { input, output }),
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Asks for a hand position until a valid one is given.
    fn select_card(&mut self, action: &str) -> Result<Card, GameError> {
        if self.hand.is_empty() {
            return Err(GameError::EmptyHand);
        }
        let console = self.console.get_mut();
        console.print_hand(&self.name, &self.hand)?;
        let prompt = format!("Human player {}, please select a card:", self.name);
        loop {
            let answer = console.ask(&prompt, action)?;
            match answer.parse::<usize>() {
                Ok(index) if index < self.hand.len() => return self.hand.remove_at(index),
                _ => console.complain(&format!(
                    "Invalid card {:?}: enter a number from 0 to {}",
                    answer,
                    self.hand.len().saturating_sub(1)
                ))?,
            }
        }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_card(&mut self, card: Card) -> Result<(), GameError> {
        self.hand.add(card)?;
        self.hand.sort();
        Ok(())
    }

    fn make_trump(
        &self,
        upcard: &Card,
        is_dealer: bool,
        round: BidRound,
    ) -> Result<Option<Suit>, GameError> {
        let mut console = self.console.borrow_mut();
        console.print_hand(&self.name, &self.hand)?;
        let prompt = format!(
            "Human player {}, please enter a suit, or \"pass\":",
            self.name
        );
        loop {
            let answer = console.ask(&prompt, "a bid")?;
            if answer == "pass" {
                if round == BidRound::Second && is_dealer {
                    console.complain("The dealer must name a suit in the second round")?;
                    continue;
                }
                return Ok(None);
            }
            let suit = match answer.parse::<Suit>() {
                Ok(suit) => suit,
                Err(e) => {
                    console.complain(&e.to_string())?;
                    continue;
                }
            };
            let named = match round {
                BidRound::First => upcard.suit,
                BidRound::Second if suit == upcard.suit => {
                    console.complain(&format!("{} was turned down; name another suit", suit))?;
                    continue;
                }
                BidRound::Second => suit,
            };
            trace!(player = %self.name, round = round.number(), %named, "bid");
            return Ok(Some(named));
        }
    }

    fn add_and_discard(&mut self, upcard: &Card) -> Result<(), GameError> {
        let console = self.console.get_mut();
        console.print_hand(&self.name, &self.hand)?;
        self.hand.pick_up(*upcard)?;
        writeln!(console.output, "Discard upcard: [{}]", DISCARD_UPCARD).map_err(io_error)?;
        let prompt = format!(
            "Human player {}, please select a card to discard:",
            self.name
        );
        loop {
            let answer = console.ask(&prompt, "a discard")?;
            match answer.parse::<i64>() {
                Ok(DISCARD_UPCARD) => {
                    self.hand.remove(upcard)?;
                    break;
                }
                Ok(index) if index >= 0 && (index as usize) < self.hand.len() => {
                    self.hand.remove_at(index as usize)?;
                    break;
                }
                _ => console.complain(&format!("Invalid discard {:?}", answer))?,
            }
        }
        self.hand.sort();
        Ok(())
    }

    fn lead_card(&mut self, _trump: Suit) -> Result<Card, GameError> {
        self.select_card("a card to lead")
    }

    fn play_card(&mut self, _led: &Card, _trump: Suit) -> Result<Card, GameError> {
        self.select_card("a card to play")
    }
}
