use serde::{Deserialize, Serialize};

/// Number of seats at the table.
pub const SEATS: usize = 4;

/// Tricks played in every hand.
pub const TRICKS_PER_HAND: usize = 5;

/// Partnerships: seats 0 and 2 play against seats 1 and 3.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub fn of_seat(seat: usize) -> Team {
        if seat % 2 == 0 { Team::One } else { Team::Two }
    }

    pub fn index(self) -> usize {
        match self {
            Team::One => 0,
            Team::Two => 1,
        }
    }

    pub fn other(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    /// The two seats belonging to this team, lower seat first.
    pub fn seats(self) -> [usize; 2] {
        match self {
            Team::One => [0, 2],
            Team::Two => [1, 3],
        }
    }
}

/// How a hand ended for the team that won it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum HandOutcome {
    /// Makers took three or four tricks.
    Made,
    /// Makers took all five tricks.
    March,
    /// Defenders stopped the makers from taking three.
    Euchred,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandScore {
    pub winner: Team,
    pub outcome: HandOutcome,
    pub points: u32,
}

/// Scores a finished hand from the tricks each team took.
///
/// `tricks_won` is indexed by [`Team::index`] and must sum to five, so one
/// team always takes more tricks than the other.
///
/// ```
/// use euchre_engine::game::{score_hand, HandOutcome, Team};
///
/// let score = score_hand(Team::Two, [3, 2]);
/// assert_eq!(score.winner, Team::One);
/// assert_eq!(score.outcome, HandOutcome::Euchred);
/// assert_eq!(score.points, 2);
/// ```
pub fn score_hand(makers: Team, tricks_won: [u32; 2]) -> HandScore {
    let winner = if tricks_won[0] > tricks_won[1] {
        Team::One
    } else {
        Team::Two
    };
    let (outcome, points) = if winner != makers {
        (HandOutcome::Euchred, 2)
    } else if tricks_won[winner.index()] as usize == TRICKS_PER_HAND {
        (HandOutcome::March, 2)
    } else {
        (HandOutcome::Made, 1)
    };
    HandScore {
        winner,
        outcome,
        points,
    }
}

/// Scores, dealer position, and hand count for one game.
#[derive(Debug, Clone)]
pub struct GameState {
    points_to_win: u32,
    dealer: usize,
    hand_number: u32,
    scores: [u32; 2],
}

impl GameState {
    pub fn new(points_to_win: u32) -> Self {
        Self {
            points_to_win,
            dealer: 0,
            hand_number: 0,
            scores: [0, 0],
        }
    }

    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }
    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }
    pub fn score(&self, team: Team) -> u32 {
        self.scores[team.index()]
    }

    /// Seat `offset` places to the dealer's left.
    pub fn seat_after_dealer(&self, offset: usize) -> usize {
        (self.dealer + offset) % SEATS
    }

    pub fn award(&mut self, score: &HandScore) {
        self.scores[score.winner.index()] += score.points;
    }

    /// Moves the deal one seat to the left and counts the hand.
    pub fn finish_hand(&mut self) {
        self.hand_number += 1;
        self.dealer = (self.dealer + 1) % SEATS;
    }

    pub fn is_over(&self) -> bool {
        self.scores.iter().any(|&s| s >= self.points_to_win)
    }

    /// The team ahead on points; only meaningful once [`Self::is_over`].
    pub fn leader(&self) -> Team {
        if self.scores[0] > self.scores[1] {
            Team::One
        } else {
            Team::Two
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn makers_scoring() {
        assert_eq!(
            score_hand(Team::One, [3, 2]),
            HandScore {
                winner: Team::One,
                outcome: HandOutcome::Made,
                points: 1
            }
        );
        assert_eq!(score_hand(Team::One, [4, 1]).points, 1);
        let march = score_hand(Team::Two, [0, 5]);
        assert_eq!(march.outcome, HandOutcome::March);
        assert_eq!(march.points, 2);
    }

    #[test]
    fn euchre_scores_two_for_defenders() {
        let s = score_hand(Team::One, [2, 3]);
        assert_eq!(s.winner, Team::Two);
        assert_eq!(s.outcome, HandOutcome::Euchred);
        assert_eq!(s.points, 2);
        let s = score_hand(Team::Two, [5, 0]);
        assert_eq!(s.outcome, HandOutcome::Euchred);
        assert_eq!(s.points, 2);
    }

    #[test]
    fn dealer_rotates_clockwise() {
        let mut gs = GameState::new(10);
        assert_eq!(gs.dealer(), 0);
        assert_eq!(gs.seat_after_dealer(1), 1);
        for expected in [1, 2, 3, 0] {
            gs.finish_hand();
            assert_eq!(gs.dealer(), expected);
        }
        assert_eq!(gs.hand_number(), 4);
        assert_eq!(gs.seat_after_dealer(3), 3);
    }

    #[test]
    fn game_ends_at_target() {
        let mut gs = GameState::new(3);
        gs.award(&score_hand(Team::Two, [0, 5]));
        assert!(!gs.is_over());
        gs.award(&score_hand(Team::Two, [1, 4]));
        assert!(gs.is_over());
        assert_eq!(gs.leader(), Team::Two);
        assert_eq!(gs.scores(), [0, 3]);
    }

    #[test]
    fn team_seats() {
        assert_eq!(Team::of_seat(0), Team::One);
        assert_eq!(Team::of_seat(3), Team::Two);
        assert_eq!(Team::One.other(), Team::Two);
        assert_eq!(Team::Two.seats(), [1, 3]);
    }
}
