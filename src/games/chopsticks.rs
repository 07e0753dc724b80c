//! Chopsticks, the finger-counting game.
//!
//! Each player starts with one finger up on each hand. On a turn the mover
//! taps one of their live hands against one of the opponent's live hands,
//! adding the mover's count to the opponent's hand. A hand reaching five or
//! more has five taken off; a hand at zero is dead. A player with no live
//! hand cannot move and loses.
//!
//! Positions built by hand may also leave the player *not* to move without a
//! live hand. Nobody can move there either, and the side that still has a
//! live hand is the winner.
//!
//! Positions can repeat, so the game tree is not finite. Exhaustive search
//! over chopsticks needs a node budget (see `SearchConfig`).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{Game, GameError, GameState, MoveList, Player, LOSE, WIN};

/// Fingers at which a hand wraps around.
const WRAP: u8 = 5;

/// Left or right hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    const BOTH: [Hand; 2] = [Hand::Left, Hand::Right];

    fn letter(self) -> char {
        match self {
            Hand::Left => 'l',
            Hand::Right => 'r',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c {
            'l' => Some(Hand::Left),
            'r' => Some(Hand::Right),
            _ => None,
        }
    }
}

/// A tap: the mover's `from` hand against the opponent's `to` hand.
///
/// Written as two letters, e.g. `lr` is the mover's left on the opponent's right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tap {
    pub from: Hand,
    pub to: Hand,
}

impl Tap {
    #[must_use]
    pub const fn new(from: Hand, to: Hand) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Tap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from.letter(), self.to.letter())
    }
}

impl FromStr for Tap {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut letters = s.chars().map(Hand::from_letter);
        match (letters.next(), letters.next(), letters.next()) {
            (Some(Some(from)), Some(Some(to)), None) => Ok(Tap::new(from, to)),
            _ => Err(GameError::Parse {
                token: s.to_string(),
                expected: "one of ll, lr, rl, rr",
            }),
        }
    }
}

/// Finger counts of one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hands {
    pub left: u8,
    pub right: u8,
}

impl Hands {
    fn new(left: u8, right: u8) -> Self {
        Self {
            left: left % WRAP,
            right: right % WRAP,
        }
    }

    fn get(self, hand: Hand) -> u8 {
        match hand {
            Hand::Left => self.left,
            Hand::Right => self.right,
        }
    }

    fn get_mut(&mut self, hand: Hand) -> &mut u8 {
        match hand {
            Hand::Left => &mut self.left,
            Hand::Right => &mut self.right,
        }
    }

    fn live_count(self) -> u8 {
        u8::from(self.left != 0) + u8::from(self.right != 0)
    }

    fn is_dead(self) -> bool {
        self.live_count() == 0
    }
}

/// A chopsticks position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChopsticksState {
    turn: Player,
    /// Indexed by player: `[p1, p2]`.
    hands: [Hands; 2],
}

impl ChopsticksState {
    /// Create a position. Counts of five or more wrap around.
    #[must_use]
    pub fn new(is_p1_turn: bool, p1_left: u8, p1_right: u8, p2_left: u8, p2_right: u8) -> Self {
        Self {
            turn: Player::from_turn(is_p1_turn),
            hands: [Hands::new(p1_left, p1_right), Hands::new(p2_left, p2_right)],
        }
    }

    /// Finger counts of `player`.
    #[must_use]
    pub fn hands(&self, player: Player) -> Hands {
        self.hands[seat(player)]
    }

    /// The same position seen from the other side: hands swapped between
    /// the players and the turn passed over.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        Self {
            turn: self.turn.opponent(),
            hands: [self.hands[1], self.hands[0]],
        }
    }

    /// Does `tap` leave the opponent with no live hand?
    fn is_finishing(&self, tap: &Tap) -> bool {
        self.make_move(tap).hands(self.turn.opponent()).is_dead()
    }
}

fn seat(player: Player) -> usize {
    match player {
        Player::P1 => 0,
        Player::P2 => 1,
    }
}

impl GameState for ChopsticksState {
    type Move = Tap;

    fn current_player(&self) -> Player {
        self.turn
    }

    fn possible_moves(&self) -> MoveList<Tap> {
        let mine = self.hands(self.turn);
        let theirs = self.hands(self.turn.opponent());

        let mut moves = MoveList::new();
        for from in Hand::BOTH {
            if mine.get(from) == 0 {
                continue;
            }
            for to in Hand::BOTH {
                if theirs.get(to) != 0 {
                    moves.push(Tap::new(from, to));
                }
            }
        }
        moves
    }

    fn is_valid_move(&self, tap: &Tap) -> bool {
        self.hands(self.turn).get(tap.from) != 0
            && self.hands(self.turn.opponent()).get(tap.to) != 0
    }

    fn make_move(&self, tap: &Tap) -> Self {
        assert!(self.is_valid_move(tap), "tap {tap} is not legal in {self}");

        let added = self.hands(self.turn).get(tap.from);
        let mut next = self.clone();
        let target = next.hands[seat(self.turn.opponent())].get_mut(tap.to);
        *target = (*target + added) % WRAP;
        next.turn = self.turn.opponent();
        next
    }

    fn rough_outcome(&self) -> f64 {
        let moves = self.possible_moves();
        if moves.is_empty() {
            return if self.hands(self.turn).is_dead() {
                f64::from(LOSE)
            } else {
                f64::from(WIN)
            };
        }
        if moves.iter().any(|tap| self.is_finishing(tap)) {
            return f64::from(WIN);
        }

        let hopeless = moves.iter().all(|tap| {
            let reply = self.make_move(tap);
            reply
                .possible_moves()
                .iter()
                .any(|counter| reply.is_finishing(counter))
        });
        if hopeless {
            return f64::from(LOSE);
        }

        let mine = f64::from(self.hands(self.turn).live_count());
        let theirs = f64::from(self.hands(self.turn.opponent()).live_count());
        0.25 * (mine - theirs)
    }
}

impl std::fmt::Display for ChopsticksState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [p1, p2] = self.hands;
        write!(f, "p1: {} - {}, p2: {} - {}", p1.left, p1.right, p2.left, p2.right)
    }
}

/// A chopsticks match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chopsticks {
    state: ChopsticksState,
}

impl Chopsticks {
    /// Start a match with one finger up on every hand.
    #[must_use]
    pub fn new(is_p1_turn: bool) -> Self {
        Self {
            state: ChopsticksState::new(is_p1_turn, 1, 1, 1, 1),
        }
    }

    /// Resume a match from an arbitrary position.
    #[must_use]
    pub fn from_state(state: ChopsticksState) -> Self {
        Self { state }
    }
}

impl Game for Chopsticks {
    type State = ChopsticksState;

    fn current_state(&self) -> &ChopsticksState {
        &self.state
    }

    fn set_current_state(&mut self, state: ChopsticksState) {
        self.state = state;
    }

    fn is_over(&self, state: &ChopsticksState) -> bool {
        state.possible_moves().is_empty()
    }

    fn str_to_move(&self, token: &str) -> Result<Tap, GameError> {
        token.trim().parse()
    }

    fn winner_in(&self, state: &ChopsticksState) -> Option<Player> {
        if !self.is_over(state) {
            return None;
        }
        let mover = state.current_player();
        if state.hands(mover).is_dead() {
            Some(mover.opponent())
        } else {
            Some(mover)
        }
    }
}
