//! Subtract-a-square.
//!
//! Players alternately subtract a positive perfect square, no larger than
//! the current value, from a shared counter. The player left facing zero
//! has no move and loses.

use serde::{Deserialize, Serialize};

use crate::core::{Game, GameError, GameState, MoveList, Player, DRAW, LOSE, WIN};

/// Counter position in a subtract-a-square game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtractState {
    turn: Player,
    current: u32,
}

impl SubtractState {
    /// Create a state with `current` left on the counter.
    #[must_use]
    pub fn new(is_p1_turn: bool, current: u32) -> Self {
        Self {
            turn: Player::from_turn(is_p1_turn),
            current,
        }
    }

    /// Value left on the counter.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Same counter with the other player to move.
    #[must_use]
    pub fn with_turn_flipped(&self) -> Self {
        Self {
            turn: self.turn.opponent(),
            current: self.current,
        }
    }

    /// Can the player to move take everything that is left?
    fn has_immediate_win(&self) -> bool {
        self.current > 0 && is_square(self.current)
    }
}

/// Is `n` a positive perfect square?
fn is_square(n: u32) -> bool {
    if n == 0 {
        return false;
    }
    let root = f64::from(n).sqrt() as u32;
    // Float roots can be off by one near large squares.
    (root.saturating_sub(1)..=root + 1).any(|r| r.checked_mul(r) == Some(n))
}

impl GameState for SubtractState {
    type Move = u32;

    fn current_player(&self) -> Player {
        self.turn
    }

    fn possible_moves(&self) -> MoveList<u32> {
        (1u32..)
            .map_while(|k| k.checked_mul(k))
            .take_while(|&square| square <= self.current)
            .collect()
    }

    fn is_valid_move(&self, mv: &u32) -> bool {
        *mv <= self.current && is_square(*mv)
    }

    fn make_move(&self, mv: &u32) -> Self {
        assert!(
            self.is_valid_move(mv),
            "cannot subtract {mv} from {}",
            self.current
        );
        Self {
            turn: self.turn.opponent(),
            current: self.current - mv,
        }
    }

    fn rough_outcome(&self) -> f64 {
        if self.current == 0 {
            return f64::from(LOSE);
        }
        if self.has_immediate_win() {
            return f64::from(WIN);
        }
        let moves = self.possible_moves();
        if moves.iter().all(|mv| self.make_move(mv).has_immediate_win()) {
            f64::from(LOSE)
        } else {
            f64::from(DRAW)
        }
    }
}

impl std::fmt::Display for SubtractState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The current number is: {}", self.current)
    }
}

/// A subtract-a-square match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubtractSquare {
    state: SubtractState,
}

impl SubtractSquare {
    /// Start a match at `start`.
    #[must_use]
    pub fn new(is_p1_turn: bool, start: u32) -> Self {
        Self {
            state: SubtractState::new(is_p1_turn, start),
        }
    }
}

impl Game for SubtractSquare {
    type State = SubtractState;

    fn current_state(&self) -> &SubtractState {
        &self.state
    }

    fn set_current_state(&mut self, state: SubtractState) {
        self.state = state;
    }

    fn is_over(&self, state: &SubtractState) -> bool {
        state.current == 0
    }

    fn str_to_move(&self, token: &str) -> Result<u32, GameError> {
        token.trim().parse().map_err(|_| GameError::Parse {
            token: token.to_string(),
            expected: "a non-negative integer",
        })
    }
}

impl std::fmt::Display for SubtractSquare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.state.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_possible_moves() {
        assert_eq!(SubtractState::new(true, 8).possible_moves().as_slice(), &[1, 4]);
        assert_eq!(
            SubtractState::new(true, 20).possible_moves().as_slice(),
            &[1, 4, 9, 16]
        );
        assert!(SubtractState::new(true, 0).possible_moves().is_empty());
    }

    #[test]
    fn test_is_valid_move() {
        let state = SubtractState::new(true, 8);
        assert!(state.is_valid_move(&4));
        assert!(!state.is_valid_move(&0));
        assert!(!state.is_valid_move(&3));
        assert!(!state.is_valid_move(&9));
    }

    #[test]
    fn test_is_square() {
        let squares: Vec<u32> = (0..=50).filter(|&n| is_square(n)).collect();
        assert_eq!(squares, vec![1, 4, 9, 16, 25, 36, 49]);
        assert!(is_square(65_535 * 65_535));
        assert!(!is_square(65_535 * 65_535 - 1));
    }

    #[test]
    fn test_make_move_returns_new_state() {
        let state = SubtractState::new(true, 8);
        let next = state.make_move(&4);

        assert_eq!(next, SubtractState::new(false, 4));
        assert_eq!(state, SubtractState::new(true, 8));
    }

    #[test]
    #[should_panic(expected = "cannot subtract 3 from 8")]
    fn test_make_move_invalid_panics() {
        let _ = SubtractState::new(true, 8).make_move(&3);
    }

    #[test]
    fn test_rough_outcome() {
        // Terminal: the player to move has lost.
        assert_eq!(SubtractState::new(true, 0).rough_outcome(), -1.0);
        // Take everything.
        assert_eq!(SubtractState::new(true, 9).rough_outcome(), 1.0);
        // 2 -> 1 only, which the opponent takes.
        assert_eq!(SubtractState::new(true, 2).rough_outcome(), -1.0);
        // 3 -> 2, not an immediate win for the opponent.
        assert_eq!(SubtractState::new(true, 3).rough_outcome(), 0.0);
    }

    #[test]
    fn test_str_to_move() {
        let game = SubtractSquare::new(true, 9);
        assert_eq!(game.str_to_move("4"), Ok(4));
        assert_eq!(game.str_to_move(" 7 "), Ok(7));
        assert!(game.str_to_move("four").is_err());
        assert!(game.str_to_move("-1").is_err());
    }

    #[test]
    fn test_display() {
        let game = SubtractSquare::new(true, 20);
        assert_eq!(game.to_string(), "The current number is: 20");
    }

    #[test]
    fn test_state_serialization() {
        let state = SubtractState::new(false, 17);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: SubtractState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
