//! The state contract every rule set implements.
//!
//! A state is an immutable snapshot of one position plus whose turn it is.
//! Successors are produced by [`GameState::make_move`], which never touches
//! its receiver. The search engines only ever talk to a game through this
//! trait and [`Game`](super::Game); they never special-case a rule set.

use std::fmt::{Debug, Display};

use smallvec::SmallVec;

use super::error::GameError;
use super::player::Player;

/// Legal moves of a state, in enumeration order.
///
/// Enumeration order is significant: every strategy breaks ties by the
/// first move in this order.
pub type MoveList<M> = SmallVec<[M; 8]>;

/// One immutable game position.
pub trait GameState: Clone + Debug {
    /// Game-specific move. Opaque to the search engines.
    type Move: Clone + Debug + Display + PartialEq;

    /// Player about to move.
    fn current_player(&self) -> Player;

    /// External name of the player about to move (`"p1"` or `"p2"`).
    fn current_player_name(&self) -> &'static str {
        self.current_player().name()
    }

    /// All legal moves.
    ///
    /// Empty exactly when the state is a leaf for search purposes.
    fn possible_moves(&self) -> MoveList<Self::Move>;

    /// Is `mv` one of [`possible_moves`](Self::possible_moves)?
    fn is_valid_move(&self, mv: &Self::Move) -> bool {
        self.possible_moves().contains(mv)
    }

    /// Successor state after `mv`, with the turn passed to the opponent.
    ///
    /// # Panics
    ///
    /// Implementations panic if `mv` is not valid in this state. Callers
    /// that cannot guarantee validity use [`try_make_move`](Self::try_make_move).
    fn make_move(&self, mv: &Self::Move) -> Self;

    /// Validated form of [`make_move`](Self::make_move).
    fn try_make_move(&self, mv: &Self::Move) -> Result<Self, GameError> {
        if self.is_valid_move(mv) {
            Ok(self.make_move(mv))
        } else {
            Err(GameError::InvalidMove { mv: mv.to_string() })
        }
    }

    /// Cheap estimate of the best outcome the current player can guarantee.
    ///
    /// Looks at most one state ahead and returns a value in `[-1, 1]`:
    /// - exactly `1` when some move wins immediately,
    /// - `-1` when every move hands the opponent an immediate win
    ///   (and for states that are already lost),
    /// - something in between otherwise.
    fn rough_outcome(&self) -> f64;
}
