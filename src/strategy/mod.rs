//! Move-selection strategies.
//!
//! Every strategy looks at a game's live state and returns a move for the
//! player about to move; the caller applies it. Strategies never mutate the
//! game they are given.
//!
//! - [`RoughOutcome`]: one-ply lookahead on `GameState::rough_outcome`
//! - [`RandomMove`]: uniformly random legal move, seeded
//! - [`RecursiveMinimax`] / [`IterativeMinimax`]: exhaustive negamax
//!
//! Asking any strategy to move in a finished game is a caller error and
//! returns `SearchError::NoMoves`.

pub mod minimax;
pub mod random;
pub mod rough;

pub use minimax::{IterativeMinimax, RecursiveMinimax, SearchConfig, SearchStats};
pub use random::{random_strategy, RandomMove};
pub use rough::{rough_outcome_strategy, RoughOutcome};

use crate::core::{Game, MoveOf, SearchError};

/// A player that picks moves for a game.
pub trait Strategy<G: Game> {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Choose a move for the player to move in `game`'s live state.
    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>, SearchError>;
}

impl<G: Game> Strategy<G> for RecursiveMinimax {
    fn name(&self) -> &'static str {
        "recursive-minimax"
    }

    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>, SearchError> {
        self.search(game)
    }
}

impl<G: Game> Strategy<G> for IterativeMinimax {
    fn name(&self) -> &'static str {
        "iterative-minimax"
    }

    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>, SearchError> {
        self.search(game)
    }
}

/// Best move by unlimited recursive negamax.
pub fn recursive_minimax<G: Game>(game: &G) -> Result<MoveOf<G>, SearchError> {
    RecursiveMinimax::default().search(game)
}

/// Best move by unlimited explicit-stack negamax.
pub fn iterative_minimax<G: Game>(game: &G) -> Result<MoveOf<G>, SearchError> {
    IterativeMinimax::default().search(game)
}
