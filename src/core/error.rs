//! Error types for games and searches.

use thiserror::Error;

/// Errors raised at the game boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid move: {mv}")]
    InvalidMove { mv: String },

    #[error("cannot parse move '{token}' (expected {expected})")]
    Parse {
        token: String,
        expected: &'static str,
    },

    #[error("game already over")]
    GameOver,
}

/// Errors raised by a strategy while choosing a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    /// The strategy was asked to move in a state with no legal moves.
    /// Callers must check `Game::is_over` first.
    #[error("no legal moves available")]
    NoMoves,

    #[error("search visited more than {budget} nodes")]
    NodeBudgetExhausted { budget: u64 },
}
