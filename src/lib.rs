//! # negamax-engine
//!
//! A generic search engine for two-player, zero-sum, perfect-information
//! games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: Rule sets plug in through two traits, `GameState`
//!    and `Game`. The engines never special-case a concrete game.
//!
//! 2. **Immutable States**: `make_move` always returns a new state; search
//!    never mutates the position it is given.
//!
//! 3. **Parameterized Judgment**: terminality and the winner are asked of
//!    an explicit state, so searching hypothetical positions never touches
//!    a game's live state.
//!
//! ## Architecture
//!
//! - **Recursive negamax**: full-depth search on the native call stack.
//!
//! - **Iterative negamax**: the same search over an arena tree driven by an
//!   explicit two-phase (expand, aggregate) stack. Both engines choose the
//!   same move for the same position.
//!
//! - **Rough outcome**: one-ply lookahead on each state's own cheap
//!   heuristic.
//!
//! ## Modules
//!
//! - `core`: players, outcomes, the state and game contracts, RNG, errors
//! - `strategy`: move selection (rough outcome, random, minimax)
//! - `games`: bundled rule sets (subtract-a-square, chopsticks)
//! - `arena`: playing strategies against each other
//! - `explore`: whole-game enumeration helpers

pub mod core;
pub mod strategy;
pub mod games;
pub mod arena;
pub mod explore;

// Re-export commonly used types
pub use crate::core::{
    Game, GameError, GameRng, GameState, MoveList, MoveOf, Player, Score, SearchError, DRAW,
    LOSE, WIN,
};

pub use crate::strategy::{
    iterative_minimax, random_strategy, recursive_minimax, rough_outcome_strategy,
    IterativeMinimax, RandomMove, RecursiveMinimax, RoughOutcome, SearchConfig, SearchStats,
    Strategy,
};

pub use crate::arena::{play_match, MatchConfig, MatchError, MatchRecord};
pub use crate::explore::{count_leaves, reachable_states};
