//! Exhaustive negamax search.
//!
//! ## Overview
//!
//! Both engines search the whole game tree down to terminal states and
//! return the same move for the same position:
//!
//! - [`RecursiveMinimax`]: plain recursion on the native call stack.
//! - [`IterativeMinimax`]: the same search driven by an explicit stack over
//!   an arena tree, so depth is bounded by memory rather than by the thread's
//!   stack size.
//!
//! Terminal states score `WIN` or `LOSE` for the player about to move;
//! there are no draws. The root move chosen is the one with the best value
//! for the mover, ties going to the first move in enumeration order.
//!
//! There is no pruning, no transposition table and no depth limit. A
//! [`SearchConfig`] node budget is the only brake, for games whose trees
//! are not finite.
//!
//! ## Usage
//!
//! ```rust
//! use negamax_engine::games::SubtractSquare;
//! use negamax_engine::strategy::minimax::{IterativeMinimax, SearchConfig};
//!
//! let game = SubtractSquare::new(true, 4);
//! let mut engine = IterativeMinimax::new(SearchConfig::default());
//!
//! // Taking all four wins on the spot.
//! assert_eq!(engine.search(&game), Ok(4));
//! println!("visited {} nodes", engine.stats().nodes_visited);
//! ```

pub mod config;
pub mod iterative;
pub mod recursive;
pub mod stats;
pub mod tree;

pub use config::SearchConfig;
pub use iterative::IterativeMinimax;
pub use recursive::RecursiveMinimax;
pub use stats::SearchStats;
pub use tree::{NodeId, NodePhase, SearchNode, SearchTree};

use crate::core::{Game, GameState, Score, LOSE, WIN};

/// Score of `state` for the player about to move, if the game is over there.
pub(crate) fn terminal_score<G: Game>(game: &G, state: &G::State) -> Option<Score> {
    if !game.is_over(state) {
        return None;
    }
    if game.winner_in(state) == Some(state.current_player()) {
        Some(WIN)
    } else {
        Some(LOSE)
    }
}

/// First candidate with the highest score.
pub(crate) fn first_best<T>(candidates: impl IntoIterator<Item = (T, Score)>) -> Option<T> {
    let mut best: Option<(T, Score)> = None;
    for (candidate, score) in candidates {
        if best.as_ref().map_or(true, |(_, top)| score > *top) {
            best = Some((candidate, score));
        }
    }
    best.map(|(candidate, _)| candidate)
}
