//! Recursive negamax.
//!
//! Each call returns the value of a state for the player about to move
//! there; a parent's value is the best of its children's values negated.
//! Recursion depth equals game length, so a game too long for the thread's
//! stack overflows it. Use [`IterativeMinimax`](super::IterativeMinimax)
//! for those.

use std::time::Instant;

use log::debug;

use crate::core::{Game, GameState, MoveOf, Score, SearchError, LOSE};

use super::config::SearchConfig;
use super::stats::SearchStats;
use super::{first_best, terminal_score};

/// Full-depth recursive negamax.
#[derive(Clone, Debug, Default)]
pub struct RecursiveMinimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl RecursiveMinimax {
    /// Create an engine with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Choose the best move for the player to move in the live state.
    ///
    /// Returns `SearchError::NoMoves` if the live state is over.
    pub fn search<G: Game>(&mut self, game: &G) -> Result<MoveOf<G>, SearchError> {
        let start = Instant::now();
        self.stats.reset();
        let result = self.search_root(game);
        self.stats.time_us = start.elapsed().as_micros() as u64;

        match &result {
            Ok(best) => debug!(
                "recursive minimax chose {} for {} after {} nodes ({:.0} nodes/s, branching {:.2})",
                best,
                game.current_state().current_player(),
                self.stats.nodes_visited,
                self.stats.nodes_per_second(),
                self.stats.branching_factor()
            ),
            Err(err) => debug!(
                "recursive minimax gave up after {} nodes: {}",
                self.stats.nodes_visited,
                err
            ),
        }
        result
    }

    fn search_root<G: Game>(&mut self, game: &G) -> Result<MoveOf<G>, SearchError> {
        let root = game.current_state();
        if game.is_over(root) {
            return Err(SearchError::NoMoves);
        }
        let moves = root.possible_moves();
        if moves.is_empty() {
            return Err(SearchError::NoMoves);
        }

        self.stats.record_visit(0, self.config.node_budget)?;
        self.stats.nodes_expanded += 1;

        let mut scored = Vec::with_capacity(moves.len());
        for mv in moves {
            let child = root.make_move(&mv);
            let value = -self.value(game, &child, 1)?;
            scored.push((mv, value));
        }

        first_best(scored).ok_or(SearchError::NoMoves)
    }

    /// Exact value of `state` for the player about to move in it.
    pub fn evaluate<G: Game>(&mut self, game: &G, state: &G::State) -> Result<Score, SearchError> {
        let start = Instant::now();
        self.stats.reset();
        let value = self.value(game, state, 0);
        self.stats.time_us = start.elapsed().as_micros() as u64;
        value
    }

    fn value<G: Game>(
        &mut self,
        game: &G,
        state: &G::State,
        depth: u32,
    ) -> Result<Score, SearchError> {
        self.stats.record_visit(depth, self.config.node_budget)?;

        if let Some(score) = terminal_score(game, state) {
            self.stats.leaves += 1;
            return Ok(score);
        }

        self.stats.nodes_expanded += 1;

        // Scores never go below LOSE, so it doubles as the empty maximum.
        let mut best = LOSE;
        for mv in state.possible_moves() {
            let child = state.make_move(&mv);
            best = best.max(-self.value(game, &child, depth + 1)?);
        }
        Ok(best)
    }

    /// Statistics from the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
