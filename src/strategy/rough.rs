//! One-ply lookahead on the states' own heuristic.

use log::trace;

use crate::core::outcome::clamp_estimate;
use crate::core::{Game, GameState, MoveOf, SearchError};

use super::Strategy;

/// Picks the move whose successor looks worst for the opponent.
///
/// Each successor's `rough_outcome` is an estimate for the opponent, so it is
/// negated before comparing. Ties go to the first move in enumeration order.
pub fn rough_outcome_strategy<G: Game>(game: &G) -> Result<MoveOf<G>, SearchError> {
    let state = game.current_state();
    let mut best: Option<(MoveOf<G>, f64)> = None;

    for mv in state.possible_moves() {
        let guess = -clamp_estimate(state.make_move(&mv).rough_outcome());
        trace!("rough outcome of {} is {:.3}", mv, guess);
        if best.as_ref().map_or(true, |(_, top)| guess > *top) {
            best = Some((mv, guess));
        }
    }

    best.map(|(mv, _)| mv).ok_or(SearchError::NoMoves)
}

/// [`rough_outcome_strategy`] as a [`Strategy`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RoughOutcome;

impl<G: Game> Strategy<G> for RoughOutcome {
    fn name(&self) -> &'static str {
        "rough-outcome"
    }

    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>, SearchError> {
        rough_outcome_strategy(game)
    }
}
