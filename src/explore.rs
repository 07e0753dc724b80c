//! Whole-game enumeration helpers.
//!
//! Used to check properties over every position of a small game, e.g. that
//! both engines agree everywhere.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::core::{Game, GameState};

/// Every distinct state reachable from `root`, `root` included.
///
/// Terminates for any game with finitely many positions, even if positions
/// repeat.
pub fn reachable_states<S>(root: &S) -> FxHashSet<S>
where
    S: GameState + Hash + Eq,
{
    let mut seen = FxHashSet::default();
    seen.insert(root.clone());

    let mut pending = vec![root.clone()];
    while let Some(state) = pending.pop() {
        for mv in state.possible_moves() {
            let next = state.make_move(&mv);
            if seen.insert(next.clone()) {
                pending.push(next);
            }
        }
    }
    seen
}

/// Number of terminal positions in the full game tree below `root`,
/// counting each path separately.
///
/// Only terminates for games whose trees are finite.
pub fn count_leaves<G: Game>(game: &G, root: &G::State) -> u64 {
    let mut leaves = 0;
    let mut pending = vec![root.clone()];
    while let Some(state) = pending.pop() {
        if game.is_over(&state) {
            leaves += 1;
            continue;
        }
        pending.extend(state.possible_moves().iter().map(|mv| state.make_move(mv)));
    }
    leaves
}
