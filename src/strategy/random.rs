//! Uniformly random legal moves.

use crate::core::{Game, GameRng, GameState, MoveOf, SearchError};

use super::Strategy;

/// Choose a legal move uniformly at random from `rng`.
pub fn random_strategy<G: Game>(game: &G, rng: &mut GameRng) -> Result<MoveOf<G>, SearchError> {
    let moves = game.current_state().possible_moves();
    rng.choose(&moves).cloned().ok_or(SearchError::NoMoves)
}

/// Seeded random player.
#[derive(Clone, Debug)]
pub struct RandomMove {
    rng: GameRng,
}

impl RandomMove {
    /// Create a random player from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Default for RandomMove {
    fn default() -> Self {
        Self::new(42)
    }
}

impl<G: Game> Strategy<G> for RandomMove {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(&mut self, game: &G) -> Result<MoveOf<G>, SearchError> {
        random_strategy(game, &mut self.rng)
    }
}
