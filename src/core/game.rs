//! The game contract: a live state plus terminal and winner judgment.
//!
//! A `Game` owns exactly one current state, the position of the match in
//! progress. Terminality is judged for any state passed in, so search code
//! can ask about hypothetical positions without touching the live one.
//! [`Game::winner_in`] is the state-parameterized winner check the engines
//! use; [`Game::is_winner`] is the same question asked of the live state.

use super::error::GameError;
use super::player::Player;
use super::state::GameState;

/// Move type of a game's states.
pub type MoveOf<G> = <<G as Game>::State as GameState>::Move;

/// A match in progress.
pub trait Game {
    /// State type of this rule set.
    type State: GameState;

    /// The live state of the match.
    fn current_state(&self) -> &Self::State;

    /// Replace the live state.
    fn set_current_state(&mut self, state: Self::State);

    /// Is `state` (not necessarily the live one) over?
    fn is_over(&self, state: &Self::State) -> bool;

    /// Parse an external token into a move.
    ///
    /// Only the token's shape is checked here, not its legality.
    fn str_to_move(&self, token: &str) -> Result<MoveOf<Self>, GameError>;

    /// Winner of `state`, if it is over.
    ///
    /// The player about to move in a finished state has been left without
    /// a move, so the side that moved last wins.
    fn winner_in(&self, state: &Self::State) -> Option<Player> {
        if self.is_over(state) {
            Some(state.current_player().opponent())
        } else {
            None
        }
    }

    /// Has `player` won the live match?
    fn is_winner(&self, player: Player) -> bool {
        self.winner_in(self.current_state()) == Some(player)
    }

    /// Validate `mv` against the live state and advance the match.
    fn apply_move(&mut self, mv: &MoveOf<Self>) -> Result<(), GameError> {
        let state = self.current_state();
        if self.is_over(state) {
            return Err(GameError::GameOver);
        }
        let next = state.try_make_move(mv)?;
        self.set_current_state(next);
        Ok(())
    }
}
