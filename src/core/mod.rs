//! Core contracts: players, outcomes, the state and game traits, RNG, errors.
//!
//! Everything here is game-agnostic. Rule sets implement [`GameState`] and
//! [`Game`]; strategies consume them.

pub mod error;
pub mod game;
pub mod outcome;
pub mod player;
pub mod rng;
pub mod state;

pub use error::{GameError, SearchError};
pub use game::{Game, MoveOf};
pub use outcome::{Score, DRAW, LOSE, WIN};
pub use player::Player;
pub use rng::GameRng;
pub use state::{GameState, MoveList};
