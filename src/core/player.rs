//! Player identification for two-player games.
//!
//! ## Player
//!
//! The two sides of a match. The turn flag of every state is a `Player`,
//! and the external names `"p1"` / `"p2"` are derived from it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;

/// One of the two players in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The first player (`"p1"`).
    P1,
    /// The second player (`"p2"`).
    P2,
}

impl Player {
    /// Both players, in seating order.
    pub const ALL: [Player; 2] = [Player::P1, Player::P2];

    /// Player from a turn flag.
    #[must_use]
    pub const fn from_turn(is_p1_turn: bool) -> Self {
        if is_p1_turn {
            Player::P1
        } else {
            Player::P2
        }
    }

    /// External name of this player.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Player {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p1" => Ok(Player::P1),
            "p2" => Ok(Player::P2),
            _ => Err(GameError::Parse {
                token: s.to_string(),
                expected: "p1 or p2",
            }),
        }
    }
}
