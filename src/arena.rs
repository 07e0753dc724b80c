//! Head-to-head matches between two strategies.
//!
//! Plays a game to completion, asking the strategy of whichever player is to
//! move for a move and applying it through the validating
//! `Game::apply_move`. Games whose positions can repeat are cut off after
//! `max_moves`.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Game, GameError, GameState, MoveOf, Player, SearchError};
use crate::strategy::Strategy;

/// Why a match could not be played out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("{player} strategy failed: {source}")]
    Strategy {
        player: Player,
        #[source]
        source: SearchError,
    },

    #[error("{player} strategy chose an illegal move: {source}")]
    IllegalMove {
        player: Player,
        #[source]
        source: GameError,
    },
}

/// Match settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Moves after which an unfinished match is abandoned.
    pub max_moves: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_moves: 500 }
    }
}

impl MatchConfig {
    /// Set maximum moves per match.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }
}

/// Moves played in a match and how it ended.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchRecord<M> {
    /// Every move in order, with the player who made it.
    pub moves: Vec<(Player, M)>,

    /// Winner, or `None` if the match hit the move limit.
    pub winner: Option<Player>,
}

impl<M> MatchRecord<M> {
    /// Number of moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Did the match end before any move was made?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Play `game` from its live state until it is over or the move limit hits.
///
/// `p1` moves for `Player::P1` and `p2` for `Player::P2`. The game is left
/// at its final position.
pub fn play_match<G, A, B>(
    game: &mut G,
    p1: &mut A,
    p2: &mut B,
    config: &MatchConfig,
) -> Result<MatchRecord<MoveOf<G>>, MatchError>
where
    G: Game,
    A: Strategy<G> + ?Sized,
    B: Strategy<G> + ?Sized,
{
    let mut moves = Vec::new();

    while !game.is_over(game.current_state()) {
        if moves.len() >= config.max_moves {
            info!("match abandoned after {} moves", moves.len());
            return Ok(MatchRecord { moves, winner: None });
        }

        let player = game.current_state().current_player();
        let (name, choice) = match player {
            Player::P1 => (p1.name(), p1.choose_move(game)),
            Player::P2 => (p2.name(), p2.choose_move(game)),
        };
        let mv = choice.map_err(|source| MatchError::Strategy { player, source })?;
        debug!("{} ({}) plays {}", player, name, mv);

        game.apply_move(&mv)
            .map_err(|source| MatchError::IllegalMove { player, source })?;
        moves.push((player, mv));
    }

    let winner = game.winner_in(game.current_state());
    if let Some(winner) = winner {
        info!("{} wins after {} moves", winner, moves.len());
    }
    Ok(MatchRecord { moves, winner })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Chopsticks, SubtractSquare};
    use crate::strategy::{RandomMove, RecursiveMinimax};

    /// Always proposes the same token, legal or not.
    struct Stubborn(u32);

    impl Strategy<SubtractSquare> for Stubborn {
        fn name(&self) -> &'static str {
            "stubborn"
        }

        fn choose_move(&mut self, _game: &SubtractSquare) -> Result<u32, SearchError> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_minimax_beats_random_from_winning_start() {
        // 6 is a win for the first mover.
        let mut game = SubtractSquare::new(true, 6);
        let record = play_match(
            &mut game,
            &mut RecursiveMinimax::default(),
            &mut RandomMove::new(5),
            &MatchConfig::default(),
        )
        .unwrap();

        assert_eq!(record.winner, Some(Player::P1));
        assert_eq!(record.moves.first().map(|(p, _)| *p), Some(Player::P1));
        assert!(game.is_winner(Player::P1));
    }

    #[test]
    fn test_illegal_move_is_reported() {
        let mut game = SubtractSquare::new(true, 6);
        let err = play_match(
            &mut game,
            &mut Stubborn(2),
            &mut Stubborn(1),
            &MatchConfig::default(),
        )
        .unwrap_err();

        assert_eq!(
            err,
            MatchError::IllegalMove {
                player: Player::P1,
                source: GameError::InvalidMove { mv: "2".to_string() },
            }
        );
    }

    #[test]
    fn test_move_limit() {
        let mut game = Chopsticks::new(true);
        let record = play_match(
            &mut game,
            &mut RandomMove::new(1),
            &mut RandomMove::new(2),
            &MatchConfig::default().with_max_moves(3),
        )
        .unwrap();

        assert!(record.len() <= 3);
        if record.len() == 3 {
            assert_eq!(record.winner, None);
        }
    }

    #[test]
    fn test_finished_game_plays_no_moves() {
        let mut game = SubtractSquare::new(false, 0);
        let record = play_match(
            &mut game,
            &mut RandomMove::new(1),
            &mut RandomMove::new(2),
            &MatchConfig::default(),
        )
        .unwrap();

        assert!(record.is_empty());
        assert_eq!(record.winner, Some(Player::P1));
    }
}
