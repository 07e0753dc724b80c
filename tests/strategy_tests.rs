//! Strategy and match integration tests.

use negamax_engine::arena::{play_match, MatchConfig, MatchError};
use negamax_engine::core::{Game, GameState, Player, SearchError};
use negamax_engine::games::{Chopsticks, ChopsticksState, SubtractSquare};
use negamax_engine::strategy::{
    iterative_minimax, rough_outcome_strategy, IterativeMinimax, RandomMove, RecursiveMinimax,
    RoughOutcome, SearchConfig, Strategy,
};

// =============================================================================
// Rough Outcome
// =============================================================================

#[test]
fn test_rough_outcome_never_hands_over_immediate_win() {
    // Each start has at least one move that does not leave a perfect square.
    for start in [8u32, 10, 13, 17] {
        let game = SubtractSquare::new(true, start);
        let mv = rough_outcome_strategy(&game).unwrap();
        let left = start - mv;
        let root = (left as f64).sqrt() as u32;
        assert!(left == 0 || root * root != left, "{start}: left a square {left}");
    }
}

#[test]
fn test_rough_outcome_is_legal_on_chopsticks() {
    let game = Chopsticks::from_state(ChopsticksState::new(false, 2, 3, 1, 4));
    let mv = rough_outcome_strategy(&game).unwrap();
    assert!(game.current_state().is_valid_move(&mv));
}

// =============================================================================
// Matches
// =============================================================================

#[test]
fn test_minimax_wins_every_winnable_start() {
    for start in [1u32, 3, 4, 6, 8, 9, 11, 13, 14, 16, 18, 19] {
        let mut game = SubtractSquare::new(true, start);
        let record = play_match(
            &mut game,
            &mut IterativeMinimax::default(),
            &mut RoughOutcome,
            &MatchConfig::default(),
        )
        .unwrap();

        assert_eq!(record.winner, Some(Player::P1), "start {start}");
    }
}

#[test]
fn test_minimax_holds_lost_start_against_itself() {
    // 12 is lost for the mover; perfect play on both sides keeps it so.
    let mut game = SubtractSquare::new(true, 12);
    let record = play_match(
        &mut game,
        &mut RecursiveMinimax::default(),
        &mut IterativeMinimax::default(),
        &MatchConfig::default(),
    )
    .unwrap();

    assert_eq!(record.winner, Some(Player::P2));
    assert!(record
        .moves
        .iter()
        .enumerate()
        .all(|(i, (player, _))| *player == if i % 2 == 0 { Player::P1 } else { Player::P2 }));
}

#[test]
fn test_random_matches_are_reproducible() {
    let play = || {
        let mut game = SubtractSquare::new(true, 40);
        play_match(
            &mut game,
            &mut RandomMove::new(11),
            &mut RandomMove::new(12),
            &MatchConfig::default(),
        )
        .unwrap()
    };

    assert_eq!(play(), play());
}

#[test]
fn test_budget_failure_surfaces_in_match() {
    let mut game = Chopsticks::new(true);
    let mut bounded = IterativeMinimax::new(SearchConfig::new().with_node_budget(100));

    let err = play_match(&mut game, &mut bounded, &mut RoughOutcome, &MatchConfig::default())
        .unwrap_err();

    assert_eq!(
        err,
        MatchError::Strategy {
            player: Player::P1,
            source: SearchError::NodeBudgetExhausted { budget: 100 },
        }
    );
    assert_eq!(game, Chopsticks::new(true));
}

#[test]
fn test_boxed_strategies() {
    let mut players: Vec<Box<dyn Strategy<SubtractSquare>>> = vec![
        Box::new(RoughOutcome),
        Box::new(RandomMove::default()),
        Box::new(RecursiveMinimax::default()),
        Box::new(IterativeMinimax::default()),
    ];

    let game = SubtractSquare::new(true, 11);
    for player in players.iter_mut() {
        let mv = player.choose_move(&game).unwrap();
        assert!(game.current_state().is_valid_move(&mv), "{}", player.name());
    }

    // Minimax: 11 - 1 = 10, a lost position for the opponent.
    assert_eq!(iterative_minimax(&game), Ok(1));
}

#[test]
fn test_boxed_strategies_play_a_match() {
    let mut p1: Box<dyn Strategy<SubtractSquare>> = Box::new(RecursiveMinimax::default());
    let mut p2: Box<dyn Strategy<SubtractSquare>> = Box::new(RandomMove::new(3));
    let mut game = SubtractSquare::new(true, 13);

    let record = play_match(&mut game, p1.as_mut(), p2.as_mut(), &MatchConfig::default()).unwrap();
    assert_eq!(record.winner, Some(Player::P1));
    assert!(game.is_over(game.current_state()));
}
