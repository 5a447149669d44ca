//! Controller state-machine integration tests: full games driven through the
//! orchestrator, invalid-move recovery, and reset semantics.

use tictactoe_engine::agent::{EnginePlayer, Player};
use tictactoe_engine::game_repr::{Board, GameStatus, Mark};
use tictactoe_engine::orchestrator::{GamePhase, Orchestrator};
use tictactoe_engine::EngineError;

#[test]
fn test_full_game_greedy_human_never_beats_engine() {
    // A human who always takes the lowest-indexed free cell must not win.
    let mut game = Orchestrator::new(Mark::X);
    let status = loop {
        let index = game.board().empty_cells()[0];
        let status = game.play_round(index).unwrap();
        if status.is_terminal() {
            break status;
        }
    };
    match status {
        GameStatus::Won(mark, _) => assert_eq!(mark, game.engine_mark()),
        GameStatus::Draw => {}
        GameStatus::InProgress => unreachable!(),
    }
    assert_eq!(game.phase(), GamePhase::GameOver);
}

#[test]
fn test_invalid_move_is_recovered_locally() {
    let mut game = Orchestrator::new(Mark::X);
    game.play_round(4).unwrap();

    // Occupied cell: rejected, then the game continues normally.
    assert!(matches!(
        game.play_human(4),
        Err(EngineError::InvalidMove { index: 4 })
    ));
    assert_eq!(game.phase(), GamePhase::HumanTurn);
    let free = game.board().empty_cells()[0];
    assert!(game.play_round(free).is_ok());
}

#[test]
fn test_out_of_range_index_rejected() {
    let mut game = Orchestrator::new(Mark::X);
    assert_eq!(
        game.play_human(42),
        Err(EngineError::InvalidMove { index: 42 })
    );
    assert_eq!(game.phase(), GamePhase::Idle);
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_engine_turn_is_transient_under_play_round() {
    // play_round composes the human move and the engine reply, so the
    // observable phase is never EngineTurn afterwards.
    let mut game = Orchestrator::new(Mark::X);
    let status = game.play_round(0).unwrap();
    assert!(!status.is_terminal());
    assert_eq!(game.phase(), GamePhase::HumanTurn);
}

#[test]
fn test_split_human_and_engine_steps() {
    let mut game = Orchestrator::new(Mark::X);
    game.play_human(0).unwrap();
    assert_eq!(game.phase(), GamePhase::EngineTurn);
    // Human may not move again while the engine owes a reply.
    assert!(matches!(
        game.play_human(1),
        Err(EngineError::InvalidMove { index: 1 })
    ));
    game.play_engine().unwrap();
    assert_eq!(game.phase(), GamePhase::HumanTurn);
    // The engine may not move twice.
    assert_eq!(game.play_engine(), Err(EngineError::NoLegalMove));
}

#[test]
fn test_reset_always_yields_the_same_fresh_state() {
    let mut game = Orchestrator::new(Mark::X);
    // Finish one game so reset has something to clear.
    loop {
        let index = game.board().empty_cells()[0];
        if game.play_round(index).unwrap().is_terminal() {
            break;
        }
    }
    for _ in 0..5 {
        game.reset();
        assert_eq!(game.phase(), GamePhase::Idle);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.board(), &Board::new());
    }
    // A fresh game is playable after reset.
    assert!(game.play_round(8).is_ok());
}

#[test]
fn test_engine_player_trait_round_trip() {
    // Drive the same search through the Player trait, the surface the
    // orchestrator's UI-side collaborators use.
    let mut engine = EnginePlayer::new("opponent");
    assert_eq!(engine.name(), "opponent");

    let mut board = Board::new();
    let mut to_move = Mark::X;
    while !tictactoe_engine::game_repr::status(&board).is_terminal() {
        let index = engine.choose_move(&board, to_move).unwrap();
        board.apply_move(index, to_move).unwrap();
        to_move = to_move.opponent();
    }
    assert_eq!(
        tictactoe_engine::game_repr::status(&board),
        GameStatus::Draw
    );
}
