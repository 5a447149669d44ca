//! Terminal driver: human versus engine.
//!
//! The human plays X and moves first. Set `RUST_LOG=debug` to see per-move
//! search statistics, `RUST_LOG=trace` for controller transitions.

use tictactoe_engine::agent::{GameResult, HumanPlayer, Player};
use tictactoe_engine::game_repr::Mark;
use tictactoe_engine::orchestrator::{GamePhase, Orchestrator};

fn main() {
    env_logger::init();

    let mut game = Orchestrator::new(Mark::X);
    let mut human = HumanPlayer::default();

    println!(
        "tic-tac-toe: you are {}, the engine is {}",
        game.human_mark(),
        game.engine_mark()
    );

    loop {
        let index = match human.choose_move(game.board(), game.human_mark()) {
            Some(index) => index,
            None => {
                println!("resigned.");
                return;
            }
        };

        if let Err(err) = game.play_round(index) {
            println!("{}", err);
            continue;
        }

        if game.phase() == GamePhase::GameOver {
            println!("{}", game.board());
            if let Some(line) = game.winning_line() {
                println!("winning line: {:?}", line);
            }
            if let Some(result) = GameResult::from_status(game.status()) {
                human.game_ended(result);
            }
            return;
        }
    }
}
