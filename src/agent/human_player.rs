//! Human player reading moves from a terminal.
//!
//! Prompts for a cell index on stdin. Anything that parses as 0-8 is returned
//! as the move (the orchestrator validates occupancy); `q` or end-of-input
//! counts as resignation.

use crate::agent::player::{GameResult, Player};
use crate::game_repr::{Board, Mark};
use std::io::{self, BufRead, Write};

pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl Player for HumanPlayer {
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("{}\n{} to move, cell index (0-8, q to quit): ", board, mark);
            io::stdout().flush().ok()?;

            line.clear();
            if stdin.lock().read_line(&mut line).ok()? == 0 {
                return None; // EOF
            }
            let input = line.trim();
            if input.eq_ignore_ascii_case("q") {
                return None;
            }
            match input.parse::<usize>() {
                Ok(index) if index < 9 => return Some(index),
                _ => println!("expected a cell index between 0 and 8"),
            }
        }
    }

    fn opponent_moved(&mut self, index: usize) {
        println!("opponent played cell {}", index);
    }

    fn game_ended(&mut self, result: GameResult) {
        match result {
            GameResult::Winner(mark) => println!("game over: {} wins", mark),
            GameResult::Draw => println!("game over: draw"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
