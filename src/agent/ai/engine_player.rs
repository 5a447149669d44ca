// Engine-backed Player implementation
//
// Thin adapter between the Player trait and the root search. Holds no state
// between calls: every move is computed fresh from the board snapshot it is
// handed, so the engine is safe to drive from any number of games at once.

use super::search::select_move;
use crate::agent::player::Player;
use crate::game_repr::{Board, Mark};
use std::time::Instant;

/// Player that delegates move selection to the minimax search.
pub struct EnginePlayer {
    name: String,
}

impl EnginePlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for EnginePlayer {
    fn default() -> Self {
        Self::new("Engine")
    }
}

impl Player for EnginePlayer {
    /// Run the search and return the chosen cell.
    ///
    /// Returns `None` only if the orchestrator asked for a move on a terminal
    /// board, which it is contracted never to do.
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        let start = Instant::now();
        match select_move(board, mark) {
            Ok(result) => {
                log::debug!(
                    "[{}] picked cell {} (value {}, {} root nodes, {:?})",
                    self.name,
                    result.best_index,
                    result.value,
                    result.nodes,
                    start.elapsed()
                );
                Some(result.best_index)
            }
            Err(err) => {
                log::error!("[{}] asked to move on a terminal board: {}", self.name, err);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
