//! Player trait and associated types for game agents.
//!
//! A player is any entity that can be asked for a move: the human at the
//! terminal, the search engine, or (in tests) a scripted adversary. The trait
//! focuses on behavior rather than construction; each implementation provides
//! its own constructor.
//!
//! `choose_move()` is intentionally synchronous. Turn-based play on a 3x3
//! board has no use for suspension points: the human player blocks on stdin,
//! the engine runs its search to completion.

use crate::game_repr::{Board, GameStatus, Mark};

/// Result of a completed game, from no particular player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The given mark completed a line.
    Winner(Mark),
    /// Full board, no line.
    Draw,
}

impl GameResult {
    /// Convert a terminal [`GameStatus`] into a result. `None` while the game
    /// is still in progress.
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Won(mark, _) => Some(GameResult::Winner(mark)),
            GameStatus::Draw => Some(GameResult::Draw),
            GameStatus::InProgress => None,
        }
    }
}

/// Trait for entities that can provide moves.
///
/// Only `choose_move()` must be implemented; the notification hooks have
/// do-nothing defaults.
pub trait Player {
    /// Request the next move for `mark` on `board`.
    ///
    /// Returns the chosen cell index, or `None` if the player resigns or
    /// cannot produce a move. The index is validated by the orchestrator,
    /// not trusted here.
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Option<usize>;

    /// Notification that the opponent played `index`.
    fn opponent_moved(&mut self, _index: usize) {}

    /// Notification that the game reached a terminal state.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Display name for logging and the terminal driver.
    fn name(&self) -> &str {
        "Player"
    }
}
