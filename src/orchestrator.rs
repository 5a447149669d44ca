//! Game lifecycle coordination: the controller state machine.
//!
//! The [`Orchestrator`] owns the live board and whose turn it is. It accepts
//! human moves, invokes the engine for replies, detects game end, and resets.
//! Side effects are confined to board mutation and the phase transition; no
//! I/O happens here.
//!
//! # Flow
//!
//! ```text
//! Idle -> HumanTurn -> (EngineTurn) -> HumanTurn | GameOver
//!                          ^ transient: the engine reply is synchronous
//! Reset: any state -> Idle
//! ```
//!
//! Invalid requests (occupied cell, move after game end, engine reply out of
//! turn) are rejected with a typed error and leave every field untouched.

use crate::agent::ai::select_move;
use crate::error::EngineError;
use crate::game_repr::{status, winning_line, Board, GameStatus, Mark};

/// Controller phase. `Idle` is the empty-board start; it accepts a human move
/// exactly like `HumanTurn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    HumanTurn,
    EngineTurn,
    GameOver,
}

/// State machine driving one human-versus-engine game.
pub struct Orchestrator {
    board: Board,
    human_mark: Mark,
    engine_mark: Mark,
    phase: GamePhase,
    /// Cached highlight for the UI layer, cleared on reset.
    winning_line: Option<[usize; 3]>,
}

impl Orchestrator {
    /// New controller with an empty board. The human moves first with
    /// `human_mark`; the engine plays the opposite mark.
    pub fn new(human_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            human_mark,
            engine_mark: human_mark.opponent(),
            phase: GamePhase::Idle,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn engine_mark(&self) -> Mark {
        self.engine_mark
    }

    /// Current status of the live board.
    pub fn status(&self) -> GameStatus {
        status(&self.board)
    }

    /// The completed line once the game is won, for highlighting.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winning_line
    }

    /// Apply the human's move at `index`.
    ///
    /// Rejects with `InvalidMove` (no state change) when the game is over,
    /// the engine is to move, or the cell is occupied. On success the phase
    /// advances to `EngineTurn`, or `GameOver` if the move ended the game.
    pub fn play_human(&mut self, index: usize) -> Result<GameStatus, EngineError> {
        match self.phase {
            GamePhase::Idle | GamePhase::HumanTurn => {}
            GamePhase::EngineTurn | GamePhase::GameOver => {
                return Err(EngineError::InvalidMove { index });
            }
        }
        self.board.apply_move(index, self.human_mark)?;
        log::trace!("human played cell {}", index);
        Ok(self.evaluate(GamePhase::EngineTurn))
    }

    /// Compute and apply the engine's reply.
    ///
    /// Only legal in `EngineTurn`. The selector's `NoLegalMove` cannot occur
    /// here in normal operation because the phase only reaches `EngineTurn`
    /// on an in-progress board; it is still propagated rather than unwrapped.
    pub fn play_engine(&mut self) -> Result<GameStatus, EngineError> {
        if self.phase != GamePhase::EngineTurn {
            return Err(EngineError::NoLegalMove);
        }
        let result = select_move(&self.board, self.engine_mark)?;
        self.board.apply_move(result.best_index, self.engine_mark)?;
        log::trace!(
            "engine played cell {} (value {})",
            result.best_index,
            result.value
        );
        Ok(self.evaluate(GamePhase::HumanTurn))
    }

    /// One full round: the human's move, then the engine's reply if the game
    /// is still in progress. Returns the status after the last move applied.
    pub fn play_round(&mut self, index: usize) -> Result<GameStatus, EngineError> {
        let after_human = self.play_human(index)?;
        if after_human.is_terminal() {
            return Ok(after_human);
        }
        self.play_engine()
    }

    /// Clear the board and the cached winning line, returning to `Idle`.
    /// Calling this any number of times yields the same state.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.phase = GamePhase::Idle;
        self.winning_line = None;
        log::trace!("controller reset");
    }

    /// Recompute status after a move and advance the phase accordingly.
    fn evaluate(&mut self, next: GamePhase) -> GameStatus {
        let current = status(&self.board);
        if current.is_terminal() {
            self.phase = GamePhase::GameOver;
            self.winning_line = winning_line(&self.board);
        } else {
            self.phase = next;
        }
        current
    }
}
