//! Error types for the engine's public surface.

/// Errors that can occur when applying moves or asking the engine for one.
///
/// Only two kinds exist: `InvalidMove` is recoverable (the controller rejects
/// the request and nothing changes), `NoLegalMove` signals that the caller
/// violated the engine's precondition by asking for a move on a finished or
/// full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The requested cell is occupied, out of range, or the game is already over.
    #[error("invalid move at cell {index}")]
    InvalidMove { index: usize },

    /// The engine was asked to move on a board with no legal moves
    /// (full or already won). The caller must not reach this state.
    #[error("no legal move available")]
    NoLegalMove,
}
