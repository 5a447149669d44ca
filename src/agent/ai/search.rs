// Root move selection
//
// Drives the minimax value function over every currently-empty cell and picks
// the index with the best value. Ties are broken by keeping the first maximal
// cell in ascending index order; that ordering is a documented contract, not
// an accident of iteration.

use super::minimax::{value, MAX_VALUE, MIN_VALUE};
use crate::error::EngineError;
use crate::game_repr::{status, Board, Mark};

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen cell index (0-8).
    pub best_index: usize,
    /// Root value of that cell. Internal comparison data, never shown to the
    /// player.
    pub value: i32,
    /// Empty cells evaluated at the root, for logging.
    pub nodes: u64,
}

/// Pick the best move for `engine_mark` on `board`.
///
/// Validates the precondition first: the game must still be in progress.
/// Asking for a move on a won, drawn, or full board is a caller-side contract
/// violation and returns [`EngineError::NoLegalMove`] rather than an arbitrary
/// index.
///
/// The caller's board is unchanged after the call returns; the search works on
/// its own scratch copy with a place/undo discipline inside the recursion.
pub fn select_move(board: &Board, engine_mark: Mark) -> Result<SearchResult, EngineError> {
    if status(board).is_terminal() {
        return Err(EngineError::NoLegalMove);
    }

    let mut scratch = board.clone();
    let mut best: Option<SearchResult> = None;
    let mut nodes = 0u64;

    for index in scratch.empty_cells() {
        scratch.place(index, engine_mark);
        let v = value(&mut scratch, engine_mark, 1, false, MIN_VALUE, MAX_VALUE);
        scratch.clear(index);
        nodes += 1;

        // Strict improvement only: the first cell reaching the maximum wins.
        match best {
            Some(b) if v <= b.value => {}
            _ => {
                best = Some(SearchResult {
                    best_index: index,
                    value: v,
                    nodes: 0,
                })
            }
        }
    }

    // status() == InProgress guarantees at least one empty cell.
    let mut result = best.ok_or(EngineError::NoLegalMove)?;
    result.nodes = nodes;
    Ok(result)
}
