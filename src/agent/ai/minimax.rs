// Minimax with Alpha-Beta Pruning
//
// Full game-tree search: no depth cutoff and no heuristic evaluation, so the
// returned value is the exact game-theoretic value of the board under optimal
// play. Alpha-beta pruning skips branches proven irrelevant to the final
// decision; it must never change the returned value versus unpruned minimax.
//
// Terminal values are depth-adjusted so the engine prefers the fastest win
// and the most delayed loss:
//   win for the maximizing mark  ->  WIN_VALUE - depth
//   win for the minimizing mark  ->  depth - WIN_VALUE
//   draw                         ->  0
// `depth` counts plies from the root of this search call, not total game
// length.

use crate::game_repr::{winner, Board, Mark};

/// Base value of a win before depth adjustment.
pub const WIN_VALUE: i32 = 10;

/// Lower bound below every reachable value, used to seed alpha.
pub const MIN_VALUE: i32 = -WIN_VALUE - 1;

/// Upper bound above every reachable value, used to seed beta.
pub const MAX_VALUE: i32 = WIN_VALUE + 1;

/// Game-theoretic value of `board` for `max_mark`, assuming `maximizing`
/// indicates which side moves next.
///
/// The board is mutated transiently during recursion (place, recurse, undo)
/// and is restored to its input state before every return. Siblings never
/// observe each other's tentative moves; no state outside the call's stack
/// frame is touched.
pub fn value(
    board: &mut Board,
    max_mark: Mark,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(mark) = winner(board) {
        return if mark == max_mark {
            WIN_VALUE - depth
        } else {
            depth - WIN_VALUE
        };
    }
    if board.is_full() {
        return 0;
    }

    let to_move = if maximizing {
        max_mark
    } else {
        max_mark.opponent()
    };

    if maximizing {
        let mut best = MIN_VALUE;
        for index in board.empty_cells() {
            board.place(index, to_move);
            let v = value(board, max_mark, depth + 1, false, alpha, beta);
            board.clear(index);

            best = best.max(v);
            alpha = alpha.max(v);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = MAX_VALUE;
        for index in board.empty_cells() {
            board.place(index, to_move);
            let v = value(board, max_mark, depth + 1, true, alpha, beta);
            board.clear(index);

            best = best.min(v);
            beta = beta.min(v);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
