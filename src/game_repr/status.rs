//! Terminal detection: classify a board as ongoing, won, or drawn.
//!
//! These are pure functions over a board snapshot. The detector only reports
//! what it finds; it does not enforce that the board was reached by legal
//! alternating play. On boards that would be illegal to reach (two completed
//! lines for different marks) the scan order below makes the answer
//! deterministic: the lowest-indexed line wins.

use crate::game_repr::{Board, Cell, Mark};

/// The eight winning lines: rows, then columns, then diagonals.
///
/// The declaration order is part of the contract — `winner` scans these in
/// order and returns the first match, so tests on degenerate boards are
/// reproducible.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Current status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// The mark completed the given line.
    Won(Mark, [usize; 3]),
    /// The board is full with no winner.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// The mark holding a completed line, if any.
///
/// Scans [`WINNING_LINES`] in declaration order and returns on the first
/// line whose three cells share a mark.
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line_with_mark(board).map(|(mark, _)| mark)
}

/// The completed line itself, for UI highlighting. Derived data, no side
/// effects.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    winning_line_with_mark(board).map(|(_, line)| line)
}

/// Classify the board: `Won` beats `Draw` beats `InProgress`.
pub fn status(board: &Board) -> GameStatus {
    if let Some((mark, line)) = winning_line_with_mark(board) {
        GameStatus::Won(mark, line)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

fn winning_line_with_mark(board: &Board) -> Option<(Mark, [usize; 3])> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Some(Cell::Taken(mark)) = board.get(a) {
            if board.get(b) == Some(Cell::Taken(mark)) && board.get(c) == Some(Cell::Taken(mark)) {
                return Some((mark, line));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(index, mark) in marks {
            board.apply_move(index, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert_eq!(winning_line(&board), None);
        assert_eq!(status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_row_win() {
        let board = board_from(&[
            (0, Mark::X),
            (3, Mark::O),
            (1, Mark::X),
            (4, Mark::O),
            (2, Mark::X),
        ]);
        assert_eq!(winner(&board), Some(Mark::X));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
        assert_eq!(status(&board), GameStatus::Won(Mark::X, [0, 1, 2]));
    }

    #[test]
    fn test_column_win() {
        let board = board_from(&[
            (1, Mark::O),
            (0, Mark::X),
            (4, Mark::O),
            (2, Mark::X),
            (7, Mark::O),
        ]);
        assert_eq!(winner(&board), Some(Mark::O));
        assert_eq!(winning_line(&board), Some([1, 4, 7]));
    }

    #[test]
    fn test_diagonal_win() {
        let board = board_from(&[
            (0, Mark::X),
            (1, Mark::O),
            (4, Mark::X),
            (2, Mark::O),
            (8, Mark::X),
        ]);
        assert_eq!(winning_line(&board), Some([0, 4, 8]));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_from(&[
            (2, Mark::O),
            (0, Mark::X),
            (4, Mark::O),
            (1, Mark::X),
            (6, Mark::O),
        ]);
        assert_eq!(winning_line(&board), Some([2, 4, 6]));
    }

    #[test]
    fn test_draw() {
        // X O X / X O O / O X X - full, no line.
        let board = board_from(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);
        assert_eq!(winner(&board), None);
        assert_eq!(status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = board_from(&[(0, Mark::X), (1, Mark::X)]);
        assert_eq!(winner(&board), None);
        assert_eq!(status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_illegal_board_lowest_line_wins() {
        // Unreachable under alternating play: X holds row 0, O holds row 2.
        // The detector reports row 0 because it scans lines in order.
        let mut board = Board::new();
        for i in [0, 1, 2] {
            board.apply_move(i, Mark::X).unwrap();
        }
        for i in [6, 7, 8] {
            board.apply_move(i, Mark::O).unwrap();
        }
        assert_eq!(winner(&board), Some(Mark::X));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn test_illegal_board_same_mark_two_lines() {
        // X holds both row 0 and column 0; the row is declared first.
        let mut board = Board::new();
        for i in [0, 1, 2, 3, 6] {
            board.apply_move(i, Mark::X).unwrap();
        }
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn test_win_on_full_board_reports_won_not_draw() {
        // X O X / O O X / O X X - full, X wins column 2.
        let board = board_from(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::O),
            (5, Mark::X),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);
        assert_eq!(status(&board), GameStatus::Won(Mark::X, [2, 5, 8]));
    }
}
