use crate::error::EngineError;
use crate::game_repr::Mark;
use smallvec::SmallVec;
use std::fmt;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Content of a single board cell.
///
/// A closed enumeration: a cell is empty or holds exactly one mark, nothing
/// else is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Taken(Mark),
}

/// List of empty cell indices, inline-allocated (a board never has more
/// than nine).
pub type CellIndices = SmallVec<[usize; BOARD_CELLS]>;

/// A 3x3 board stored row-major, cells indexed 0-8.
///
/// The board knows nothing about turn order; the orchestrator owns whose
/// turn it is. A board starts empty and is mutated one cell at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Cell content at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// True if `index` is on the board and unoccupied.
    pub fn is_cell_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Place `mark` at `index`, failing if the cell is occupied or out of range.
    ///
    /// This is the only mutation the public surface offers; the search engine
    /// uses the crate-internal [`place`](Self::place)/[`clear`](Self::clear)
    /// pair on its own scratch copy.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), EngineError> {
        if !self.is_cell_empty(index) {
            return Err(EngineError::InvalidMove { index });
        }
        self.cells[index] = Cell::Taken(mark);
        Ok(())
    }

    /// Place a mark without validation. Caller guarantees the cell is empty.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        debug_assert!(matches!(self.cells[index], Cell::Empty));
        self.cells[index] = Cell::Taken(mark);
    }

    /// Undo a tentative placement made by [`place`](Self::place).
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    /// Indices of all empty cells, in ascending order.
    ///
    /// Ascending order matters: the search engine's tie-break contract is
    /// "first cell achieving the maximum value wins".
    pub fn empty_cells(&self) -> CellIndices {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, Cell::Empty))
            .map(|(i, _)| i)
            .collect()
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !matches!(c, Cell::Empty))
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Text rendering for the terminal driver: marks where placed, the cell
    /// index where empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, " {} ", index)?,
                    Cell::Taken(mark) => write!(f, " {} ", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f, "\n---+---+---")?;
            }
        }
        Ok(())
    }
}
