//! Board representation for 3x3 Tic-Tac-Toe.
//!
//! The board is a flat, row-major sequence of nine cells, indexed 0-8
//! (`row = index / 3`, `col = index % 3`). It is the primary input type of
//! the engine and is never mutated by it: the search works on a private
//! scratch copy, and callers derive successor positions with
//! [`Board::with_move`].

use std::fmt;
use std::str::FromStr;

use crate::EngineError;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// One of the two marks that can occupy a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the other mark.
    ///
    /// Exactly two sides exist, so this is a total involution: X and O map
    /// to each other.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A single cell: empty, or occupied by a mark.
pub type Cell = Option<Mark>;

/// A 3x3 board stored as nine cells in row-major order.
///
/// Index 0 is the top-left corner and index 8 the bottom-right. The type is
/// `Copy` so the search can take its one scratch copy with a plain
/// dereference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Creates a board with all nine cells empty.
    pub fn empty() -> Self {
        Board::default()
    }

    /// Creates a board from an array of nine cells.
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Board { cells }
    }

    /// Returns the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Returns the underlying cell array.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Returns true if the cell at `index` is empty.
    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.cells[index].is_none()
    }

    /// Returns true if no empty cell remains.
    ///
    /// A full board with no winner is a draw; combining this with a
    /// [`WinClassifier`](crate::classify::WinClassifier) is how callers
    /// detect one.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Returns the indices of all empty cells, in ascending order.
    ///
    /// The ascending order is load-bearing: the search enumerates candidate
    /// moves through this iterator, and score ties keep the first-seen
    /// (lowest-index) move.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
    }

    /// Returns the number of occupied cells.
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns a new board with `mark` placed at `index`, leaving `self`
    /// untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    pub fn with_move(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = Some(mark);
        next
    }

    /// Places `mark` at `index` in-place. Search scratch use only.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    /// Clears the cell at `index` in-place. Undoes a [`Board::place`] on
    /// recursion unwind.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = None;
    }
}

impl TryFrom<&[Cell]> for Board {
    type Error = EngineError;

    /// Validates the nine-cell shape; any other length is rejected.
    fn try_from(cells: &[Cell]) -> Result<Self, Self::Error> {
        let cells: [Cell; BOARD_CELLS] = cells
            .try_into()
            .map_err(|_| EngineError::InvalidBoardSize { len: cells.len() })?;
        Ok(Board { cells })
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parses a nine-character board string such as `"XX..O..O."`.
    ///
    /// `X` and `O` are marks; `.` and `_` are empty cells. Index 0 is the
    /// first character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; BOARD_CELLS];
        let mut count = 0;

        for (index, ch) in s.chars().enumerate() {
            if index >= BOARD_CELLS {
                return Err(EngineError::InvalidBoardSize {
                    len: s.chars().count(),
                });
            }
            cells[index] = match ch {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '.' | '_' => None,
                _ => return Err(EngineError::InvalidBoardChar { ch, index }),
            };
            count += 1;
        }

        if count != BOARD_CELLS {
            return Err(EngineError::InvalidBoardSize { len: count });
        }

        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2")?;
        for row in 0..3 {
            write!(f, "{} ", row)?;
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Some(Mark::X) => "X",
                    Some(Mark::O) => "O",
                    None => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
