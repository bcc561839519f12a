//! Winner classification for board positions.
//!
//! The engine does not hard-code how a finished game is detected. It asks a
//! [`WinClassifier`] supplied by the caller, which keeps the search decoupled
//! from whatever the surrounding application uses to track game state.
//! [`LineClassifier`] is the stock implementation and the default used by the
//! selector facade.

use crate::board::{Board, Mark};

/// The eight winning lines: three rows, three columns, two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Capability trait for classifying the winner of a position.
///
/// Implementations must be pure: the same board always yields the same
/// answer, and the board is never modified.
pub trait WinClassifier: Send + Sync {
    /// Returns the mark owning a completed line, or `None` if no line is
    /// complete.
    ///
    /// A full board with no completed line still returns `None`; draw
    /// detection is the caller's job, via [`Board::is_full`].
    fn winner(&self, board: &Board) -> Option<Mark>;
}

/// Stock classifier that scans the eight win lines.
///
/// Returns the mark of the first fully-owned line found. In a legal game at
/// most one side can own a line, so scan order does not affect the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier;

impl LineClassifier {
    /// Creates a new line classifier.
    pub fn new() -> Self {
        LineClassifier
    }
}

impl WinClassifier for LineClassifier {
    fn winner(&self, board: &Board) -> Option<Mark> {
        for line in &WIN_LINES {
            if let Some(mark) = board.cell(line[0]) {
                if board.cell(line[1]) == Some(mark) && board.cell(line[2]) == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }
}

/// Any plain function over the board works as a classifier, so callers can
/// inject a closure instead of defining a type.
impl<F> WinClassifier for F
where
    F: Fn(&Board) -> Option<Mark> + Send + Sync,
{
    fn winner(&self, board: &Board) -> Option<Mark> {
        self(board)
    }
}
