//! Fixed-priority "quick" strategy.
//!
//! The quick strategy picks the first empty cell in a fixed priority order:
//! center, then corners, then edges. It never looks at the opponent's
//! position, so it can walk straight into a loss. That is the point: it is
//! the easy difficulty tier, and it costs nothing to compute.

use crate::board::Board;

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];
const EDGES: [usize; 4] = [1, 3, 5, 7];

/// The fixed-priority cell picker.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickStrategy;

impl QuickStrategy {
    /// Creates a new quick strategy.
    pub fn new() -> Self {
        QuickStrategy
    }

    /// Returns the highest-priority empty cell, or `None` on a full board.
    ///
    /// Priority order: center (4), corners in the order `[0, 2, 6, 8]`,
    /// edges in the order `[1, 3, 5, 7]`.
    pub fn select(&self, board: &Board) -> Option<usize> {
        if board.is_empty_cell(CENTER) {
            return Some(CENTER);
        }

        CORNERS
            .iter()
            .chain(EDGES.iter())
            .copied()
            .find(|&index| board.is_empty_cell(index))
    }
}
