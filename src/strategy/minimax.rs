//! Depth-limited minimax search.
//!
//! Classic adversarial minimax over the 3x3 game tree. The search is exact
//! at full depth and deliberately myopic below it: a node reached with no
//! depth left is valued as a draw instead of being statically evaluated,
//! which is what makes low depth limits play weaker.
//!
//! There is no alpha-beta pruning and no transposition table. The whole tree
//! from an empty board is bounded by 9! leaf visits and terminal cutoffs
//! keep the practical count far lower, so the simple walk is fast enough.

use std::time::Instant;

use log::trace;

use crate::board::{Board, Mark, BOARD_CELLS};
use crate::classify::WinClassifier;
use crate::config::{MAX_SEARCH_DEPTH, MIN_SEARCH_DEPTH};
use crate::stats::SearchStatistics;

/// Score awarded for a win with no remaining depth; wins found with depth to
/// spare score up to `WIN_SCORE + MAX_SEARCH_DEPTH`.
const WIN_SCORE: i32 = 10;

/// Backed-up evaluation of one subtree: the game-theoretic score and the
/// move that achieves it (`None` at leaves).
#[derive(Debug, Clone, Copy)]
struct SearchOutcome {
    score: i32,
    cell: Option<usize>,
}

/// Depth-limited minimax move selection.
///
/// The searcher holds only its depth limit; every call is a pure function of
/// the board, the side to move, and the injected classifier, so a single
/// instance can be reused freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxSearch {
    depth_limit: u8,
}

impl MinimaxSearch {
    /// Creates a searcher with the given depth limit in plies.
    ///
    /// The limit is clamped to `[1, 9]`; values above 9 buy nothing on a
    /// nine-cell board and a limit of 0 could never produce a move.
    pub fn new(depth_limit: u8) -> Self {
        MinimaxSearch {
            depth_limit: depth_limit.clamp(MIN_SEARCH_DEPTH, MAX_SEARCH_DEPTH),
        }
    }

    /// Creates a searcher that explores the full game tree.
    pub fn full_depth() -> Self {
        Self::new(MAX_SEARCH_DEPTH)
    }

    /// Returns the clamped depth limit.
    pub fn depth_limit(&self) -> u8 {
        self.depth_limit
    }

    /// Returns the best move for `ai_side`, or `None` if the position is
    /// already decided (a completed line, or no empty cell).
    pub fn select<C: WinClassifier>(
        &self,
        board: &Board,
        ai_side: Mark,
        classifier: &C,
    ) -> Option<usize> {
        self.select_with_stats(board, ai_side, classifier).0
    }

    /// Like [`MinimaxSearch::select`], additionally reporting search
    /// statistics.
    pub fn select_with_stats<C: WinClassifier>(
        &self,
        board: &Board,
        ai_side: Mark,
        classifier: &C,
    ) -> (Option<usize>, SearchStatistics) {
        let start = Instant::now();
        let mut stats = SearchStatistics::new();

        // One scratch copy for the whole search; every placement is undone
        // on unwind, so the caller's board is never touched.
        let mut scratch = *board;
        let outcome = self.search(
            &mut scratch,
            ai_side,
            ai_side,
            self.depth_limit,
            0,
            classifier,
            &mut stats,
        );
        debug_assert_eq!(scratch, *board, "search failed to backtrack fully");

        stats.elapsed = start.elapsed();
        trace!(
            "minimax depth={} side={} -> {:?} (score {}, {} nodes in {:?})",
            self.depth_limit,
            ai_side,
            outcome.cell,
            outcome.score,
            stats.nodes_visited,
            stats.elapsed
        );

        (outcome.cell, stats)
    }

    fn search<C: WinClassifier>(
        &self,
        board: &mut Board,
        ai_side: Mark,
        to_move: Mark,
        depth_left: u8,
        ply: usize,
        classifier: &C,
        stats: &mut SearchStatistics,
    ) -> SearchOutcome {
        stats.nodes_visited += 1;
        stats.max_ply = stats.max_ply.max(ply);

        // Remaining depth biases the score: quicker wins beat slower ones,
        // and quicker losses are penalized harder than distant ones.
        if let Some(winner) = classifier.winner(board) {
            stats.terminal_hits += 1;
            let magnitude = WIN_SCORE + i32::from(depth_left);
            let score = if winner == ai_side { magnitude } else { -magnitude };
            return SearchOutcome { score, cell: None };
        }

        if board.is_full() {
            stats.terminal_hits += 1;
            return SearchOutcome { score: 0, cell: None };
        }

        if depth_left == 0 {
            // Out of depth with the game still open: valued as a draw, not
            // statically evaluated. This understates favorable positions and
            // is what makes low depth limits play weaker.
            return SearchOutcome { score: 0, cell: None };
        }

        let maximizing = to_move == ai_side;
        let mut best = SearchOutcome {
            score: if maximizing { i32::MIN } else { i32::MAX },
            cell: None,
        };

        // Ascending index order plus strict comparisons below gives the
        // deterministic tie-break: equal scores keep the lowest index.
        for index in 0..BOARD_CELLS {
            if !board.is_empty_cell(index) {
                continue;
            }

            board.place(index, to_move);
            let child = self.search(
                board,
                ai_side,
                to_move.opponent(),
                depth_left - 1,
                ply + 1,
                classifier,
                stats,
            );
            board.clear(index);

            let better = if maximizing {
                child.score > best.score
            } else {
                child.score < best.score
            };
            if better {
                best = SearchOutcome {
                    score: child.score,
                    cell: Some(index),
                };
            }
        }

        best
    }
}

impl Default for MinimaxSearch {
    fn default() -> Self {
        Self::full_depth()
    }
}
