//! The move selector facade.
//!
//! [`MoveSelector`] is the entry point most callers want: it holds a
//! [`SelectorConfig`] and a winner classifier, dispatches to the configured
//! strategy, and fails soft on malformed input. It holds no game state of
//! its own; the same selector can serve any number of positions.

use log::{debug, warn};

use crate::board::{Board, Cell, Mark};
use crate::classify::{LineClassifier, WinClassifier};
use crate::config::{SelectorConfig, Strategy};
use crate::stats::SearchStatistics;
use crate::strategy::{MinimaxSearch, QuickStrategy};

/// Selects moves for one side according to a strategy configuration.
///
/// The selector is a pure function of its inputs: identical board, side,
/// and configuration always produce the identical move, and the caller's
/// board is never mutated.
///
/// # Example
///
/// ```
/// use tictac_engine::{Board, Mark, MoveSelector, SelectorConfig};
///
/// let board: Board = "XX..O..O.".parse()?;
/// let selector = MoveSelector::new(SelectorConfig::default());
///
/// // X completes the top row.
/// assert_eq!(selector.choose(&board, Mark::X), Some(2));
/// # Ok::<(), tictac_engine::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MoveSelector<C: WinClassifier = LineClassifier> {
    config: SelectorConfig,
    classifier: C,
}

impl MoveSelector<LineClassifier> {
    /// Creates a selector with the given configuration and the stock line
    /// classifier.
    pub fn new(config: SelectorConfig) -> Self {
        MoveSelector {
            config,
            classifier: LineClassifier::new(),
        }
    }
}

impl Default for MoveSelector<LineClassifier> {
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

impl<C: WinClassifier> MoveSelector<C> {
    /// Replaces the winner classifier.
    ///
    /// The classifier is a capability injected by the caller; the engine
    /// never assumes how the surrounding application detects completed
    /// games.
    pub fn with_classifier<D: WinClassifier>(self, classifier: D) -> MoveSelector<D> {
        MoveSelector {
            config: self.config,
            classifier,
        }
    }

    /// Returns the selector's configuration.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Returns the chosen cell index for `ai_side`, or `None` if no move is
    /// available.
    ///
    /// `None` is a normal outcome (full board, or a position the classifier
    /// already reports as won), not an error.
    pub fn choose(&self, board: &Board, ai_side: Mark) -> Option<usize> {
        self.choose_with_stats(board, ai_side).0
    }

    /// Like [`MoveSelector::choose`], additionally reporting search
    /// statistics. The quick strategy performs no search and reports empty
    /// statistics.
    pub fn choose_with_stats(
        &self,
        board: &Board,
        ai_side: Mark,
    ) -> (Option<usize>, SearchStatistics) {
        let (chosen, stats) = match self.config.strategy {
            Strategy::Quick => (QuickStrategy::new().select(board), SearchStatistics::new()),
            Strategy::Minimax => MinimaxSearch::new(self.config.effective_depth())
                .select_with_stats(board, ai_side, &self.classifier),
        };

        debug!(
            "{:?} strategy chose {:?} for {} on {}-mark board",
            self.config.strategy,
            chosen,
            ai_side,
            board.mark_count()
        );
        debug_assert!(
            chosen.map_or(true, |index| board.is_empty_cell(index)),
            "selector returned an occupied cell"
        );

        (chosen, stats)
    }

    /// Slice entry point for callers that do not hold a [`Board`].
    ///
    /// A slice of any length other than nine is rejected by returning
    /// `None`; the selector never panics on malformed input.
    pub fn choose_in(&self, cells: &[Cell], ai_side: Mark) -> Option<usize> {
        match Board::try_from(cells) {
            Ok(board) => self.choose(&board, ai_side),
            Err(err) => {
                warn!("rejecting malformed board: {err}");
                None
            }
        }
    }
}

/// Convenience function: selects a move with the stock line classifier.
pub fn choose_move(board: &Board, ai_side: Mark, config: &SelectorConfig) -> Option<usize> {
    MoveSelector::new(config.clone()).choose(board, ai_side)
}
