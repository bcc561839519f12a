//! # tictac-engine
//!
//! A deterministic move-selection engine for 3x3 Tic-Tac-Toe.
//!
//! This crate provides the decision-making core of a Tic-Tac-Toe opponent:
//! given a board, the side the engine plays, and a strategy configuration,
//! it returns the index of the next move, or `None` when no move is
//! available. Everything around it (rendering, turn tracking, scoring,
//! persistence) is the caller's business; the engine holds no state between
//! calls and never mutates the board it is given.
//!
//! ## Features
//!
//! - Two strategies: a fixed-priority "quick" picker and a depth-limited
//!   minimax search that plays perfectly at full depth
//! - A difficulty knob: the minimax depth limit, clamped to 1-9 plies
//! - An injected winner classifier, so the engine stays decoupled from how
//!   the surrounding application detects completed games
//! - Deterministic tie-breaking: among equally-scored moves the lowest cell
//!   index wins, so identical inputs always produce identical moves
//! - Search statistics for benchmarks and curiosity
//!
//! ## Basic Usage
//!
//! ```
//! use tictac_engine::{Board, Mark, MoveSelector, SelectorConfig, Strategy};
//!
//! // O threatens the top row; X must block at index 2.
//! let board: Board = "OO.X.....".parse()?;
//!
//! let config = SelectorConfig::default().with_strategy(Strategy::Minimax);
//! let selector = MoveSelector::new(config);
//!
//! assert_eq!(selector.choose(&board, Mark::X), Some(2));
//! # Ok::<(), tictac_engine::EngineError>(())
//! ```
//!
//! ## How It Works
//!
//! The minimax strategy walks the game tree from the current position,
//! alternating between maximizing the engine's score and minimizing it for
//! the opponent. Terminal positions score `+10` plus the remaining depth
//! for an engine win (rewarding faster wins), the negation of that for a
//! loss, and `0` for a draw. When the depth limit runs out before the game
//! is decided, the position is valued as a draw; that flat estimate is what
//! makes low depth limits play weaker, and it is the intended difficulty
//! trade-off rather than a bug.
//!
//! The quick strategy does not search at all: center first, then corners,
//! then edges, whatever the opponent is up to.
//!
//! ## Injecting a Classifier
//!
//! The engine asks a [`WinClassifier`] whether a position is won. The stock
//! [`LineClassifier`] scans the eight win lines, but any closure over the
//! board works:
//!
//! ```
//! use tictac_engine::{Board, LineClassifier, Mark, MoveSelector, WinClassifier};
//!
//! let selector = MoveSelector::default()
//!     .with_classifier(|board: &Board| LineClassifier::new().winner(board));
//!
//! let opening = Board::empty();
//! assert!(selector.choose(&opening, Mark::O).is_some());
//! ```

pub mod board;
pub mod classify;
pub mod config;
pub mod selector;
pub mod stats;
pub mod strategy;

pub use board::{Board, Cell, Mark, BOARD_CELLS};
pub use classify::{LineClassifier, WinClassifier, WIN_LINES};
pub use config::{SelectorConfig, Strategy, MAX_SEARCH_DEPTH, MIN_SEARCH_DEPTH};
pub use selector::{choose_move, MoveSelector};
pub use stats::SearchStatistics;
pub use strategy::{MinimaxSearch, QuickStrategy};

/// Error types for board construction and parsing
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// A board was supplied with the wrong number of cells
    #[error("board must have exactly 9 cells, got {len}")]
    InvalidBoardSize {
        /// Number of cells actually supplied
        len: usize,
    },

    /// A board string contained a character other than `X`, `O`, `.` or `_`
    #[error("invalid board character {ch:?} at index {index}")]
    InvalidBoardChar {
        /// The offending character
        ch: char,
        /// Its position in the string
        index: usize,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
