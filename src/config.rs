//! Configuration options for the move selector.
//!
//! This module defines the strategy choice and the search-depth knob that
//! together act as the engine's difficulty setting.

/// Which selection strategy the facade dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Fixed-priority cell picker: center, then corners, then edges.
    ///
    /// Ignores the opponent entirely and can lose to skilled play. This is
    /// the easy tier, not a correctness claim.
    Quick,

    /// Depth-limited minimax over the full game tree.
    ///
    /// At the default depth this plays perfectly; lower depths deliberately
    /// weaken it.
    Minimax,
}

/// Smallest accepted search depth, in plies.
pub const MIN_SEARCH_DEPTH: u8 = 1;

/// Largest useful search depth: a 9-cell board is exhausted in 9 plies.
pub const MAX_SEARCH_DEPTH: u8 = 9;

/// Configuration for the move selector.
///
/// Use the builder methods to customize a configuration.
///
/// # Example
///
/// ```
/// use tictac_engine::{SelectorConfig, Strategy};
///
/// let config = SelectorConfig::default()
///     .with_strategy(Strategy::Minimax)
///     .with_depth(4);
///
/// assert_eq!(config.effective_depth(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Strategy the facade dispatches to.
    pub strategy: Strategy,

    /// Search depth limit in plies, for the minimax strategy.
    ///
    /// `None` means full search. The quick strategy ignores this field.
    pub depth: Option<u8>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            strategy: Strategy::Minimax,
            depth: None,
        }
    }
}

impl SelectorConfig {
    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the search depth limit.
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Returns the depth the search will actually use.
    ///
    /// Unset depth means full search; out-of-range values are clamped to
    /// `[MIN_SEARCH_DEPTH, MAX_SEARCH_DEPTH]` rather than rejected.
    pub fn effective_depth(&self) -> u8 {
        self.depth
            .unwrap_or(MAX_SEARCH_DEPTH)
            .clamp(MIN_SEARCH_DEPTH, MAX_SEARCH_DEPTH)
    }
}
