//! Statistics collection for minimax searches.
//!
//! This module provides a structure for observing the work a search did.
//! Statistics are purely observational and never influence which move the
//! search returns.

use std::time::Duration;

/// Statistics collected during one minimax search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of nodes visited, including the root.
    pub nodes_visited: u64,

    /// Number of nodes scored as terminal (won or full).
    pub terminal_hits: u64,

    /// Deepest ply reached below the root.
    pub max_ply: usize,

    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object.
    pub fn new() -> Self {
        SearchStatistics {
            nodes_visited: 0,
            terminal_hits: 0,
            max_ply: 0,
            elapsed: Duration::from_secs(0),
        }
    }

    /// Returns the number of nodes visited per second.
    pub fn nodes_per_second(&self) -> f64 {
        if self.elapsed.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.nodes_visited as f64 / self.elapsed.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string.
    pub fn summary(&self) -> String {
        format!(
            "Minimax Search Statistics:\n\
             - Nodes visited: {}\n\
             - Terminal hits: {}\n\
             - Max ply: {}\n\
             - Total time: {:.3} ms\n\
             - Nodes per second: {:.1}",
            self.nodes_visited,
            self.terminal_hits,
            self.max_ply,
            self.elapsed.as_secs_f64() * 1000.0,
            self.nodes_per_second()
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
