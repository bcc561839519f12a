//! Move-selection strategies.
//!
//! This module contains the two selection strategies the facade dispatches
//! between:
//! - Quick: a fixed-priority cell picker (the easy tier)
//! - Minimax: depth-limited adversarial search (the strong tier)

pub mod minimax;
pub mod quick;

pub use minimax::MinimaxSearch;
pub use quick::QuickStrategy;
