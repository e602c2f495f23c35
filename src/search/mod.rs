//! Search module for the Othello AI
//!
//! Contains:
//! - Fixed-depth minimax with alpha-beta pruning over play/undo

pub mod minimax;

pub use minimax::{SearchResult, Searcher, SEARCH_DEPTH};
