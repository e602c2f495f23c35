//! Evaluation module for Othello positions
//!
//! The evaluation combines three zero-centered signals:
//! - Corner control
//! - Piece differential
//! - Mobility differential

pub mod heuristic;
pub mod weights;

pub use heuristic::{corner_count, evaluate};
pub use weights::Weights;
