//! Game rules for Othello
//!
//! This module implements the rule set:
//! - Legal move discovery over the frontier (capturing directions)
//! - Move execution with run flipping, and exact undo

pub mod legal;
pub mod position;

// Re-exports for convenient access
pub use legal::{captures_in_direction, find_legal_moves, valid_directions};
pub use position::{MoveError, MoveRecord, Position, SlotChange};
