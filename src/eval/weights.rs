//! Signal weights for Othello evaluation
//!
//! Each signal is a ratio in [-1, 1], so the weights bound the evaluation to
//! [-120, 120].

/// Weights of the evaluation signals
pub struct Weights;

impl Weights {
    /// Corner control: corners are never flipped back
    pub const CORNER: f32 = 100.0;
    /// Piece differential
    pub const PIECES: f32 = 10.0;
    /// Mobility differential (legal move counts)
    pub const MOBILITY: f32 = 10.0;

    /// Largest magnitude `evaluate` can return
    pub const MAX: f32 = Self::CORNER + Self::PIECES + Self::MOBILITY;
}
