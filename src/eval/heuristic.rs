//! Heuristic evaluation function for Othello positions
//!
//! This module provides the leaf evaluation for the minimax search. It is a
//! pure function of the position: nothing is mutated, so it can be called on
//! the live game as well as on search scratch copies.

use crate::board::{Board, Color};
use crate::rules::Position;

use super::weights::Weights;

/// Evaluate the position from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate advantage for `color`
/// - Negative values indicate disadvantage for `color`
/// - `evaluate(p, c) == -evaluate(p, c.opponent())`
///
/// # Arguments
/// * `position` - The current position
/// * `color` - The color to evaluate for
#[must_use]
pub fn evaluate(position: &Position, color: Color) -> f32 {
    let opponent = color.opponent();
    let board = position.board();

    let corners = ratio(corner_count(board, color), corner_count(board, opponent));
    let pieces = ratio(position.count(color), position.count(opponent));
    let mobility = ratio(
        position.legal_moves(color).len(),
        position.legal_moves(opponent).len(),
    );

    corners * Weights::CORNER + pieces * Weights::PIECES + mobility * Weights::MOBILITY
}

/// Number of the four distinct corners held by `color`
#[must_use]
pub fn corner_count(board: &Board, color: Color) -> usize {
    let cell = color.to_cell();
    board
        .corners()
        .iter()
        .filter(|&&pos| board.get(pos) == cell)
        .count()
}

/// `(own - opp) / (own + opp)`, or 0 when both are zero
#[inline]
fn ratio(own: usize, opp: usize) -> f32 {
    let total = own + opp;
    if total == 0 {
        return 0.0;
    }
    (own as f32 - opp as f32) / total as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardSize, Pos};

    fn position(size: usize) -> Position {
        Position::new(BoardSize::new(size).unwrap())
    }

    #[test]
    fn test_evaluate_opening_is_balanced() {
        let p = position(8);
        assert_eq!(evaluate(&p, Color::Black), 0.0);
        assert_eq!(evaluate(&p, Color::White), 0.0);
    }

    #[test]
    fn test_evaluate_after_capture() {
        let mut p = position(8);
        p.play(Color::Black, Pos::new(2, 3)).unwrap();

        // Pieces 4 vs 1, mobility 3 (black) vs 3 (white), no corners
        let black_moves = p.legal_moves(Color::Black).len() as f32;
        let white_moves = p.legal_moves(Color::White).len() as f32;
        let expected = 0.6 * Weights::PIECES
            + (black_moves - white_moves) / (black_moves + white_moves) * Weights::MOBILITY;

        assert!((evaluate(&p, Color::Black) - expected).abs() < 1e-5);
        assert!(evaluate(&p, Color::Black) > 0.0);
    }

    #[test]
    fn test_evaluate_is_antisymmetric() {
        let mut p = position(8);
        let mut color = Color::Black;
        for _ in 0..10 {
            if p.is_game_over() {
                break;
            }
            if !p.has_legal_move(color) {
                color = color.opponent();
            }
            let mv = p.legal_moves(color)[0];
            p.play(color, mv).unwrap();
            color = color.opponent();

            let black = evaluate(&p, Color::Black);
            let white = evaluate(&p, Color::White);
            assert!((black + white).abs() < 1e-4);
            assert!(black.abs() <= Weights::MAX);
        }
    }

    #[test]
    fn test_corner_count_distinct() {
        let mut board = Board::new(BoardSize::new(6).unwrap());
        board.put_piece(Pos::new(0, 0), Color::Black);
        board.put_piece(Pos::new(5, 5), Color::Black);
        board.put_piece(Pos::new(0, 5), Color::White);

        // Top-left counted once
        assert_eq!(corner_count(&board, Color::Black), 2);
        assert_eq!(corner_count(&board, Color::White), 1);
    }

    #[test]
    fn test_ratio() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(3, 1), 0.5);
        assert_eq!(ratio(1, 3), -0.5);
        assert_eq!(ratio(4, 0), 1.0);
    }
}
