//! Fixed-depth minimax search with alpha-beta pruning
//!
//! This module implements the automatic move selector. Scores are always
//! taken from the point of view of the color that started the search (the
//! root color), with min and max layers alternating by whose turn it is.
//!
//! # Features
//!
//! - Fixed ply depth, no time control
//! - Alpha-beta pruning; the chosen move is the same as plain minimax
//! - Passing: a side without moves hands the turn over (still costs a ply)
//! - One scratch copy per search, positions walked with play/undo
//!
//! # Example
//!
//! ```
//! use othello::board::{BoardSize, Color};
//! use othello::rules::Position;
//! use othello::search::Searcher;
//!
//! let position = Position::new(BoardSize::new(6).unwrap());
//! let mut searcher = Searcher::with_depth(3);
//!
//! let result = searcher.search(&position, Color::Black);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Color, Pos};
use crate::eval::evaluate;
use crate::rules::Position;

/// Plies explored by the automatic player
pub const SEARCH_DEPTH: u8 = 5;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move found, `None` when the color has no legal move
    pub best_move: Option<Pos>,
    /// Evaluation of the best move, from the searching color's side
    pub score: f32,
    /// Total nodes visited
    pub nodes: u64,
}

/// Depth-limited move selector.
///
/// Candidate moves at the root are tried in row-major order and only a
/// strictly better score replaces the current best, so ties go to the
/// lowest row, then the lowest column.
#[derive(Debug, Clone)]
pub struct Searcher {
    max_depth: u8,
    pruning: bool,
    nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    /// Create a searcher exploring `SEARCH_DEPTH` plies
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(SEARCH_DEPTH)
    }

    /// Create a searcher exploring `depth` plies (at least one)
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self {
            max_depth: depth.max(1),
            pruning: true,
            nodes: 0,
        }
    }

    /// Disable alpha-beta cutoffs and walk the full tree
    #[must_use]
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Pick the best move for `color`, or `None` if it has no legal move.
    #[must_use]
    pub fn select_move(&mut self, position: &Position, color: Color) -> Option<Pos> {
        self.search(position, color).best_move
    }

    /// Search every legal move of `color` and return the best one.
    ///
    /// `position` is not modified; the search runs on a private copy.
    #[must_use]
    pub fn search(&mut self, position: &Position, color: Color) -> SearchResult {
        self.nodes = 0;

        let mut candidates = position.legal_moves(color).to_vec();
        if candidates.is_empty() {
            return SearchResult {
                best_move: None,
                score: evaluate(position, color),
                nodes: 0,
            };
        }
        candidates.sort();

        let mut scratch = position.clone();
        let mut best_move = None;
        let mut best_score = f32::NEG_INFINITY;

        for mv in candidates {
            let Ok(record) = scratch.play(color, mv) else {
                continue;
            };
            let score = self.minimax(
                &mut scratch,
                color.opponent(),
                false,
                1,
                color,
                best_score,
                f32::INFINITY,
            );
            scratch.undo(record);

            log::trace!("{color} {mv}: {score:.3}");
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        log::debug!(
            "search {color} depth {}: best {:?} score {best_score:.3} ({} nodes)",
            self.max_depth,
            best_move.map(|p| p.to_string()),
            self.nodes
        );

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }

    /// Score `position` with `to_move` about to play, `depth` plies below the root.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        position: &mut Position,
        to_move: Color,
        maximizing: bool,
        depth: u8,
        root: Color,
        mut alpha: f32,
        mut beta: f32,
    ) -> f32 {
        self.nodes += 1;

        if depth >= self.max_depth || position.is_game_over() {
            return evaluate(position, root);
        }

        // Nothing to play: the turn passes to the opponent
        if !position.has_legal_move(to_move) {
            return self.minimax(
                position,
                to_move.opponent(),
                !maximizing,
                depth + 1,
                root,
                alpha,
                beta,
            );
        }

        let moves = position.legal_moves(to_move).to_vec();
        let mut best = if maximizing {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        };

        for mv in moves {
            let Ok(record) = position.play(to_move, mv) else {
                continue;
            };
            let score = self.minimax(
                position,
                to_move.opponent(),
                !maximizing,
                depth + 1,
                root,
                alpha,
                beta,
            );
            position.undo(record);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.pruning && alpha >= beta {
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;

    fn position(size: usize) -> Position {
        Position::new(BoardSize::new(size).unwrap())
    }

    /// Play a fixed sequence of first-legal moves to reach a middle-game position
    fn midgame(size: usize, plies: usize) -> (Position, Color) {
        let mut p = position(size);
        let mut color = Color::Black;
        for _ in 0..plies {
            if p.is_game_over() {
                break;
            }
            if !p.has_legal_move(color) {
                color = color.opponent();
            }
            let mv = p.legal_moves(color)[0];
            p.play(color, mv).unwrap();
            color = color.opponent();
        }
        (p, color)
    }

    #[test]
    fn test_search_returns_legal_move() {
        let p = position(8);
        let mut searcher = Searcher::with_depth(3);

        let result = searcher.search(&p, Color::Black);
        let mv = result.best_move.unwrap();
        assert!(p.is_legal(Color::Black, mv));
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_search_leaves_position_untouched() {
        let (p, color) = midgame(6, 6);
        let board_before = p.board().to_string();
        let frontier_before = p.board().frontier().to_vec();
        let moves_before = p.legal_moves(color).to_vec();

        let mut searcher = Searcher::with_depth(4);
        let _ = searcher.search(&p, color);

        assert_eq!(p.board().to_string(), board_before);
        assert_eq!(p.board().frontier(), frontier_before.as_slice());
        assert_eq!(p.legal_moves(color), moves_before.as_slice());
    }

    #[test]
    fn test_opening_tie_break_row_major() {
        // All four opening moves are symmetric: equal scores, lowest row wins
        let p = position(8);
        let mut searcher = Searcher::with_depth(1);
        assert_eq!(searcher.select_move(&p, Color::Black), Some(Pos::new(2, 3)));
        assert_eq!(searcher.select_move(&p, Color::White), Some(Pos::new(2, 4)));
    }

    #[test]
    fn test_pruning_matches_full_minimax() {
        for (size, plies) in [(6, 0), (6, 5), (6, 10), (8, 4)] {
            let (p, color) = midgame(size, plies);
            if !p.has_legal_move(color) {
                continue;
            }

            let pruned = Searcher::with_depth(4).search(&p, color);
            let full = Searcher::with_depth(4).without_pruning().search(&p, color);

            assert_eq!(pruned.best_move, full.best_move);
            assert!((pruned.score - full.score).abs() < 1e-4);
            assert!(pruned.nodes <= full.nodes);
        }
    }

    #[test]
    fn test_no_legal_move_returns_none() {
        // Play a 4x4 game out; every stuck side must get None
        let mut p = position(4);
        let mut color = Color::Black;
        while !p.is_game_over() {
            if !p.has_legal_move(color) {
                let mut searcher = Searcher::with_depth(2);
                assert_eq!(searcher.select_move(&p, color), None);
                color = color.opponent();
                continue;
            }
            let mv = p.legal_moves(color)[0];
            p.play(color, mv).unwrap();
            color = color.opponent();
        }

        let mut searcher = Searcher::with_depth(2);
        assert_eq!(searcher.select_move(&p, Color::Black), None);
        assert_eq!(searcher.select_move(&p, Color::White), None);
    }

    #[test]
    fn test_prefers_corner() {
        // 4x4 after Black (0,1): White can take corner (0,0)
        let mut p = position(4);
        p.play(Color::Black, Pos::new(0, 1)).unwrap();
        assert!(p.is_legal(Color::White, Pos::new(0, 0)));

        let mut searcher = Searcher::with_depth(1);
        assert_eq!(searcher.select_move(&p, Color::White), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_full_depth_search_small_board() {
        let p = position(6);
        let mut searcher = Searcher::new();
        assert_eq!(searcher.max_depth(), SEARCH_DEPTH);

        let result = searcher.search(&p, Color::Black);
        assert!(result.best_move.is_some());
        assert!(result.score.is_finite());
    }

    #[test]
    fn test_with_depth_minimum_one() {
        assert_eq!(Searcher::with_depth(0).max_depth(), 1);
    }
}
