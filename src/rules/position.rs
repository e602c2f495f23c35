//! Game position: board plus the legal-move sets of both colors
//!
//! `Position` is the unit the rest of the engine works with. Moves are
//! applied through `play`, which returns a `MoveRecord` that `undo` consumes
//! to restore the exact previous state (used by the search instead of
//! cloning at every node).

use thiserror::Error;

use crate::board::{Board, BoardSize, Color, FrontierUndo, Pos};

use super::legal::find_legal_moves;

/// Reasons a move is rejected. No state changes when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("row {row}, column {col} is outside the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("{pos} is not a legal move for {color}")]
    IllegalMove { color: Color, pos: Pos },
}

/// A slot changed occupant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotChange {
    pub color: Color,
    pub pos: Pos,
}

/// Everything needed to take a move back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub color: Color,
    pub pos: Pos,
    /// Captured slots in the order they were flipped
    pub flipped: Vec<Pos>,
    frontier: FrontierUndo,
}

impl MoveRecord {
    /// Slot changes caused by the move: the placed slot, then each flip
    pub fn changes(&self) -> impl Iterator<Item = SlotChange> + '_ {
        let color = self.color;
        std::iter::once(self.pos)
            .chain(self.flipped.iter().copied())
            .map(move |pos| SlotChange { color, pos })
    }
}

/// Board state with both legal-move sets kept in sync
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    /// Legal moves per color, in frontier order
    legal: [Vec<Pos>; 2],
}

impl Position {
    /// Create a position with the four starting pieces in place
    pub fn new(size: BoardSize) -> Self {
        let mut position = Self {
            board: Board::new(size),
            legal: [Vec::new(), Vec::new()],
        };
        position.restart();
        position
    }

    /// Reset to the starting position.
    ///
    /// Returns the four starting placements in the order they were made.
    pub fn restart(&mut self) -> [SlotChange; 4] {
        self.board.clear();

        let mid = (self.board.size() / 2) as u8;
        let start = [
            SlotChange { color: Color::White, pos: Pos::new(mid, mid) },
            SlotChange { color: Color::White, pos: Pos::new(mid - 1, mid - 1) },
            SlotChange { color: Color::Black, pos: Pos::new(mid, mid - 1) },
            SlotChange { color: Color::Black, pos: Pos::new(mid - 1, mid) },
        ];
        for change in &start {
            self.board.put_piece(change.pos, change.color);
        }

        self.refresh_legal_moves();
        start
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Piece count of a color
    #[inline]
    pub fn count(&self, color: Color) -> usize {
        self.board.count(color)
    }

    /// Legal moves of a color, in frontier order
    #[inline]
    pub fn legal_moves(&self, color: Color) -> &[Pos] {
        &self.legal[color.index()]
    }

    #[inline]
    pub fn has_legal_move(&self, color: Color) -> bool {
        !self.legal[color.index()].is_empty()
    }

    #[inline]
    pub fn is_legal(&self, color: Color, pos: Pos) -> bool {
        self.legal[color.index()].contains(&pos)
    }

    /// Neither color can move
    #[inline]
    pub fn is_game_over(&self) -> bool {
        !self.has_legal_move(Color::Black) && !self.has_legal_move(Color::White)
    }

    /// Play `color` at `pos` (0-based), flipping every captured run.
    pub fn play(&mut self, color: Color, pos: Pos) -> Result<MoveRecord, MoveError> {
        if !self.board.contains(pos) {
            return Err(MoveError::OutOfBounds {
                row: pos.row as usize,
                col: pos.col as usize,
            });
        }

        let moves = &mut self.legal[color.index()];
        let Some(at) = moves.iter().position(|&p| p == pos) else {
            return Err(MoveError::IllegalMove { color, pos });
        };
        moves.remove(at);

        let directions = self.board.slot(pos).flip_directions(color);
        let frontier = self.board.put_piece(pos, color);

        let opponent = color.opponent().to_cell();
        let size = self.board.size();
        let mut flipped = Vec::new();

        for dir in directions.iter() {
            let mut next = pos.step(dir, size);
            while let Some(p) = next {
                if self.board.get(p) != opponent {
                    break;
                }
                self.board.flip(p, color);
                flipped.push(p);
                next = p.step(dir, size);
            }
        }

        self.refresh_legal_moves();

        Ok(MoveRecord {
            color,
            pos,
            flipped,
            frontier,
        })
    }

    /// Take back the most recent move. Records must be undone in LIFO order.
    pub fn undo(&mut self, record: MoveRecord) {
        let opponent = record.color.opponent();
        for &p in record.flipped.iter().rev() {
            self.board.flip(p, opponent);
        }
        self.board.remove_piece(record.pos, record.color, record.frontier);

        // Recomputing also restores the direction caches of the frontier
        self.refresh_legal_moves();
    }

    fn refresh_legal_moves(&mut self) {
        self.legal[Color::White.index()] = find_legal_moves(&mut self.board, Color::White);
        self.legal[Color::Black.index()] = find_legal_moves(&mut self.board, Color::Black);
    }
}
