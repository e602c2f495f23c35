//! Main Othello engine integrating rules, evaluation and search
//!
//! `Othello` is the facade a presentation layer talks to. It owns the live
//! position, reports every slot that changes color through an optional
//! callback, and can pick and play moves on its own.
//!
//! Moves entered through `execute_move` use 1-based coordinates; everything
//! else (legal moves, occupied slots, notifications) is 0-based.
//!
//! # Example
//!
//! ```
//! use othello::{Color, Othello};
//!
//! let mut game = Othello::new(8);
//! assert_eq!(game.score(Color::Black), 2);
//!
//! // Row 3, column 4 (1-based) captures the white piece below it
//! assert!(game.execute_move(Color::Black, 3, 4));
//! assert_eq!(game.score(Color::Black), 4);
//! assert_eq!(game.score(Color::White), 1);
//!
//! // Let the engine answer for White
//! assert!(game.auto_move(Color::White));
//! ```

use std::fmt;

use crate::board::{Board, BoardSize, Color, Pos};
use crate::eval::evaluate;
use crate::rules::{MoveError, Position, SlotChange};
use crate::search::{SearchResult, Searcher};

/// Observer invoked once per slot whose occupant changed
pub type SlotCallback = Box<dyn FnMut(SlotChange)>;

/// Final result of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// `None` for a tie
    pub winner: Option<Color>,
    pub black: usize,
    pub white: usize,
}

/// Othello engine: live position, automatic player and change notifications.
pub struct Othello {
    position: Position,
    searcher: Searcher,
    on_slot_change: Option<SlotCallback>,
}

impl Othello {
    /// Create an engine for a `size` x `size` board.
    ///
    /// Odd sizes or sizes outside 4..=26 fall back to the default 8x8.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            position: Position::new(BoardSize::or_default(size)),
            searcher: Searcher::new(),
            on_slot_change: None,
        }
    }

    /// Create an engine that reports slot changes to `callback`.
    ///
    /// The four starting placements are reported immediately.
    #[must_use]
    pub fn with_callback<F>(size: usize, callback: F) -> Self
    where
        F: FnMut(SlotChange) + 'static,
    {
        let mut engine = Self::new(size);
        engine.on_slot_change = Some(Box::new(callback));
        engine.restart();
        engine
    }

    /// Replace the searcher used by `select_move` and `auto_move`
    #[must_use]
    pub fn with_searcher(mut self, searcher: Searcher) -> Self {
        self.searcher = searcher;
        self
    }

    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: FnMut(SlotChange) + 'static,
    {
        self.on_slot_change = Some(Box::new(callback));
    }

    pub fn clear_callback(&mut self) {
        self.on_slot_change = None;
    }

    /// Put the board back to the four starting pieces
    pub fn restart(&mut self) {
        let start = self.position.restart();
        log::info!("new {0}x{0} match", self.size());
        self.notify(start);
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.position.size()
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.position.board()
    }

    /// Legal moves of `color` (0-based)
    pub fn legal_moves(&self, color: Color) -> Vec<Pos> {
        self.position.legal_moves(color).to_vec()
    }

    #[inline]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.position.has_legal_move(color)
    }

    /// Slots held by `color` (0-based, row-major)
    pub fn occupied_slots(&self, color: Color) -> Vec<Pos> {
        self.position.board().occupied(color)
    }

    /// Piece count of `color`
    #[inline]
    pub fn score(&self, color: Color) -> usize {
        self.position.count(color)
    }

    /// Heuristic value of the live position for `color`
    #[must_use]
    pub fn evaluate(&self, color: Color) -> f32 {
        evaluate(&self.position, color)
    }

    /// Play a move given in 1-based coordinates.
    ///
    /// Returns `false` and leaves the game untouched when the slot is off the
    /// board or not a legal move for `color`.
    pub fn execute_move(&mut self, color: Color, row: usize, col: usize) -> bool {
        match self.try_execute_move(color, row, col) {
            Ok(_) => true,
            Err(err) => {
                log::debug!("rejected move: {err}");
                false
            }
        }
    }

    /// Play a move given in 1-based coordinates, returning the flipped slots
    pub fn try_execute_move(
        &mut self,
        color: Color,
        row: usize,
        col: usize,
    ) -> Result<Vec<Pos>, MoveError> {
        let size = self.size();
        let in_range = |v: usize| (1..=size).contains(&v);
        if !in_range(row) || !in_range(col) {
            return Err(MoveError::OutOfBounds { row, col });
        }

        #[allow(clippy::cast_possible_truncation)]
        let pos = Pos::new((row - 1) as u8, (col - 1) as u8);
        self.play(color, pos)
    }

    /// Play a move given as a 0-based position, returning the flipped slots
    pub fn play(&mut self, color: Color, pos: Pos) -> Result<Vec<Pos>, MoveError> {
        let record = self.position.play(color, pos)?;
        log::debug!("{color} plays {pos}, flips {}", record.flipped.len());

        let changes: Vec<SlotChange> = record.changes().collect();
        self.notify(changes);
        Ok(record.flipped)
    }

    /// Let the searcher choose a move for `color` without playing it
    #[must_use]
    pub fn select_move(&mut self, color: Color) -> Option<Pos> {
        self.searcher.select_move(&self.position, color)
    }

    /// Full search result for `color`, for callers that want the statistics
    #[must_use]
    pub fn search(&mut self, color: Color) -> SearchResult {
        self.searcher.search(&self.position, color)
    }

    /// Choose and play a move for `color`.
    ///
    /// Returns `false` with the board unchanged if `color` cannot move.
    pub fn auto_move(&mut self, color: Color) -> bool {
        let Some(pos) = self.select_move(color) else {
            log::debug!("{color} has no move to play");
            return false;
        };
        self.play(color, pos).is_ok()
    }

    /// Who moves next given that `preferred` is due.
    ///
    /// `preferred` if it can move, else its opponent (a pass), else `None`
    /// when the match is over.
    #[must_use]
    pub fn next_to_move(&self, preferred: Color) -> Option<Color> {
        if self.has_legal_move(preferred) {
            Some(preferred)
        } else if self.has_legal_move(preferred.opponent()) {
            log::debug!("{preferred} passes");
            Some(preferred.opponent())
        } else {
            None
        }
    }

    /// Neither color has a legal move
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    /// Winner and final counts, once the game is over
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_game_over() {
            return None;
        }

        let black = self.score(Color::Black);
        let white = self.score(Color::White);
        let winner = match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        };
        Some(Outcome {
            winner,
            black,
            white,
        })
    }

    fn notify(&mut self, changes: impl IntoIterator<Item = SlotChange>) {
        if let Some(callback) = self.on_slot_change.as_mut() {
            for change in changes {
                callback(change);
            }
        }
    }
}

impl Default for Othello {
    fn default() -> Self {
        Self::new(crate::board::DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Debug for Othello {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Othello")
            .field("position", &self.position)
            .field("searcher", &self.searcher)
            .field("on_slot_change", &self.on_slot_change.is_some())
            .finish()
    }
}

impl fmt::Display for Othello {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.board().fmt(f)
    }
}
