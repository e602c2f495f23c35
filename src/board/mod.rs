//! Board representation for Othello

pub mod board;
pub mod direction;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, FrontierUndo, Slot};
pub use direction::{Direction, DirectionSet, DIRECTIONS};

use std::fmt;

use thiserror::Error;

/// Board size used when the requested size is not playable
pub const DEFAULT_BOARD_SIZE: usize = 8;
/// Smallest playable board (the four starting pieces plus one ring)
pub const MIN_BOARD_SIZE: usize = 4;
/// Largest board; column labels run A-Z
pub const MAX_BOARD_SIZE: usize = 26;

/// Configuration errors raised while validating a board size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is invalid (must be even and between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE})")]
    InvalidBoardSize(usize),
}

/// A validated board edge length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Validate a board size: even and within `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size < MIN_BOARD_SIZE || size > MAX_BOARD_SIZE || size % 2 == 1 {
            return Err(ConfigError::InvalidBoardSize(size));
        }
        Ok(Self(size))
    }

    /// Validate a board size, falling back to `DEFAULT_BOARD_SIZE`
    pub fn or_default(size: usize) -> Self {
        Self::new(size).unwrap_or_else(|err| {
            log::warn!("{err}; using {DEFAULT_BOARD_SIZE}x{DEFAULT_BOARD_SIZE}");
            Self(DEFAULT_BOARD_SIZE)
        })
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(DEFAULT_BOARD_SIZE)
    }
}

/// The two competing sides. Black is player 1 and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Slot occupancy for a piece of this color
    #[inline]
    pub fn to_cell(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }

    /// Index into per-color arrays (Black = 0, White = 1)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::White => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Occupancy of a single slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The color occupying this cell, if any
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Position on the board (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Step one slot in `dir`, returning `None` when leaving a board of `size`
    #[inline]
    pub fn step(self, dir: Direction, size: usize) -> Option<Pos> {
        let row = i32::from(self.row) + i32::from(dir.d_row);
        let col = i32::from(self.col) + i32::from(dir.d_col);
        if Pos::is_valid(row, col, size) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        let size = size as i32;
        row >= 0 && row < size && col >= 0 && col < size
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl fmt::Display for Pos {
    /// Board notation: column letter then 1-based row, e.g. `E3`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row + 1)
    }
}
