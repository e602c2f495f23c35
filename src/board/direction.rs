//! Compass directions and a compact set of them

/// A unit step on the board (one of the 8 compass offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }
}

/// All 8 directions, row-major from the top-left neighbor.
/// Bit `i` of a `DirectionSet` refers to `DIRECTIONS[i]`.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
    Direction::new(0, -1),
    Direction::new(0, 1),
    Direction::new(1, -1),
    Direction::new(1, 0),
    Direction::new(1, 1),
];

/// Set of directions packed into a single byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionSet {
    bits: u8,
}

impl DirectionSet {
    /// Create empty set
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Add the direction at `DIRECTIONS[idx]`
    #[inline]
    pub fn insert(&mut self, idx: usize) {
        debug_assert!(idx < DIRECTIONS.len());
        self.bits |= 1u8 << idx;
    }

    /// Check whether `DIRECTIONS[idx]` is in the set
    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        idx < DIRECTIONS.len() && (self.bits >> idx) & 1 == 1
    }

    #[inline]
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate over the directions in `DIRECTIONS` order
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        DIRECTIONS
            .iter()
            .enumerate()
            .filter(move |(idx, _)| self.contains(*idx))
            .map(|(_, dir)| *dir)
    }
}
