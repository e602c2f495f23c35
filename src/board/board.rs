//! Board structure with piece counts and frontier tracking

use std::fmt;

use super::{BoardSize, Cell, Color, DirectionSet, Pos, DIRECTIONS};

/// One cell of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slot {
    cell: Cell,
    /// Capturing directions per color, only meaningful while the slot is empty
    flips: [DirectionSet; 2],
}

impl Slot {
    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Directions in which `color` would capture by playing here
    #[inline]
    pub fn flip_directions(&self, color: Color) -> DirectionSet {
        self.flips[color.index()]
    }
}

/// What a placement did to the frontier, so it can be reversed exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierUndo {
    /// Index the placed slot occupied in the frontier, if it was a member
    removed_at: Option<usize>,
    /// Number of neighbors appended to the frontier
    added: usize,
}

/// Game board: slots, piece counts and the frontier of candidate moves.
///
/// The frontier holds every empty slot adjacent to an occupied one, in the
/// order the slots joined it. Legal-move generation only visits these.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    slots: Vec<Slot>,
    counts: [usize; 2],
    frontier: Vec<Pos>,
    in_frontier: Vec<bool>,
}

impl Board {
    /// Create an empty board
    pub fn new(size: BoardSize) -> Self {
        let size = size.get();
        Self {
            size,
            slots: vec![Slot::default(); size * size],
            counts: [0; 2],
            frontier: Vec::with_capacity(size * size),
            in_frontier: vec![false; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    /// Check that a position lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Get occupancy at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.slots[self.index(pos)].cell
    }

    #[inline]
    pub fn slot(&self, pos: Pos) -> &Slot {
        &self.slots[self.index(pos)]
    }

    /// Number of pieces of a color
    #[inline]
    pub fn count(&self, color: Color) -> usize {
        self.counts[color.index()]
    }

    /// Total pieces on board
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.counts[0] + self.counts[1]
    }

    #[inline]
    pub fn frontier(&self) -> &[Pos] {
        &self.frontier
    }

    #[inline]
    pub fn in_frontier(&self, pos: Pos) -> bool {
        self.in_frontier[self.index(pos)]
    }

    /// All slots held by `color`, row-major
    pub fn occupied(&self, color: Color) -> Vec<Pos> {
        let cell = color.to_cell();
        self.positions().filter(|&pos| self.get(pos) == cell).collect()
    }

    /// The four corner slots
    pub fn corners(&self) -> [Pos; 4] {
        let last = (self.size - 1) as u8;
        [
            Pos::new(0, 0),
            Pos::new(0, last),
            Pos::new(last, 0),
            Pos::new(last, last),
        ]
    }

    /// Iterate over every position, row-major
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let size = self.size as u8;
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos::new(row, col)))
    }

    /// Remove every piece and empty the frontier
    pub fn clear(&mut self) {
        self.slots.fill(Slot::default());
        self.counts = [0; 2];
        self.frontier.clear();
        self.in_frontier.fill(false);
    }

    pub(crate) fn set_flip_directions(&mut self, pos: Pos, color: Color, dirs: DirectionSet) {
        let idx = self.index(pos);
        self.slots[idx].flips[color.index()] = dirs;
    }

    /// Place a piece on an empty slot and grow the frontier around it.
    /// The caller guarantees the slot is empty.
    pub(crate) fn put_piece(&mut self, pos: Pos, color: Color) -> FrontierUndo {
        debug_assert!(self.get(pos).is_empty());

        let idx = self.index(pos);
        self.slots[idx].cell = color.to_cell();
        self.counts[color.index()] += 1;

        let removed_at = if self.in_frontier[idx] {
            self.in_frontier[idx] = false;
            self.frontier.iter().position(|&p| p == pos).map(|at| {
                self.frontier.remove(at);
                at
            })
        } else {
            None
        };

        let mut added = 0;
        for dir in DIRECTIONS {
            if let Some(next) = pos.step(dir, self.size) {
                let next_idx = self.index(next);
                if self.slots[next_idx].cell.is_empty() && !self.in_frontier[next_idx] {
                    self.in_frontier[next_idx] = true;
                    self.frontier.push(next);
                    added += 1;
                }
            }
        }

        FrontierUndo { removed_at, added }
    }

    /// Reverse a `put_piece`. Must be applied in strict LIFO order.
    pub(crate) fn remove_piece(&mut self, pos: Pos, color: Color, undo: FrontierUndo) {
        debug_assert_eq!(self.get(pos), color.to_cell());

        for _ in 0..undo.added {
            if let Some(p) = self.frontier.pop() {
                let p_idx = self.index(p);
                self.in_frontier[p_idx] = false;
            }
        }

        let idx = self.index(pos);
        self.slots[idx].cell = Cell::Empty;
        self.counts[color.index()] -= 1;

        if let Some(at) = undo.removed_at {
            self.frontier.insert(at, pos);
            self.in_frontier[idx] = true;
        }
    }

    /// Turn an opponent piece over to `color`
    pub(crate) fn flip(&mut self, pos: Pos, color: Color) {
        debug_assert_eq!(self.get(pos), color.opponent().to_cell());

        let idx = self.index(pos);
        self.slots[idx].cell = color.to_cell();
        self.counts[color.index()] += 1;
        self.counts[color.opponent().index()] -= 1;
    }

    fn separator(&self) -> String {
        format!("   {}=", "====".repeat(self.size))
    }
}

impl fmt::Display for Board {
    /// Text grid with `X` for Black and `O` for White
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = self.separator();

        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "  {} ", (b'A' + col as u8) as char)?;
        }
        writeln!(f)?;
        writeln!(f, "{separator}")?;

        for row in 0..self.size {
            write!(f, "{}  | ", row + 1)?;
            for col in 0..self.size {
                let symbol = match self.get(Pos::new(row as u8, col as u8)) {
                    Cell::Black => 'X',
                    Cell::White => 'O',
                    Cell::Empty => ' ',
                };
                write!(f, "{symbol} | ")?;
            }
            writeln!(f)?;
            writeln!(f, "{separator}")?;
        }

        Ok(())
    }
}
