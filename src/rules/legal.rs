//! Legal move discovery
//!
//! A move is legal when the slot is empty and at least one direction holds a
//! run of opponent pieces closed off by a piece of the mover's color. Only
//! frontier slots are examined: a slot with no occupied neighbor can never
//! capture anything.

use crate::board::{Board, Cell, Color, DirectionSet, Pos, DIRECTIONS};

/// Check whether `color` placed at `pos` would capture along `DIRECTIONS[dir_idx]`.
///
/// The adjacent slot must hold the opponent; scanning further, an empty slot
/// or the board edge ends the run without a capture.
pub fn captures_in_direction(board: &Board, pos: Pos, color: Color, dir_idx: usize) -> bool {
    let dir = DIRECTIONS[dir_idx];
    let own = color.to_cell();
    let opponent = color.opponent().to_cell();

    let mut next = match pos.step(dir, board.size()) {
        Some(p) if board.get(p) == opponent => p.step(dir, board.size()),
        _ => return false,
    };

    while let Some(p) = next {
        match board.get(p) {
            cell if cell == own => return true,
            Cell::Empty => return false,
            _ => next = p.step(dir, board.size()),
        }
    }

    false
}

/// Every direction in which `color` would capture by playing at `pos`.
/// Occupied slots have none.
pub fn valid_directions(board: &Board, pos: Pos, color: Color) -> DirectionSet {
    let mut dirs = DirectionSet::new();
    if !board.get(pos).is_empty() {
        return dirs;
    }

    for idx in 0..DIRECTIONS.len() {
        if captures_in_direction(board, pos, color, idx) {
            dirs.insert(idx);
        }
    }
    dirs
}

/// Recompute the legal moves of `color` from scratch over the frontier.
///
/// Each frontier slot's direction cache for `color` is rewritten. The result
/// follows frontier order.
pub fn find_legal_moves(board: &mut Board, color: Color) -> Vec<Pos> {
    let mut moves = Vec::new();

    for i in 0..board.frontier().len() {
        let pos = board.frontier()[i];
        let dirs = valid_directions(board, pos, color);
        board.set_flip_directions(pos, color, dirs);

        if !dirs.is_empty() {
            moves.push(pos);
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;

    /// Standard opening position, without going through `Position`
    fn opening(size: usize) -> Board {
        let mut board = Board::new(BoardSize::new(size).unwrap());
        let mid = (size / 2) as u8;
        board.put_piece(Pos::new(mid, mid), Color::White);
        board.put_piece(Pos::new(mid - 1, mid - 1), Color::White);
        board.put_piece(Pos::new(mid, mid - 1), Color::Black);
        board.put_piece(Pos::new(mid - 1, mid), Color::Black);
        board
    }

    #[test]
    fn test_opening_moves_black() {
        let mut board = opening(8);
        let mut moves = find_legal_moves(&mut board, Color::Black);
        moves.sort();

        assert_eq!(
            moves,
            vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
        );
    }

    #[test]
    fn test_opening_moves_white() {
        let mut board = opening(8);
        let mut moves = find_legal_moves(&mut board, Color::White);
        moves.sort();

        assert_eq!(
            moves,
            vec![Pos::new(2, 4), Pos::new(3, 5), Pos::new(4, 2), Pos::new(5, 3)]
        );
    }

    #[test]
    fn test_direction_cache_populated() {
        let mut board = opening(8);
        find_legal_moves(&mut board, Color::Black);

        // (2,3) captures (3,3) by looking down at (4,3)
        let dirs = board.slot(Pos::new(2, 3)).flip_directions(Color::Black);
        assert_eq!(dirs.len(), 1);
        assert!(dirs.contains(6));

        // A frontier slot with no capture keeps an empty cache
        let none = board.slot(Pos::new(2, 2)).flip_directions(Color::Black);
        assert!(none.is_empty());
    }

    #[test]
    fn test_empty_gap_breaks_run() {
        let mut board = Board::new(BoardSize::new(8).unwrap());
        board.put_piece(Pos::new(0, 1), Color::White);
        board.put_piece(Pos::new(0, 3), Color::Black);

        // W _ B: the gap at (0,2) means no capture from (0,0)
        assert!(!captures_in_direction(&board, Pos::new(0, 0), Color::Black, 4));
    }

    #[test]
    fn test_run_off_board_is_not_capture() {
        let mut board = Board::new(BoardSize::new(4).unwrap());
        board.put_piece(Pos::new(0, 1), Color::White);
        board.put_piece(Pos::new(0, 2), Color::White);
        board.put_piece(Pos::new(0, 3), Color::White);

        assert!(valid_directions(&board, Pos::new(0, 0), Color::Black).is_empty());
    }

    #[test]
    fn test_long_run_capture() {
        let mut board = Board::new(BoardSize::new(6).unwrap());
        for col in 1..5 {
            board.put_piece(Pos::new(2, col), Color::White);
        }
        board.put_piece(Pos::new(2, 5), Color::Black);

        let dirs = valid_directions(&board, Pos::new(2, 0), Color::Black);
        assert_eq!(dirs.len(), 1);
        assert!(dirs.contains(4));
    }

    #[test]
    fn test_occupied_slot_has_no_directions() {
        let board = opening(8);
        assert!(valid_directions(&board, Pos::new(3, 3), Color::Black).is_empty());
    }

    #[test]
    fn test_idempotent_recompute() {
        let mut board = opening(6);
        let first = find_legal_moves(&mut board, Color::Black);
        let second = find_legal_moves(&mut board, Color::Black);
        assert_eq!(first, second);
    }
}
