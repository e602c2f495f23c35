use super::*;

fn board(size: usize) -> Board {
    Board::new(BoardSize::new(size).unwrap())
}

#[test]
fn test_color_opponent() {
    assert_eq!(Color::Black.opponent(), Color::White);
    assert_eq!(Color::White.opponent(), Color::Black);
}

#[test]
fn test_color_cell_roundtrip() {
    assert_eq!(Color::Black.to_cell().color(), Some(Color::Black));
    assert_eq!(Color::White.to_cell().color(), Some(Color::White));
    assert_eq!(Cell::Empty.color(), None);
}

#[test]
fn test_board_size_validation() {
    assert!(BoardSize::new(4).is_ok());
    assert!(BoardSize::new(8).is_ok());
    assert!(BoardSize::new(26).is_ok());
    assert_eq!(BoardSize::new(3), Err(ConfigError::InvalidBoardSize(3)));
    assert_eq!(BoardSize::new(7), Err(ConfigError::InvalidBoardSize(7)));
    assert_eq!(BoardSize::new(2), Err(ConfigError::InvalidBoardSize(2)));
    assert_eq!(BoardSize::new(28), Err(ConfigError::InvalidBoardSize(28)));
}

#[test]
fn test_board_size_fallback() {
    assert_eq!(BoardSize::or_default(5).get(), DEFAULT_BOARD_SIZE);
    assert_eq!(BoardSize::or_default(0).get(), DEFAULT_BOARD_SIZE);
    assert_eq!(BoardSize::or_default(10).get(), 10);
}

#[test]
fn test_pos_step_bounds() {
    let corner = Pos::new(0, 0);
    assert_eq!(corner.step(DIRECTIONS[0], 8), None);
    assert_eq!(corner.step(DIRECTIONS[7], 8), Some(Pos::new(1, 1)));

    let far = Pos::new(7, 7);
    assert_eq!(far.step(DIRECTIONS[7], 8), None);
    assert_eq!(far.step(DIRECTIONS[0], 8), Some(Pos::new(6, 6)));
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 7) < Pos::new(1, 0));
}

#[test]
fn test_pos_display() {
    assert_eq!(Pos::new(2, 4).to_string(), "E3");
    assert_eq!(Pos::new(0, 0).to_string(), "A1");
}

#[test]
fn test_put_piece_updates_counts_and_frontier() {
    let mut b = board(8);
    b.put_piece(Pos::new(3, 3), Color::White);

    assert_eq!(b.count(Color::White), 1);
    assert_eq!(b.count(Color::Black), 0);
    assert_eq!(b.frontier().len(), 8);
    assert!(!b.in_frontier(Pos::new(3, 3)));
    assert!(b.in_frontier(Pos::new(2, 2)));
    assert!(b.in_frontier(Pos::new(4, 4)));
}

#[test]
fn test_put_piece_on_frontier_slot_removes_it() {
    let mut b = board(8);
    b.put_piece(Pos::new(3, 3), Color::White);
    b.put_piece(Pos::new(3, 4), Color::Black);

    assert!(!b.in_frontier(Pos::new(3, 4)));
    // 8 around (3,3) minus (3,4), plus (2,5), (3,5), (4,5)
    assert_eq!(b.frontier().len(), 10);
    assert!(b.frontier().iter().all(|&p| b.get(p).is_empty()));
}

#[test]
fn test_put_piece_in_corner() {
    let mut b = board(4);
    b.put_piece(Pos::new(0, 0), Color::Black);
    assert_eq!(b.frontier(), &[Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]);
}

#[test]
fn test_remove_piece_restores_frontier_order() {
    let mut b = board(8);
    b.put_piece(Pos::new(3, 3), Color::White);
    let before: Vec<Pos> = b.frontier().to_vec();

    let undo = b.put_piece(Pos::new(2, 3), Color::Black);
    b.remove_piece(Pos::new(2, 3), Color::Black, undo);

    assert_eq!(b.frontier(), before.as_slice());
    assert!(b.in_frontier(Pos::new(2, 3)));
    assert!(!b.in_frontier(Pos::new(1, 3)));
    assert_eq!(b.count(Color::Black), 0);
    assert!(b.get(Pos::new(2, 3)).is_empty());
}

#[test]
fn test_flip_transfers_count() {
    let mut b = board(8);
    b.put_piece(Pos::new(3, 3), Color::White);
    b.flip(Pos::new(3, 3), Color::Black);

    assert_eq!(b.get(Pos::new(3, 3)), Cell::Black);
    assert_eq!(b.count(Color::Black), 1);
    assert_eq!(b.count(Color::White), 0);
}

#[test]
fn test_occupied_row_major() {
    let mut b = board(6);
    b.put_piece(Pos::new(4, 1), Color::Black);
    b.put_piece(Pos::new(1, 4), Color::Black);
    b.put_piece(Pos::new(2, 2), Color::White);

    assert_eq!(b.occupied(Color::Black), vec![Pos::new(1, 4), Pos::new(4, 1)]);
    assert_eq!(b.occupied(Color::White), vec![Pos::new(2, 2)]);
}

#[test]
fn test_corners() {
    let b = board(6);
    assert_eq!(
        b.corners(),
        [Pos::new(0, 0), Pos::new(0, 5), Pos::new(5, 0), Pos::new(5, 5)]
    );
}

#[test]
fn test_clear() {
    let mut b = board(6);
    b.put_piece(Pos::new(2, 2), Color::White);
    b.clear();

    assert_eq!(b.piece_count(), 0);
    assert!(b.frontier().is_empty());
    assert!(b.positions().all(|p| b.get(p).is_empty() && !b.in_frontier(p)));
}

#[test]
fn test_display_layout() {
    let mut b = board(4);
    b.put_piece(Pos::new(0, 0), Color::Black);
    b.put_piece(Pos::new(0, 1), Color::White);

    let text = b.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "     A   B   C   D ");
    assert_eq!(lines[1], "   =================");
    assert_eq!(lines[2], "1  | X | O |   |   | ");
    assert_eq!(lines.len(), 2 + 4 * 2);
}
