//! Board tests - grid, collision, and the golden-cube plane

use goldfall::core::{Board, SimpleRng};
use goldfall::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_cell_free(x, y), "cell ({}, {}) should be free", x, y);
            assert_eq!(board.get(x, y), Some(None));
            assert!(!board.is_golden(x, y));
        }
    }
    assert_eq!(board.occupied_count(), 0);
    assert_eq!(board.golden_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(0, 0, Some(PieceKind::I)));
    assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, -1, Some(PieceKind::T)));
    assert!(!board.set(BOARD_WIDTH as i8, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn test_cells_above_grid_count_as_free() {
    let board = Board::new();

    assert!(board.is_cell_free(4, -1));
    assert!(board.is_cell_free(0, -3));
    // Horizontal bounds and the floor still apply.
    assert!(!board.is_cell_free(-1, -1));
    assert!(!board.is_cell_free(BOARD_WIDTH as i8, 0));
    assert!(!board.is_cell_free(4, BOARD_HEIGHT as i8));
}

#[test]
fn test_board_is_occupied() {
    let mut board = Board::new();

    assert!(!board.is_occupied(5, 10));
    board.set(5, 10, Some(PieceKind::T));
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_occupied(-1, 0));
}

#[test]
fn test_golden_marker_requires_occupied_cell() {
    let mut board = Board::new();

    assert!(!board.set_golden(5, 5), "empty cell cannot be golden");
    assert!(!board.set_golden(-1, 5));

    board.set(5, 5, Some(PieceKind::S));
    assert!(board.set_golden(5, 5));
    assert!(board.is_golden(5, 5));
    assert_eq!(board.golden_count(), 1);
}

#[test]
fn test_overwriting_a_cell_drops_its_golden_marker() {
    let mut board = Board::new();
    board.set(2, 18, Some(PieceKind::J));
    board.set_golden(2, 18);

    board.set(2, 18, Some(PieceKind::L));
    assert!(!board.is_golden(2, 18), "new occupant starts plain");

    board.set(2, 18, None);
    assert_eq!(board.golden_count(), 0);
}

#[test]
fn test_place_piece_writes_cells() {
    let mut board = Board::new();

    let shape = [(0, 0), (1, 0), (0, 1), (1, 1)];
    board.place_piece(&shape, 3, 5, PieceKind::O);

    assert_eq!(board.get(3, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(3, 6), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 6), Some(Some(PieceKind::O)));
}

#[test]
fn test_place_piece_discards_minos_above_grid() {
    let mut board = Board::new();

    let shape = [(0, 0), (0, 1), (0, 2), (0, 3)];
    board.place_piece(&shape, 0, -2, PieceKind::I);

    // Only the two on-screen minos were stored.
    assert_eq!(board.occupied_count(), 2);
    assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
    assert_eq!(board.get(0, 1), Some(Some(PieceKind::I)));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();

    assert!(!board.is_row_full(5));

    fill_row(&mut board, 5, PieceKind::T);
    assert!(board.is_row_full(5));

    for x in 0..(BOARD_WIDTH - 1) as i8 {
        board.set(x, 6, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(6));
}

#[test]
fn test_full_rows_reports_bottom_to_top() {
    let mut board = Board::new();
    fill_row(&mut board, 17, PieceKind::O);
    fill_row(&mut board, 19, PieceKind::I);
    fill_row(&mut board, 18, PieceKind::T);

    assert_eq!(board.full_rows().as_slice(), &[19, 18, 17]);
}

#[test]
fn test_board_clear_row_shifts_stack_down() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::T);
    board.set(0, 3, Some(PieceKind::I));
    board.set(1, 4, Some(PieceKind::O));

    board.clear_row(5);

    // Rows above shifted down by one; the top row is fresh.
    assert_eq!(board.get(1, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(0, 4), Some(Some(PieceKind::I)));
    assert_eq!(board.get(0, 3), Some(None));
}

#[test]
fn test_clear_row_returns_removed_golden_count() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::Z);
    board.set_golden(3, 19);
    board.set_golden(8, 19);
    // A marker above the cleared row survives and moves with its cell.
    board.set(0, 10, Some(PieceKind::T));
    board.set_golden(0, 10);

    assert_eq!(board.clear_row(19), 2);
    assert_eq!(board.golden_count(), 1);
    assert!(board.is_golden(0, 11));
    assert!(!board.is_golden(0, 10));
}

#[test]
fn test_mark_random_golden_only_targets_plain_occupied_cells() {
    let mut board = Board::new();
    let mut rng = SimpleRng::new(4242);

    assert!(!board.mark_random_golden(&mut rng), "empty board: no candidates");

    board.set(0, 19, Some(PieceKind::L));
    board.set(9, 19, Some(PieceKind::L));
    assert!(board.mark_random_golden(&mut rng));
    assert!(board.mark_random_golden(&mut rng));
    assert_eq!(board.golden_count(), 2);
    assert!(!board.mark_random_golden(&mut rng), "all candidates consumed");
}

#[test]
fn test_is_valid_position_uses_whole_shape() {
    let mut board = Board::new();

    assert!(board.is_valid_position(PieceKind::T, Rotation::North, 3, 0));
    assert!(!board.is_valid_position(PieceKind::T, Rotation::North, -1, 0));
    assert!(!board.is_valid_position(PieceKind::I, Rotation::North, 7, 0));

    board.set(4, 1, Some(PieceKind::S));
    assert!(!board.is_valid_position(PieceKind::T, Rotation::North, 3, 0));
}

#[test]
fn test_write_u8_grid_codes() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::I));
    board.set(1, 19, Some(PieceKind::O));
    board.set(2, 19, Some(PieceKind::L));

    let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_u8_grid(&mut grid);

    assert_eq!(grid[19][0], 1);
    assert_eq!(grid[19][1], 2);
    assert_eq!(grid[19][2], 7);
    assert_eq!(grid[19][3], 0);
    assert_eq!(grid[0][0], 0);
}

#[test]
fn test_write_golden_grid_mirrors_flags() {
    let mut board = Board::new();
    board.set(6, 12, Some(PieceKind::T));
    board.set_golden(6, 12);

    let mut grid = [[false; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_golden_grid(&mut grid);

    assert!(grid[12][6]);
    assert!(!grid[12][5]);
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::T);
    board.set_golden(0, 5);

    board.clear();

    assert_eq!(board.occupied_count(), 0);
    assert_eq!(board.golden_count(), 0);
}
