use broadside::{Board, Coordinate, EngineError, Parity, TileState, BOARD_HEIGHT, BOARD_WIDTH};

fn c(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

#[test]
fn test_new_board_is_unknown() {
    let board = Board::new();
    assert_eq!(board.unknown_count(), BOARD_WIDTH * BOARD_HEIGHT);
    assert_eq!(board.tile(c(4, 7)).unwrap(), TileState::Unknown);
    assert_eq!(board.tile(c(10, 0)), Err(EngineError::InvalidCoordinate));
    assert!(board.is_in_bounds(c(9, 9)));
    assert!(!board.is_in_bounds(c(0, 10)));
}

#[test]
fn test_record_shot_and_duplicate() {
    let mut board = Board::new();
    board.record_shot(c(2, 3), true).unwrap();
    board.record_shot(c(2, 4), false).unwrap();
    assert_eq!(board.tile(c(2, 3)).unwrap(), TileState::Hit);
    assert_eq!(board.tile(c(2, 4)).unwrap(), TileState::Miss);
    assert_eq!(board.hits().count_ones(), 1);
    assert_eq!(board.misses().count_ones(), 1);

    assert_eq!(
        board.record_shot(c(2, 3), false).unwrap_err(),
        EngineError::DuplicateShot { row: 2, col: 3 }
    );
    assert_eq!(board.tile(c(2, 3)).unwrap(), TileState::Hit);
    assert_eq!(
        board.record_shot(c(0, 10), true).unwrap_err(),
        EngineError::InvalidCoordinate
    );
}

#[test]
fn test_even_parity_elimination_exact_set() {
    let mut board = Board::new();
    board.eliminate_parity_class(Parity::Even);

    let row0: Vec<usize> = (0..BOARD_WIDTH)
        .filter(|&col| board.tile(c(0, col)).unwrap() == TileState::Miss)
        .collect();
    assert_eq!(row0, vec![0, 2, 4, 6, 8]);
    let row1: Vec<usize> = (0..BOARD_WIDTH)
        .filter(|&col| board.tile(c(1, col)).unwrap() == TileState::Miss)
        .collect();
    assert_eq!(row1, vec![1, 3, 5, 7, 9]);

    for row in 0..BOARD_HEIGHT {
        for col in 0..BOARD_WIDTH {
            let expected = if (row + col) % 2 == 0 {
                TileState::Miss
            } else {
                TileState::Unknown
            };
            assert_eq!(board.tile(c(row, col)).unwrap(), expected, "({}, {})", row, col);
        }
    }
    assert_eq!(board.unknown_count(), BOARD_WIDTH * BOARD_HEIGHT / 2);
    // nothing was actually fired on
    assert!(board.misses().is_empty());
}

#[test]
fn test_skipped_cell_can_still_be_fired_on() {
    let mut board = Board::new();
    board.eliminate_parity_class(Parity::Odd);
    assert_eq!(board.tile(c(0, 1)).unwrap(), TileState::Miss);
    assert!(!board.is_resolved(c(0, 1)));
    board.record_shot(c(0, 1), true).unwrap();
    assert_eq!(board.tile(c(0, 1)).unwrap(), TileState::Hit);
}

#[test]
fn test_scores_on_open_board() {
    let mut board = Board::new();
    assert_eq!(board.score(c(0, 0)), 10);
    assert_eq!(board.tile_score(c(5, 5)), 10);

    // skipped cells still count as open water
    board.eliminate_parity_class(Parity::Even);
    assert_eq!(board.tile_score(c(0, 1)), 10);
    assert_eq!(board.score(c(0, 0)), 10);
}

#[test]
fn test_scores_bounded_by_resolved_cells() {
    let mut board = Board::new();
    for i in 0..BOARD_WIDTH {
        board.record_shot(c(4, i), false).unwrap();
    }
    for i in 0..BOARD_HEIGHT {
        if i != 4 {
            board.record_shot(c(i, 4), false).unwrap();
        }
    }
    assert_eq!(board.score(c(0, 0)), 4);
    assert_eq!(board.tile_score(c(2, 2)), 4);
    // rows 5..=9, cols 5..=9
    assert_eq!(board.tile_score(c(9, 9)), 5);
    assert_eq!(board.tile_score(c(4, 4)), 0);
}

#[test]
fn test_score_takes_longer_axis() {
    let mut board = Board::new();
    board.record_shot(c(3, 0), false).unwrap();
    board.record_shot(c(3, 2), false).unwrap();
    // horizontal run through (3, 1) is 1, vertical is the full column
    assert_eq!(board.tile_score(c(3, 1)), 10);
    board.record_shot(c(2, 1), false).unwrap();
    board.record_shot(c(4, 1), false).unwrap();
    assert_eq!(board.tile_score(c(3, 1)), 1);
}

#[test]
fn test_invalidate_adjacent_to_hits() {
    let mut board = Board::new();
    for col in 1..=3 {
        board.record_shot(c(1, col), true).unwrap();
    }
    board.invalidate_adjacent_to_hits();

    for row in 0..=2 {
        for col in 0..=4 {
            let expected = if row == 1 && (1..=3).contains(&col) {
                TileState::Hit
            } else {
                TileState::Miss
            };
            assert_eq!(board.tile(c(row, col)).unwrap(), expected);
            assert!(board.is_resolved(c(row, col)));
        }
    }
    assert_eq!(board.tile(c(3, 3)).unwrap(), TileState::Unknown);
    assert_eq!(board.tile(c(1, 5)).unwrap(), TileState::Unknown);
    // cleared cells are not counted as fired
    assert_eq!(board.misses().count_ones(), 0);
    assert!(!board.is_fired(c(0, 0)));
}

#[test]
fn test_invalidate_surrounding() {
    let mut board = Board::new();
    board.record_shot(c(5, 5), true).unwrap();
    board.invalidate_surrounding(c(5, 5)).unwrap();
    assert_eq!(board.unknown_count(), BOARD_WIDTH * BOARD_HEIGHT - 9);
    assert_eq!(board.tile(c(5, 5)).unwrap(), TileState::Hit);
    assert_eq!(board.tile(c(4, 6)).unwrap(), TileState::Miss);
    assert_eq!(
        board.invalidate_surrounding(c(10, 10)),
        Err(EngineError::InvalidCoordinate)
    );
}
