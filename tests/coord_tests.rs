use broadside::{Coordinate, Direction, EngineError, ExternalCoord, Parity};

#[test]
fn test_to_and_from_external() {
    let ext = Coordinate::new(1, 2).to_external().unwrap();
    assert_eq!(ext, ExternalCoord::new('B', 3));
    assert_eq!(ext.to_string(), "B3");
    assert_eq!(ext.to_internal().unwrap(), Coordinate::new(1, 2));

    assert_eq!(Coordinate::from_external('A', 1).unwrap(), Coordinate::new(0, 0));
    assert_eq!(Coordinate::from_external('Z', 10).unwrap(), Coordinate::new(25, 9));
}

#[test]
fn test_all_letter_rows_convert_back() {
    for row in 0..26 {
        for col in 0..10 {
            let c = Coordinate::new(row, col);
            let ext = c.to_external().unwrap();
            assert_eq!(Coordinate::from_external(ext.row, ext.column).unwrap(), c);
        }
    }
}

#[test]
fn test_invalid_external_coordinates() {
    assert_eq!(Coordinate::new(26, 0).to_external(), Err(EngineError::InvalidCoordinate));
    assert_eq!(Coordinate::from_external('a', 1), Err(EngineError::InvalidCoordinate));
    assert_eq!(Coordinate::from_external('@', 1), Err(EngineError::InvalidCoordinate));
    assert_eq!(Coordinate::from_external('B', 0), Err(EngineError::InvalidCoordinate));
}

#[test]
fn test_parse_external() {
    assert_eq!("B3".parse::<ExternalCoord>().unwrap(), ExternalCoord::new('B', 3));
    assert_eq!("J10".parse::<ExternalCoord>().unwrap(), ExternalCoord::new('J', 10));
    assert!("".parse::<ExternalCoord>().is_err());
    assert!("B".parse::<ExternalCoord>().is_err());
    assert!("B0".parse::<ExternalCoord>().is_err());
    assert!("3B".parse::<ExternalCoord>().is_err());
}

#[test]
fn test_direction_index_lookup() {
    for (i, dir) in Direction::ALL.iter().enumerate() {
        assert_eq!(dir.index(), i);
        assert_eq!(Direction::from_index(i), Some(*dir));
    }
    assert_eq!(Direction::from_index(4), None);
}

#[test]
fn test_direction_geometry() {
    assert!(Direction::Right.is_horizontal());
    assert!(!Direction::Down.is_horizontal());
    assert_eq!(Direction::Left.orthogonal(), [Direction::Up, Direction::Down]);
    assert_eq!(Direction::Up.orthogonal(), [Direction::Right, Direction::Left]);
}

#[test]
fn test_step_never_wraps() {
    let origin = Coordinate::new(0, 9);
    assert_eq!(origin.step(Direction::Up, 1), None);
    assert_eq!(origin.step(Direction::Right, 1), None);
    assert_eq!(origin.step(Direction::Left, 9), Some(Coordinate::new(0, 0)));
    assert_eq!(origin.step(Direction::Left, 10), None);
    assert_eq!(origin.step(Direction::Down, 3), Some(Coordinate::new(3, 9)));
}

#[test]
fn test_parity() {
    assert_eq!(Coordinate::new(0, 0).parity(), Parity::Even);
    assert_eq!(Coordinate::new(1, 0).parity(), Parity::Odd);
    assert_eq!(Parity::Even.other(), Parity::Odd);
    assert_eq!(Parity::Odd.offset(), 1);
}
