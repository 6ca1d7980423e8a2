//! Grid geometry: internal zero-based coordinates, the letter-row /
//! one-based-column form used by hosts, and axis directions.

use core::fmt;
use core::str::FromStr;

use crate::common::EngineError;
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};

const ROW_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Zero-based (row, column) position on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if the coordinate lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_HEIGHT && self.col < BOARD_WIDTH
    }

    /// Convert to the host's letter-row / one-based-column form.
    pub fn to_external(self) -> Result<ExternalCoord, EngineError> {
        let letter = ROW_LETTERS
            .get(self.row)
            .ok_or(EngineError::InvalidCoordinate)?;
        Ok(ExternalCoord {
            row: *letter as char,
            column: self.col + 1,
        })
    }

    /// Convert from the host's form. The board size is not checked here.
    pub fn from_external(row: char, column: usize) -> Result<Self, EngineError> {
        if !row.is_ascii_uppercase() || column == 0 {
            return Err(EngineError::InvalidCoordinate);
        }
        Ok(Self {
            row: (row as u8 - b'A') as usize,
            col: column - 1,
        })
    }

    /// The cell `distance` steps away along `dir`, or `None` if that leaves the board.
    pub fn step(self, dir: Direction, distance: usize) -> Option<Self> {
        let (dr, dc) = dir.delta();
        let row = offset(self.row, dr, distance)?;
        let col = offset(self.col, dc, distance)?;
        let next = Self { row, col };
        next.in_bounds().then_some(next)
    }

    /// Checkerboard colouring of this cell.
    pub fn parity(&self) -> Parity {
        if (self.row + self.col) % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

fn offset(base: usize, delta: isize, distance: usize) -> Option<usize> {
    match delta {
        0 => Some(base),
        d if d > 0 => base.checked_add(distance),
        _ => base.checked_sub(distance),
    }
}

/// Coordinate as the host addresses it: row letter, one-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ExternalCoord {
    pub row: char,
    pub column: usize,
}

impl ExternalCoord {
    pub fn new(row: char, column: usize) -> Self {
        Self { row, column }
    }

    pub fn to_internal(self) -> Result<Coordinate, EngineError> {
        Coordinate::from_external(self.row, self.column)
    }
}

impl fmt::Display for ExternalCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

/// Parses the compact "B3" form.
impl FromStr for ExternalCoord {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let row = chars.next().ok_or(EngineError::InvalidCoordinate)?;
        let column = chars
            .as_str()
            .parse::<usize>()
            .map_err(|_| EngineError::InvalidCoordinate)?;
        Coordinate::from_external(row, column)?;
        Ok(Self { row, column })
    }
}

/// Axis direction walked outward from a located hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    /// Slot of this direction in per-direction arrays.
    pub const fn index(self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Up => 1,
            Direction::Left => 2,
            Direction::Down => 3,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Direction::Right),
            1 => Some(Direction::Up),
            2 => Some(Direction::Left),
            3 => Some(Direction::Down),
            _ => None,
        }
    }

    /// (row, column) unit step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }

    /// The two directions perpendicular to this one.
    pub const fn orthogonal(self) -> [Direction; 2] {
        if self.is_horizontal() {
            [Direction::Up, Direction::Down]
        } else {
            [Direction::Right, Direction::Left]
        }
    }
}

/// One of the two checkerboard colourings of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Parity {
    /// Cells where `row + col` is even.
    Even,
    /// Cells where `row + col` is odd.
    Odd,
}

impl Parity {
    pub const fn other(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }

    /// 0 for even, 1 for odd.
    pub const fn offset(self) -> usize {
        match self {
            Parity::Even => 0,
            Parity::Odd => 1,
        }
    }
}
