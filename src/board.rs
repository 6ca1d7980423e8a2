//! What the engine knows about the opponent's board.
//!
//! Knowledge is kept as four bitboards:
//! - `hits` and `misses` are observed: cells actually fired on.
//! - `cleared` is inferred: water around a sunk ship.
//! - `skipped` is the parity class the search never visits.
//!
//! Observed cells never change once recorded. A skipped cell reads as a miss
//! but may still be fired on while finishing off a ship, at which point the
//! observed result takes over.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::EngineError;
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::coord::{Coordinate, Direction, Parity};

/// Bitboard sized to the game board.
pub type BB = BitBoard<u128, BOARD_WIDTH, BOARD_HEIGHT>;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TileState {
    Unknown,
    Miss,
    Hit,
}

pub struct Board {
    hits: BB,
    misses: BB,
    cleared: BB,
    skipped: BB,
    scores: [[u32; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Board {
    /// Board with every cell unknown.
    pub fn new() -> Self {
        let mut board = Board {
            hits: BB::new(),
            misses: BB::new(),
            cleared: BB::new(),
            skipped: BB::new(),
            scores: [[0; BOARD_WIDTH]; BOARD_HEIGHT],
        };
        board.recalculate_all();
        board
    }

    pub fn is_in_bounds(&self, coord: Coordinate) -> bool {
        coord.in_bounds()
    }

    /// Current state of `coord`.
    pub fn tile(&self, coord: Coordinate) -> Result<TileState, EngineError> {
        if !coord.in_bounds() {
            return Err(EngineError::InvalidCoordinate);
        }
        Ok(self.state_of(coord))
    }

    fn state_of(&self, coord: Coordinate) -> TileState {
        if bit(&self.hits, coord) {
            TileState::Hit
        } else if bit(&self.misses, coord) || bit(&self.cleared, coord) || bit(&self.skipped, coord) {
            TileState::Miss
        } else {
            TileState::Unknown
        }
    }

    pub fn is_unknown(&self, coord: Coordinate) -> bool {
        coord.in_bounds() && self.state_of(coord) == TileState::Unknown
    }

    /// Cell has been fired on.
    pub fn is_fired(&self, coord: Coordinate) -> bool {
        bit(&self.hits, coord) || bit(&self.misses, coord)
    }

    /// Cell is fired on or known to be water. Parity skipping alone does not
    /// resolve a cell.
    pub fn is_resolved(&self, coord: Coordinate) -> bool {
        self.is_fired(coord) || bit(&self.cleared, coord)
    }

    /// Record the outcome of a shot at `coord` and refresh every score.
    pub fn record_shot(&mut self, coord: Coordinate, was_hit: bool) -> Result<(), EngineError> {
        if !coord.in_bounds() {
            return Err(EngineError::InvalidCoordinate);
        }
        if self.is_fired(coord) {
            return Err(EngineError::DuplicateShot {
                row: coord.row,
                col: coord.col,
            });
        }
        if was_hit {
            self.hits.set(coord.row, coord.col)?;
        } else {
            self.misses.set(coord.row, coord.col)?;
        }
        self.recalculate_all();
        Ok(())
    }

    /// Mark every cell of `parity` as a miss without firing on it. Any ship of
    /// length two or more covers both colourings, so the search only needs
    /// the other one.
    pub fn eliminate_parity_class(&mut self, parity: Parity) {
        let mut skipped = BB::new();
        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                if Coordinate::new(row, col).parity() == parity {
                    let _ = skipped.set(row, col);
                }
            }
        }
        self.skipped = skipped;
        self.recalculate_all();
    }

    /// Mark the unresolved cells of the 3×3 neighbourhood around `coord` as water.
    pub fn invalidate_surrounding(&mut self, coord: Coordinate) -> Result<(), EngineError> {
        if !coord.in_bounds() {
            return Err(EngineError::InvalidCoordinate);
        }
        let mut cell = BB::new();
        cell.set(coord.row, coord.col)?;
        self.clear_around(cell);
        self.recalculate_all();
        Ok(())
    }

    /// Mark every unresolved cell touching a hit as water. Ships never touch,
    /// so nothing next to a sunk ship can hold another one.
    pub fn invalidate_adjacent_to_hits(&mut self) {
        self.clear_around(self.hits);
        self.recalculate_all();
    }

    fn clear_around(&mut self, cells: BB) {
        let fired = self.hits | self.misses;
        self.cleared |= cells.dilate() & !fired;
    }

    /// Length of the longest horizontal or vertical run of open cells
    /// through `coord`, counting the cell itself. Fired and cleared cells
    /// block a run; parity-skipped cells do not, since a ship may still lie
    /// across them. Zero for a cell that is not open.
    pub fn score(&self, coord: Coordinate) -> u32 {
        if !self.is_open(coord) {
            return 0;
        }
        let vertical = 1 + self.run(coord, Direction::Up) + self.run(coord, Direction::Down);
        let horizontal = 1 + self.run(coord, Direction::Left) + self.run(coord, Direction::Right);
        vertical.max(horizontal)
    }

    fn run(&self, from: Coordinate, dir: Direction) -> u32 {
        let mut len = 0;
        while let Some(next) = from.step(dir, len as usize + 1) {
            if !self.is_open(next) {
                break;
            }
            len += 1;
        }
        len
    }

    fn is_open(&self, coord: Coordinate) -> bool {
        coord.in_bounds() && !self.is_resolved(coord)
    }

    /// Cached score of `coord` as of the last change to the board.
    pub fn tile_score(&self, coord: Coordinate) -> u32 {
        self.scores
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
            .unwrap_or(0)
    }

    pub fn recalculate_all(&mut self) {
        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                self.scores[row][col] = self.score(Coordinate::new(row, col));
            }
        }
    }

    /// Cells fired on that hit.
    pub fn hits(&self) -> BB {
        self.hits
    }

    /// Cells fired on that missed.
    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Number of cells still reading [`TileState::Unknown`].
    pub fn unknown_count(&self) -> usize {
        (!(self.hits | self.misses | self.cleared | self.skipped)).count_ones()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ hits: {}, misses: {}, cleared: {}, skipped: {}, unknown: {} }}",
            self.hits.count_ones(),
            self.misses.count_ones(),
            self.cleared.count_ones(),
            self.skipped.count_ones(),
            self.unknown_count(),
        )
    }
}

#[inline]
fn bit(board: &BB, coord: Coordinate) -> bool {
    board.get(coord.row, coord.col).unwrap_or(false)
}
