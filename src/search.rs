// Search phase: locate any ship while skipping one parity class.
//
// The board is cut into `BAND_COUNT` diagonal bands, each holding one cell
// per row, which together cover exactly the cells the search may fire on.
// A band with unknown cells left is picked at random, then a cell within it
// is drawn with probability proportional to its openness score. No heap
// allocations.

use log::trace;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::EngineError;
use crate::config::{BAND_COUNT, BOARD_HEIGHT, BOARD_WIDTH};
use crate::coord::{Coordinate, Parity};

/// Diagonal partition of the cells not eliminated by parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagonalBands {
    start: usize,
}

impl DiagonalBands {
    /// Bands covering the complement of the `eliminated` parity class.
    pub fn new(eliminated: Parity) -> Self {
        Self {
            start: eliminated.other().offset(),
        }
    }

    /// Cell of `band` in `row`. Columns wrap around the right edge.
    pub fn cell(&self, band: usize, row: usize) -> Coordinate {
        Coordinate::new(row, (band * 2 + self.start + row) % BOARD_WIDTH)
    }

    /// Every cell of `band`, top row first.
    pub fn cells(&self, band: usize) -> impl Iterator<Item = Coordinate> + '_ {
        (0..BOARD_HEIGHT).map(move |row| self.cell(band, row))
    }

    /// Bands that still contain at least one unknown cell.
    pub fn valid_bands(&self, board: &Board) -> ([usize; BAND_COUNT], usize) {
        let mut valid = [0usize; BAND_COUNT];
        let mut len = 0;
        for band in 0..BAND_COUNT {
            if self.cells(band).any(|c| board.is_unknown(c)) {
                valid[len] = band;
                len += 1;
            }
        }
        (valid, len)
    }
}

/// Choose the next search shot.
pub fn select_search_target<R: Rng + ?Sized>(
    board: &Board,
    bands: &DiagonalBands,
    rng: &mut R,
) -> Result<Coordinate, EngineError> {
    let (valid, len) = bands.valid_bands(board);
    let band = *valid[..len]
        .choose(rng)
        .ok_or(EngineError::NoTargetsRemaining)?;

    let mut candidates = [(Coordinate::default(), 0u32); BOARD_HEIGHT];
    let mut count = 0;
    for cell in bands.cells(band).filter(|c| board.is_unknown(*c)) {
        candidates[count] = (cell, board.tile_score(cell));
        count += 1;
    }
    trace!("band {} has {} candidate cells", band, count);

    weighted_pick(&candidates[..count], rng).ok_or(EngineError::NoTargetsRemaining)
}

/// Roulette-wheel selection: draw uniformly from `[0, total weight)` and
/// return the first item whose cumulative weight exceeds the draw. Falls back
/// to a uniform choice if every weight is zero.
pub fn weighted_pick<T: Copy, R: Rng + ?Sized>(items: &[(T, u32)], rng: &mut R) -> Option<T> {
    let total: u32 = items.iter().map(|&(_, weight)| weight).sum();
    if total == 0 {
        return items.choose(rng).map(|&(item, _)| item);
    }
    let threshold = rng.random_range(0..total);
    let mut cumulative = 0;
    for &(item, weight) in items {
        cumulative += weight;
        if threshold < cumulative {
            return Some(item);
        }
    }
    None
}
