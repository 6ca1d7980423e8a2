//! Random fleet placement.
//!
//! Ships are laid out one class at a time in canonical order. Each placed
//! ship reserves its footprint plus a one-cell margin, so no two ships ever
//! overlap or touch, not even diagonally. The tracking strategy depends on
//! that: once a ship is sunk, every cell around it is known to be water.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;

use crate::board::BB;
use crate::common::EngineError;
use crate::config::{
    BOARD_HEIGHT, BOARD_WIDTH, MAX_FLEET_ATTEMPTS, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, SHIPS,
};
use crate::coord::Coordinate;
use crate::ship::{Orientation, PlacedShip, ShipSpec};

/// Generate one placement per ship class, in the order of [`SHIPS`].
pub fn generate_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<PlacedShip>, EngineError> {
    for attempt in 1..=MAX_FLEET_ATTEMPTS {
        if let Some(fleet) = try_layout(rng)? {
            debug!("fleet laid out on attempt {}", attempt);
            return Ok(fleet);
        }
        trace!("layout attempt {} boxed itself in, starting over", attempt);
    }
    Err(EngineError::InconsistentState("unable to lay out fleet"))
}

fn try_layout<R: Rng + ?Sized>(rng: &mut R) -> Result<Option<Vec<PlacedShip>>, EngineError> {
    let mut occupied = BB::new();
    let mut fleet = Vec::with_capacity(NUM_SHIPS);
    for spec in SHIPS.iter() {
        let ship = match place_ship(rng, *spec, &occupied)? {
            Some(ship) => ship,
            None => return Ok(None),
        };
        occupied |= ship.exclusion_zone()?;
        fleet.push(ship);
    }
    Ok(Some(fleet))
}

/// Pick an orientation, then sample start cells from the range that keeps the
/// whole ship on the board until one clears every reserved cell.
fn place_ship<R: Rng + ?Sized>(
    rng: &mut R,
    spec: ShipSpec,
    occupied: &BB,
) -> Result<Option<PlacedShip>, EngineError> {
    let orientation = if rng.random() {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    let span = spec.length() - 1;
    let (rows, cols) = match orientation {
        Orientation::Horizontal => (BOARD_HEIGHT, BOARD_WIDTH - span),
        Orientation::Vertical => (BOARD_HEIGHT - span, BOARD_WIDTH),
    };
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let start = Coordinate::new(rng.random_range(0..rows), rng.random_range(0..cols));
        let ship = PlacedShip::new(spec, start, orientation)?;
        if (ship.footprint()? & *occupied).is_empty() {
            return Ok(Some(ship));
        }
    }
    Ok(None)
}
