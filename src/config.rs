use crate::ship::{ShipClass, ShipSpec};

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 10;

/// Number of interleaved diagonal bands the search walks.
pub const BAND_COUNT: usize = BOARD_WIDTH / 2;

pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new(ShipClass::AircraftCarrier, 5),
    ShipSpec::new(ShipClass::Battleship, 4),
    ShipSpec::new(ShipClass::Destroyer, 3),
    ShipSpec::new(ShipClass::Submarine, 3),
    ShipSpec::new(ShipClass::PatrolBoat, 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Start positions sampled for one ship before the layout is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Whole layouts tried before fleet generation reports failure.
pub const MAX_FLEET_ATTEMPTS: usize = 64;

// Diagonal bands only partition one parity class when the wrap is even.
const _: () = assert!(BOARD_WIDTH % 2 == 0);
// Rows are addressed by a single letter.
const _: () = assert!(BOARD_HEIGHT <= 26);
// Grids pack into a u128 bitboard.
const _: () = assert!(BOARD_WIDTH * BOARD_HEIGHT <= 128);
