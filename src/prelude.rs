//! Commonly used types and utilities for ease of import.

pub use crate::{
    generate_fleet, play_game, Coordinate, Engine, EngineError, ExternalCoord, PlacedShip,
    Player, TargetFleet, TargetingState, TileState,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
