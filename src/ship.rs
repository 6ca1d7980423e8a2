//! Ship classes and placed ships.

use crate::board::BB;
use crate::common::EngineError;
use crate::coord::{Coordinate, ExternalCoord};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The five ship classes, in canonical fleet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipClass {
    AircraftCarrier,
    Battleship,
    Destroyer,
    Submarine,
    PatrolBoat,
}

impl ShipClass {
    pub fn name(&self) -> &'static str {
        match self {
            ShipClass::AircraftCarrier => "Aircraft Carrier",
            ShipClass::Battleship => "Battleship",
            ShipClass::Destroyer => "Destroyer",
            ShipClass::Submarine => "Submarine",
            ShipClass::PatrolBoat => "Patrol Boat",
        }
    }
}

/// Ship class paired with its fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    class: ShipClass,
    length: usize,
}

impl ShipSpec {
    pub const fn new(class: ShipClass, length: usize) -> Self {
        Self { class, length }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship laid out on the board. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedShip {
    class: ShipClass,
    start: Coordinate,
    end: Coordinate,
    orientation: Orientation,
}

impl PlacedShip {
    /// Lay out `spec` from `start` along `orientation`.
    pub fn new(
        spec: ShipSpec,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<Self, EngineError> {
        let span = spec.length().saturating_sub(1);
        let end = match orientation {
            Orientation::Horizontal => Coordinate::new(start.row, start.col + span),
            Orientation::Vertical => Coordinate::new(start.row + span, start.col),
        };
        if spec.length() == 0 || !start.in_bounds() || !end.in_bounds() {
            return Err(EngineError::InvalidCoordinate);
        }
        Ok(Self {
            class: spec.class(),
            start,
            end,
            orientation,
        })
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => self.end.col - self.start.col + 1,
            Orientation::Vertical => self.end.row - self.start.row + 1,
        }
    }

    /// Cells covered by the ship, from start to end.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length()).map(move |i| match self.orientation {
            Orientation::Horizontal => Coordinate::new(self.start.row, self.start.col + i),
            Orientation::Vertical => Coordinate::new(self.start.row + i, self.start.col),
        })
    }

    pub fn contains(&self, cell: Coordinate) -> bool {
        self.cells().any(|c| c == cell)
    }

    /// Occupancy mask of the ship itself.
    pub fn footprint(&self) -> Result<BB, EngineError> {
        Ok(BB::from_iter(self.cells().map(|c| (c.row, c.col)))?)
    }

    /// Footprint plus the one-cell margin around it. No other ship may
    /// touch this area.
    pub fn exclusion_zone(&self) -> Result<BB, EngineError> {
        Ok(self.footprint()?.dilate())
    }

    pub fn start_external(&self) -> Result<ExternalCoord, EngineError> {
        self.start.to_external()
    }

    pub fn end_external(&self) -> Result<ExternalCoord, EngineError> {
        self.end.to_external()
    }
}
