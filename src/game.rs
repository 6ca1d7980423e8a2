use alloc::vec::Vec;
use log::debug;

use crate::{
    board::BB,
    common::EngineError,
    config::{BOARD_HEIGHT, BOARD_WIDTH},
    coord::ExternalCoord,
    player::Player,
    ship::{PlacedShip, ShipClass},
};

/// Opponent layout that answers shots.
pub struct TargetFleet {
    ships: Vec<PlacedShip>,
    ship_map: BB,
    hits: BB,
    fired: BB,
}

impl TargetFleet {
    pub fn new(ships: Vec<PlacedShip>) -> Result<Self, EngineError> {
        let mut ship_map = BB::new();
        for ship in ships.iter() {
            ship_map |= ship.footprint()?;
        }
        Ok(Self {
            ships,
            ship_map,
            hits: BB::new(),
            fired: BB::new(),
        })
    }

    pub fn ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Fire at `target`, returning `true` on a hit.
    pub fn fire(&mut self, target: ExternalCoord) -> Result<bool, EngineError> {
        let coord = target.to_internal()?;
        if !coord.in_bounds() {
            return Err(EngineError::InvalidCoordinate);
        }
        if self.fired.get(coord.row, coord.col)? {
            return Err(EngineError::DuplicateShot {
                row: coord.row,
                col: coord.col,
            });
        }
        self.fired.set(coord.row, coord.col)?;
        let hit = self.ship_map.get(coord.row, coord.col)?;
        if hit {
            self.hits.set(coord.row, coord.col)?;
        }
        Ok(hit)
    }

    /// Returns `true` once every cell of `class` has been hit.
    pub fn is_sunk(&self, class: ShipClass) -> bool {
        self.ships
            .iter()
            .filter(|s| s.class() == class)
            .all(|s| self.ship_sunk(s))
    }

    pub fn all_sunk(&self) -> bool {
        self.hits == self.ship_map
    }

    /// Number of ships not yet sunk.
    pub fn ships_remaining(&self) -> usize {
        self.ships
            .iter()
            .filter(|s| !self.ship_sunk(s))
            .count()
    }

    fn ship_sunk(&self, ship: &PlacedShip) -> bool {
        ship.cells()
            .all(|c| self.hits.get(c.row, c.col).unwrap_or(false))
    }
}

/// Result of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub shots: usize,
    pub hits: usize,
}

/// Let `player` fire at `fleet` until every ship is sunk.
///
/// The player's own fleet is requested first, which starts its new game.
/// Each cell can be fired on at most once, so a player still shooting after
/// `BOARD_WIDTH * BOARD_HEIGHT` shots is out of sync with the host.
pub fn play_game<P: Player + ?Sized>(
    player: &mut P,
    fleet: &mut TargetFleet,
) -> Result<GameSummary, EngineError> {
    player.ship_positions()?;
    let mut summary = GameSummary { shots: 0, hits: 0 };
    while !fleet.all_sunk() {
        if summary.shots >= BOARD_WIDTH * BOARD_HEIGHT {
            return Err(EngineError::InconsistentState("fleet still afloat after every cell was fired on"));
        }
        let target = player.select_target()?;
        let hit = fleet.fire(target)?;
        player.shot_result(hit)?;
        summary.shots += 1;
        if hit {
            summary.hits += 1;
        }
    }
    debug!(
        "{} sank the fleet in {} shots",
        player.name(),
        summary.shots
    );
    Ok(summary)
}
