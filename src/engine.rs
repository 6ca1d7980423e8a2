//! Targeting state machine and per-game session.
//!
//! One [`Engine`] holds everything learned during a single game. It is not
//! shared between games; a host playing several games at once creates one
//! engine per game.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::common::EngineError;
use crate::coord::{Coordinate, ExternalCoord, Parity};
use crate::fleet::generate_fleet;
use crate::search::{self, DiagonalBands};
use crate::ship::PlacedShip;
use crate::tracking::{TrackOutcome, Tracker};

/// Which phase the engine is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetingState {
    /// Looking for any ship.
    Searching,
    /// Sinking the ship found at the tracker's origin.
    Tracking(Tracker),
}

pub struct Engine<R: Rng = SmallRng> {
    rng: R,
    board: Board,
    bands: DiagonalBands,
    parity: Parity,
    state: TargetingState,
    pending: Option<Coordinate>,
    last_shot: Option<Coordinate>,
    shots_fired: usize,
    turns_since_last_hit: usize,
}

impl Engine<SmallRng> {
    /// Engine with a reproducible generator.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Engine seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let mut seed_rng = rand::rng();
        Self::new(SmallRng::from_rng(&mut seed_rng))
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine ready for a fresh game with a random parity class.
    pub fn new(mut rng: R) -> Self {
        let parity = random_parity(&mut rng);
        let mut engine = Self {
            rng,
            board: Board::new(),
            bands: DiagonalBands::new(parity),
            parity,
            state: TargetingState::Searching,
            pending: None,
            last_shot: None,
            shots_fired: 0,
            turns_since_last_hit: 0,
        };
        engine.reset(parity);
        engine
    }

    /// Forget the current game and start over, skipping `parity` during search.
    pub fn reset(&mut self, parity: Parity) {
        self.board = Board::new();
        self.board.eliminate_parity_class(parity);
        self.bands = DiagonalBands::new(parity);
        self.parity = parity;
        self.state = TargetingState::Searching;
        self.pending = None;
        self.last_shot = None;
        self.shots_fired = 0;
        self.turns_since_last_hit = 0;
        debug!("new game, skipping {:?} cells", parity);
    }

    /// Start a new game and return our fleet layout.
    pub fn generate_fleet(&mut self) -> Result<Vec<PlacedShip>, EngineError> {
        let parity = random_parity(&mut self.rng);
        self.reset(parity);
        let fleet = generate_fleet(&mut self.rng)?;
        debug!("placed {} ships", fleet.len());
        Ok(fleet)
    }

    /// Choose this turn's shot. Must be followed by [`Engine::record_shot_result`].
    pub fn select_target(&mut self) -> Result<ExternalCoord, EngineError> {
        if self.pending.is_some() {
            return Err(EngineError::InconsistentState(
                "target requested before the previous result was reported",
            ));
        }
        let target = self.next_coordinate()?;
        let external = target.to_external()?;
        self.pending = Some(target);
        self.last_shot = Some(target);
        self.shots_fired += 1;
        trace!("shot {} at {}", self.shots_fired, external);
        Ok(external)
    }

    fn next_coordinate(&mut self) -> Result<Coordinate, EngineError> {
        if let TargetingState::Tracking(tracker) = &mut self.state {
            if let Some(target) = tracker.next_target(&self.board, &mut self.rng) {
                return Ok(target);
            }
            self.finish_tracking();
        }
        self.turns_since_last_hit += 1;
        search::select_search_target(&self.board, &self.bands, &mut self.rng)
    }

    /// Report whether the shot from the last [`Engine::select_target`] hit.
    pub fn record_shot_result(&mut self, was_hit: bool) -> Result<(), EngineError> {
        let target = self
            .pending
            .take()
            .ok_or(EngineError::InconsistentState("shot result reported with no shot pending"))?;
        self.board.record_shot(target, was_hit)?;
        trace!("{:?} {}", target, if was_hit { "hit" } else { "miss" });
        if was_hit {
            self.turns_since_last_hit = 0;
        }

        let outcome = match &mut self.state {
            TargetingState::Searching => None,
            TargetingState::Tracking(tracker) => Some(tracker.record_result(was_hit, &self.board)?),
        };
        match outcome {
            None if was_hit => {
                debug!("ship located at {:?}, tracking", target);
                self.state = TargetingState::Tracking(Tracker::new(target));
            }
            Some(TrackOutcome::Sunk) => self.finish_tracking(),
            _ => {}
        }
        Ok(())
    }

    fn finish_tracking(&mut self) {
        if let TargetingState::Tracking(tracker) = &self.state {
            debug!("ship at {:?} sunk, back to searching", tracker.origin());
        }
        self.board.invalidate_adjacent_to_hits();
        self.state = TargetingState::Searching;
    }

    /// Acknowledge a shot the opponent fired at our fleet. Carries no
    /// information about the opponent's board.
    pub fn notify_opponent_shot(&mut self, target: ExternalCoord) -> Result<(), EngineError> {
        let coord = target.to_internal()?;
        if !self.board.is_in_bounds(coord) {
            return Err(EngineError::InvalidCoordinate);
        }
        trace!("opponent fired at {}", target);
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &TargetingState {
        &self.state
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TargetingState::Tracking(_))
    }

    /// Parity class skipped by the search this game.
    pub fn parity(&self) -> Parity {
        self.parity
    }

    pub fn last_shot(&self) -> Option<Coordinate> {
        self.last_shot
    }

    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Search shots fired since the last hit.
    pub fn turns_since_last_hit(&self) -> usize {
        self.turns_since_last_hit
    }
}

fn random_parity<R: Rng + ?Sized>(rng: &mut R) -> Parity {
    if rng.random() {
        Parity::Even
    } else {
        Parity::Odd
    }
}
