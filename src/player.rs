use alloc::vec::Vec;
use rand::Rng;

use crate::{
    common::EngineError,
    coord::ExternalCoord,
    engine::Engine,
    ship::PlacedShip,
};

/// Contract between a game host and a bot.
///
/// Per game the host calls [`Player::ship_positions`] once, then alternates
/// [`Player::select_target`] and [`Player::shot_result`] until it decides
/// the game is over.
pub trait Player {
    fn name(&self) -> &'static str;

    /// Start a new game and lay out the fleet.
    fn ship_positions(&mut self) -> Result<Vec<PlacedShip>, EngineError>;

    /// Choose the next cell to fire on.
    fn select_target(&mut self) -> Result<ExternalCoord, EngineError>;

    /// Outcome of the shot returned by the last `select_target`.
    fn shot_result(&mut self, was_hit: bool) -> Result<(), EngineError>;

    /// The opponent fired at our fleet.
    fn opponent_shot(&mut self, _target: ExternalCoord) -> Result<(), EngineError> {
        Ok(())
    }
}

impl<R: Rng> Player for Engine<R> {
    fn name(&self) -> &'static str {
        "broadside"
    }

    fn ship_positions(&mut self) -> Result<Vec<PlacedShip>, EngineError> {
        self.generate_fleet()
    }

    fn select_target(&mut self) -> Result<ExternalCoord, EngineError> {
        Engine::select_target(self)
    }

    fn shot_result(&mut self, was_hit: bool) -> Result<(), EngineError> {
        self.record_shot_result(was_hit)
    }

    fn opponent_shot(&mut self, target: ExternalCoord) -> Result<(), EngineError> {
        self.notify_opponent_shot(target)
    }
}
