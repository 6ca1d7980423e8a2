//! Tracking phase: finish off a ship once a search shot has hit it.
//!
//! Shots walk outward from the first hit (the origin) in the four axis
//! directions. Each direction keeps a budget of steps already taken; a miss,
//! the board edge or an already resolved cell exhausts it. A hit along one
//! axis rules out the other axis, since ships are straight. Once all four
//! directions are exhausted the ship is sunk.

use log::trace;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::EngineError;
use crate::coord::{Coordinate, Direction};

/// Progress along one direction from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionBudget {
    /// Steps already fired in this direction.
    Open(usize),
    /// No more ship this way.
    Exhausted,
}

/// Outcome of feeding a result back to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOutcome {
    Continue,
    Sunk,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tracker {
    origin: Coordinate,
    budgets: [DirectionBudget; 4],
    pending: Option<Direction>,
}

impl Tracker {
    /// Start tracking from a fresh hit at `origin`.
    pub fn new(origin: Coordinate) -> Self {
        Self {
            origin,
            budgets: [DirectionBudget::Open(0); 4],
            pending: None,
        }
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn budget(&self, dir: Direction) -> DirectionBudget {
        self.budgets[dir.index()]
    }

    pub fn is_exhausted(&self, dir: Direction) -> bool {
        self.budget(dir) == DirectionBudget::Exhausted
    }

    pub fn all_exhausted(&self) -> bool {
        Direction::ALL.iter().all(|&d| self.is_exhausted(d))
    }

    fn exhaust(&mut self, dir: Direction) {
        self.budgets[dir.index()] = DirectionBudget::Exhausted;
    }

    /// The next untried cell along `dir`, if the direction is still open.
    pub fn next_cell(&self, dir: Direction) -> Option<Coordinate> {
        match self.budget(dir) {
            DirectionBudget::Open(steps) => self.origin.step(dir, steps + 1),
            DirectionBudget::Exhausted => None,
        }
    }

    /// Exhaust every direction whose next cell is off the board or already
    /// resolved, so it is never fired on.
    pub fn prune(&mut self, board: &Board) {
        for dir in Direction::ALL {
            if self.is_exhausted(dir) {
                continue;
            }
            match self.next_cell(dir) {
                Some(cell) if !board.is_resolved(cell) => {}
                _ => {
                    trace!("direction {:?} from {:?} runs out", dir, self.origin);
                    self.exhaust(dir);
                }
            }
        }
    }

    /// Choose the next shot: a uniformly random open direction, one step
    /// beyond what it has already covered. `None` once every direction is
    /// exhausted.
    pub fn next_target<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) -> Option<Coordinate> {
        self.prune(board);
        let mut open = [Direction::Right; 4];
        let mut len = 0;
        for dir in Direction::ALL {
            if !self.is_exhausted(dir) {
                open[len] = dir;
                len += 1;
            }
        }
        let dir = *open[..len].choose(rng)?;
        let target = self.next_cell(dir)?;
        if let DirectionBudget::Open(steps) = self.budget(dir) {
            self.budgets[dir.index()] = DirectionBudget::Open(steps + 1);
        }
        self.pending = Some(dir);
        Some(target)
    }

    /// Apply the result of the shot returned by the last [`Tracker::next_target`].
    /// The board must already hold that result.
    pub fn record_result(&mut self, was_hit: bool, board: &Board) -> Result<TrackOutcome, EngineError> {
        let dir = self
            .pending
            .take()
            .ok_or(EngineError::InconsistentState("tracking result without a tracking shot"))?;
        if was_hit {
            for other in dir.orthogonal() {
                self.exhaust(other);
            }
        } else {
            self.exhaust(dir);
        }
        self.prune(board);
        if self.all_exhausted() {
            Ok(TrackOutcome::Sunk)
        } else {
            Ok(TrackOutcome::Continue)
        }
    }
}
