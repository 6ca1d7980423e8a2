//! Errors shared by every engine component.

use crate::bitboard::BitBoardError;

/// Contract violations reported by the engine.
///
/// None of these are recoverable in-game conditions: each one means the host
/// and the engine disagree about the call sequence or the coordinates in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Row letter or column outside the supported range.
    InvalidCoordinate,
    /// The same cell was fired on twice.
    DuplicateShot { row: usize, col: usize },
    /// A target was requested but no legal cell remains.
    NoTargetsRemaining,
    /// Call sequence violated, e.g. a result reported with no shot pending.
    InconsistentState(&'static str),
    /// Underlying bitboard error.
    BitBoard(BitBoardError),
}

impl From<BitBoardError> for EngineError {
    fn from(err: BitBoardError) -> Self {
        EngineError::BitBoard(err)
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::InvalidCoordinate => write!(f, "Coordinate is outside the board"),
            EngineError::DuplicateShot { row, col } => {
                write!(f, "Cell ({}, {}) has already been fired on", row, col)
            }
            EngineError::NoTargetsRemaining => write!(f, "No untried cells remain"),
            EngineError::InconsistentState(why) => write!(f, "Inconsistent engine state: {}", why),
            EngineError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
