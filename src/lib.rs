#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod engine;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod prelude;
mod search;
mod ship;
mod tracking;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use engine::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use search::*;
pub use ship::*;
pub use tracking::*;
