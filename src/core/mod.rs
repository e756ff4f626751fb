//! Core types: coordinates, seats, RNG, configuration.
//!
//! Everything here is a plain value type with no game rules attached.

pub mod coord;
pub mod player;
pub mod rng;
pub mod config;

pub use coord::{Axis, Coord};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{SessionConfig, MAX_PLAYERS};
