//! # iota-engine
//!
//! Rules engine for an Iota-style tile-placement card game.
//!
//! Cards carry a color, a shape and a number (or are wild). A turn places one
//! to four cards along a single row or column of an unbounded grid. Every
//! contiguous line the turn touches must be, on each attribute separately,
//! either all the same or all different.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: validation, scoring and legal-cell search are functions
//!    of `(grid, placements)`. They never mutate the caller's grid, keep no
//!    state between calls, and touch no clock, network or storage.
//!
//! 2. **Stateful shell**: `Session` owns the single authoritative grid plus
//!    hands, deck, scores and seat order, and changes them only through
//!    explicit transitions built on the pure core.
//!
//! 3. **Closed card type**: `Card` is a sum type (normal or wild) matched
//!    exhaustively wherever attributes are read.
//!
//! ## Modules
//!
//! - `core`: coordinates, seats, deterministic RNG, session configuration
//! - `cards`: cards, attributes, deck construction
//! - `grid`: sparse grid, line discovery, viewport bounds
//! - `rules`: turn validation, scoring, legal positions
//! - `session`: turn order, hands, deck, scores, snapshots

pub mod core;
pub mod cards;
pub mod grid;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Axis, Coord, GameRng, PlayerId, PlayerMap, SessionConfig};

pub use crate::cards::{Attribute, Card, CardId, Color, Deck, Number, Shape, Symbol};

pub use crate::grid::{contiguous_line, Grid, GridBounds, Line};

pub use crate::rules::{
    legal_positions, score_turn, validate_turn, LineScore, Placement, Turn, TurnError, TurnScore,
};

pub use crate::session::{Session, SessionError, TurnAction, TurnRecord};
