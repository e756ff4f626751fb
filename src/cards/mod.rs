//! Cards: the `Card` sum type, its attributes, and deck construction.
//!
//! ## Key Types
//!
//! - `Card`: a normal card (color, shape, number) or a wild
//! - `CardId`: identity of a physical card, unique per deck
//! - `Attribute` / `Symbol`: per-attribute projection used by line checks
//! - `Deck`: ordered draw pile built from a seeded shuffle

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{Attribute, Symbol};
pub use card::{Card, CardId, Color, Number, Shape};
pub use deck::{Deck, NORMAL_CARDS};
