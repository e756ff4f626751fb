//! Session shell: seats, hands, deck, scores and turn order.
//!
//! Layered on the pure rules engine. The session decides whose turn it is
//! and what each seat holds; legality and points always come from
//! `crate::rules`.

pub mod error;
pub mod history;
pub mod table;

pub use error::SessionError;
pub use history::{TurnAction, TurnRecord};
pub use table::Session;
