//! Per-attribute line feasibility.
//!
//! A line is feasible on an attribute when its cards are either all the same
//! or all different on that attribute. Wild cards take part as their own
//! symbol (see `Symbol::Wild`), so they never rescue a line whose real cards
//! collide.

use rustc_hash::FxHashSet;
use std::hash::Hash;

use crate::cards::{Attribute, Card};
use crate::grid::FULL_LINE_LEN;

/// All values equal, or all pairwise distinct. Order does not matter.
///
/// ```
/// use iota_engine::rules::is_feasible;
///
/// assert!(is_feasible([1, 1, 1]));
/// assert!(is_feasible([3, 1, 2]));
/// assert!(!is_feasible([1, 1, 2]));
/// ```
pub fn is_feasible<T: Eq + Hash>(values: impl IntoIterator<Item = T>) -> bool {
    let mut count = 0;
    let distinct: FxHashSet<T> = values.into_iter().inspect(|_| count += 1).collect();
    distinct.len() == 1 || distinct.len() == count
}

/// First attribute (color, shape, number) on which `cards` are infeasible.
#[must_use]
pub fn failed_attribute(cards: &[Card]) -> Option<Attribute> {
    Attribute::ALL
        .into_iter()
        .find(|&attribute| !is_feasible(cards.iter().map(|card| card.symbol(attribute))))
}

/// A legal line: two to four cards, feasible on every attribute.
#[must_use]
pub fn is_valid_line(cards: &[Card]) -> bool {
    (2..=FULL_LINE_LEN).contains(&cards.len()) && failed_attribute(cards).is_none()
}
