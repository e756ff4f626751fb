//! Legal cells for a single held card.
//!
//! Used to highlight where a card may go. Each candidate is run through
//! `validate_turn` as a one-card turn, so the answer agrees with the validator
//! by construction.

use rustc_hash::FxHashSet;

use super::turn::Placement;
use super::validate::validate_turn;
use crate::cards::Card;
use crate::core::Coord;
use crate::grid::Grid;

/// Every cell where `card` alone would be a legal turn.
///
/// Candidates are the empty cells next to an existing card. On an empty grid
/// the only candidate is the origin.
#[must_use]
pub fn legal_positions(grid: &Grid, card: &Card) -> FxHashSet<Coord> {
    if grid.is_empty() {
        return std::iter::once(Coord::ORIGIN).collect();
    }

    grid.frontier()
        .into_iter()
        .filter(|&coord| validate_turn(grid, &[Placement::new(*card, coord)]).is_ok())
        .collect()
}
