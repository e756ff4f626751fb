//! Sparse, unbounded card grid.
//!
//! Uses `im` persistent maps so that cloning a grid is O(1). The validator and
//! scorer both build a working copy with the proposed placements applied;
//! with a persistent map that copy shares structure with the caller's grid
//! instead of duplicating it.

use im::HashMap as ImHashMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::Coord;

/// Mapping from coordinate to the card occupying it.
///
/// No cell exists until written. Normal play only ever adds cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: ImHashMap<Coord, Card>,
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Card> {
        self.cells.get(&coord)
    }

    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Write a card, returning whatever occupied the cell before.
    pub fn insert(&mut self, coord: Coord, card: Card) -> Option<Card> {
        self.cells.insert(coord, card)
    }

    /// Copy of this grid with `placements` written on top.
    #[must_use]
    pub fn with_placements<'a>(&self, placements: impl IntoIterator<Item = (Coord, &'a Card)>) -> Self {
        let mut working = self.clone();
        for (coord, card) in placements {
            working.insert(coord, *card);
        }
        working
    }

    /// True if any orthogonal neighbor of `coord` is occupied.
    #[must_use]
    pub fn touches_occupied(&self, coord: Coord) -> bool {
        coord.neighbors().any(|n| self.is_occupied(n))
    }

    /// Empty cells orthogonally adjacent to at least one card.
    #[must_use]
    pub fn frontier(&self) -> FxHashSet<Coord> {
        self.cells
            .keys()
            .flat_map(|coord| coord.neighbors())
            .filter(|n| !self.is_occupied(*n))
            .collect()
    }

    /// Occupied cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Card)> {
        self.cells.iter().map(|(coord, card)| (*coord, card))
    }

    /// Cell holding the card with this identity, if it is on the grid.
    #[must_use]
    pub fn find(&self, card: &Card) -> Option<Coord> {
        self.iter()
            .find(|(_, placed)| placed.id() == card.id())
            .map(|(coord, _)| coord)
    }
}

impl FromIterator<(Coord, Card)> for Grid {
    fn from_iter<I: IntoIterator<Item = (Coord, Card)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
