//! Occupied extent of a grid, for presentation layers that need a viewport.

use serde::{Deserialize, Serialize};

use super::cells::Grid;
use crate::core::Coord;

/// Half-width of the viewport shown around an empty grid.
pub const EMPTY_VIEW_RADIUS: i32 = 5;

/// Inclusive rectangle of coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min_row: i32,
    pub max_row: i32,
    pub min_col: i32,
    pub max_col: i32,
}

impl GridBounds {
    /// Smallest rectangle containing `coord` alone.
    #[must_use]
    pub const fn around(coord: Coord) -> Self {
        Self {
            min_row: coord.row,
            max_row: coord.row,
            min_col: coord.col,
            max_col: coord.col,
        }
    }

    /// Grow to include `coord`.
    #[must_use]
    pub fn including(self, coord: Coord) -> Self {
        Self {
            min_row: self.min_row.min(coord.row),
            max_row: self.max_row.max(coord.row),
            min_col: self.min_col.min(coord.col),
            max_col: self.max_col.max(coord.col),
        }
    }

    /// Expand every side by `padding` cells, clamped to the `i32` range.
    #[must_use]
    pub const fn padded(self, padding: i32) -> Self {
        Self {
            min_row: self.min_row.saturating_sub(padding),
            max_row: self.max_row.saturating_add(padding),
            min_col: self.min_col.saturating_sub(padding),
            max_col: self.max_col.saturating_add(padding),
        }
    }

    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row >= self.min_row
            && coord.row <= self.max_row
            && coord.col >= self.min_col
            && coord.col <= self.max_col
    }

    /// Viewport for `grid`: the occupied extent plus `padding`, or a fixed
    /// square around the origin when nothing has been played.
    #[must_use]
    pub fn viewport(grid: &Grid, padding: i32) -> Self {
        grid.bounds().map_or(
            Self::around(Coord::ORIGIN).padded(EMPTY_VIEW_RADIUS),
            |bounds| bounds.padded(padding),
        )
    }
}

impl Grid {
    /// Tight bounds of the occupied cells, `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<GridBounds> {
        let mut coords = self.iter().map(|(coord, _)| coord);
        let first = coords.next()?;
        Some(coords.fold(GridBounds::around(first), GridBounds::including))
    }
}
