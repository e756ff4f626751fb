//! Line discovery.
//!
//! A line is the maximal run of occupied cells through a coordinate along one
//! axis. Lines are recomputed on demand from the grid and never stored.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cells::Grid;
use crate::cards::Card;
use crate::core::{Axis, Coord};

/// Length of a full line (a "lot").
pub const FULL_LINE_LEN: usize = 4;

/// Ordered coordinates of a contiguous run, lowest first.
///
/// Legal lines hold at most four cells, so the common case never allocates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(SmallVec<[Coord; FULL_LINE_LEN]>);

impl Line {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }

    /// Exactly four cells long.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.len() == FULL_LINE_LEN
    }

    /// Cards along the line, in coordinate order.
    ///
    /// Lines come from `contiguous_line` on the same grid, so every cell is
    /// occupied.
    pub fn cards<'g>(&'g self, grid: &'g Grid) -> impl Iterator<Item = &'g Card> + 'g {
        self.0.iter().filter_map(move |coord| grid.get(*coord))
    }
}

impl From<Vec<Coord>> for Line {
    fn from(coords: Vec<Coord>) -> Self {
        Self(SmallVec::from_vec(coords))
    }
}

/// Maximal contiguous run through `start` along `axis`.
///
/// `start` itself is always included, occupied or not, so the result has at
/// least one cell. Callers pass an occupied `start` (typically after writing
/// the candidate placement into a working grid).
///
/// ```
/// use iota_engine::cards::{Card, CardId};
/// use iota_engine::core::{Axis, Coord};
/// use iota_engine::grid::{contiguous_line, Grid};
///
/// let grid: Grid = (0..3)
///     .map(|col| (Coord::new(0, col), Card::wild(CardId(col as u32))))
///     .collect();
///
/// let row = contiguous_line(&grid, Coord::new(0, 1), Axis::Row);
/// assert_eq!(row.len(), 3);
/// assert_eq!(contiguous_line(&grid, Coord::new(0, 1), Axis::Col).len(), 1);
/// ```
#[must_use]
pub fn contiguous_line(grid: &Grid, start: Coord, axis: Axis) -> Line {
    let mut first = start;
    while let Some(prev) = first.step(axis, -1).filter(|c| grid.is_occupied(*c)) {
        first = prev;
    }

    let mut cells = SmallVec::new();
    cells.push(first);
    let mut next = first.step(axis, 1);
    while let Some(current) = next.filter(|c| *c == start || grid.is_occupied(*c)) {
        cells.push(current);
        next = current.step(axis, 1);
    }

    Line(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn grid_of(coords: &[(i32, i32)]) -> Grid {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(r, c))| (Coord::new(r, c), Card::wild(CardId(i as u32))))
            .collect()
    }

    #[test]
    fn test_isolated_cell() {
        let grid = grid_of(&[(0, 0)]);
        for axis in [Axis::Row, Axis::Col] {
            let line = contiguous_line(&grid, Coord::ORIGIN, axis);
            assert_eq!(line.coords(), &[Coord::ORIGIN]);
        }
    }

    #[test]
    fn test_row_is_ordered_and_maximal() {
        let grid = grid_of(&[(0, 2), (0, 0), (0, 1), (0, -1), (0, 4)]);
        let line = contiguous_line(&grid, Coord::new(0, 1), Axis::Row);

        assert_eq!(
            line.coords(),
            &[Coord::new(0, -1), Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
        assert!(line.is_full());
        assert!(!line.contains(Coord::new(0, 4)));
    }

    #[test]
    fn test_column() {
        let grid = grid_of(&[(-1, 5), (0, 5), (1, 5), (0, 6)]);
        let line = contiguous_line(&grid, Coord::new(1, 5), Axis::Col);
        assert_eq!(line.coords(), &[Coord::new(-1, 5), Coord::new(0, 5), Coord::new(1, 5)]);
    }

    #[test]
    fn test_same_line_from_any_member() {
        let grid = grid_of(&[(3, 0), (3, 1), (3, 2)]);
        let a = contiguous_line(&grid, Coord::new(3, 0), Axis::Row);
        let b = contiguous_line(&grid, Coord::new(3, 2), Axis::Row);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unbounded_growth() {
        let coords: Vec<_> = (0..7).map(|c| (0, c)).collect();
        let grid = grid_of(&coords);
        let line = contiguous_line(&grid, Coord::new(0, 3), Axis::Row);
        assert_eq!(line.len(), 7);
        assert!(!line.is_full());
    }

    #[test]
    fn test_line_ends_at_edge() {
        let grid = grid_of(&[(0, i32::MAX - 1), (0, i32::MAX), (0, i32::MIN)]);
        let line = contiguous_line(&grid, Coord::new(0, i32::MAX), Axis::Row);
        assert_eq!(line.coords(), &[Coord::new(0, i32::MAX - 1), Coord::new(0, i32::MAX)]);

        let line = contiguous_line(&grid, Coord::new(0, i32::MIN), Axis::Row);
        assert_eq!(line.coords(), &[Coord::new(0, i32::MIN)]);
    }

    #[test]
    fn test_cards_follow_coordinates() {
        let grid = grid_of(&[(0, 0), (0, 1)]);
        let line = contiguous_line(&grid, Coord::ORIGIN, Axis::Row);
        let ids: Vec<_> = line.cards(&grid).map(Card::id).collect();
        assert_eq!(ids, vec![CardId(0), CardId(1)]);
    }
}
