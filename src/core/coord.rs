//! Grid coordinates and axes.
//!
//! The play surface is unbounded, so coordinates are signed and may drift
//! arbitrarily far from the origin over the course of a game.
//!
//! ## Orientation
//!
//! `row` is the first component, `col` the second. A **row-wise** line keeps
//! `row` fixed and varies `col`; a **column-wise** line keeps `col` fixed and
//! varies `row`.
//!
//! ```
//! use iota_engine::core::{Axis, Coord};
//!
//! let c = Coord::new(0, 0);
//! assert_eq!(c.step(Axis::Row, 1), Some(Coord::new(0, 1)));
//! assert_eq!(c.step(Axis::Col, -1), Some(Coord::new(-1, 0)));
//!
//! // The play surface ends at the edge of `i32`.
//! assert_eq!(Coord::new(0, i32::MAX).step(Axis::Row, 1), None);
//! ```

use serde::{Deserialize, Serialize};

/// A cell address on the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// The designated first-move cell.
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move `delta` cells along `axis`, or `None` past the edge of `i32`.
    #[must_use]
    pub const fn step(self, axis: Axis, delta: i32) -> Option<Self> {
        match axis {
            Axis::Row => match self.col.checked_add(delta) {
                Some(col) => Some(Self::new(self.row, col)),
                None => None,
            },
            Axis::Col => match self.row.checked_add(delta) {
                Some(row) => Some(Self::new(row, self.col)),
                None => None,
            },
        }
    }

    /// Orthogonal neighbors (up, down, left, right). Cells past the edge of
    /// `i32` do not exist and are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        [(Axis::Col, -1), (Axis::Col, 1), (Axis::Row, -1), (Axis::Row, 1)]
            .into_iter()
            .filter_map(move |(axis, delta)| self.step(axis, delta))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction of a line on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Fixed row, varying column.
    Row,
    /// Fixed column, varying row.
    Col,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Axis::Row => Axis::Col,
            Axis::Col => Axis::Row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let c = Coord::new(2, -3);
        assert_eq!(c.step(Axis::Row, 1), Some(Coord::new(2, -2)));
        assert_eq!(c.step(Axis::Row, -1), Some(Coord::new(2, -4)));
        assert_eq!(c.step(Axis::Col, 1), Some(Coord::new(3, -3)));
        assert_eq!(c.step(Axis::Col, -1), Some(Coord::new(1, -3)));
    }

    #[test]
    fn test_step_stops_at_edge() {
        assert_eq!(Coord::new(0, i32::MAX).step(Axis::Row, 1), None);
        assert_eq!(Coord::new(i32::MIN, 0).step(Axis::Col, -1), None);
        assert_eq!(
            Coord::new(0, i32::MAX).step(Axis::Row, -1),
            Some(Coord::new(0, i32::MAX - 1))
        );
    }

    #[test]
    fn test_corner_has_two_neighbors() {
        let n: Vec<_> = Coord::new(i32::MIN, i32::MAX).neighbors().collect();
        assert_eq!(n, vec![Coord::new(i32::MIN + 1, i32::MAX), Coord::new(i32::MIN, i32::MAX - 1)]);
    }

    #[test]
    fn test_neighbors() {
        let n: Vec<_> = Coord::ORIGIN.neighbors().collect();
        assert_eq!(n.len(), 4);
        assert!(n.contains(&Coord::new(-1, 0)));
        assert!(n.contains(&Coord::new(1, 0)));
        assert!(n.contains(&Coord::new(0, -1)));
        assert!(n.contains(&Coord::new(0, 1)));
        assert!(!n.contains(&Coord::ORIGIN));
    }

    #[test]
    fn test_perpendicular() {
        assert_eq!(Axis::Row.perpendicular(), Axis::Col);
        assert_eq!(Axis::Col.perpendicular(), Axis::Row);
    }

    #[test]
    fn test_display_and_from() {
        let c: Coord = (4, -1).into();
        assert_eq!(format!("{}", c), "(4, -1)");
    }

    #[test]
    fn test_serialization() {
        let c = Coord::new(-7, 12);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
