//! Placements and the lines a turn touches.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{Axis, Coord};
use crate::grid::{contiguous_line, Grid, Line};

/// Most cards a single turn may place.
pub const MAX_TURN_CARDS: usize = 4;

/// One card proposed for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub card: Card,
    pub coord: Coord,
}

impl Placement {
    #[must_use]
    pub const fn new(card: Card, coord: Coord) -> Self {
        Self { card, coord }
    }
}

/// An ordered batch of placements submitted together.
pub type Turn = SmallVec<[Placement; MAX_TURN_CARDS]>;

/// The axis the turn was played along.
///
/// Row-wise when every placement shares a row (including a single
/// placement), column-wise otherwise.
#[must_use]
pub fn turn_axis(placements: &[Placement]) -> Axis {
    match placements.split_first() {
        Some((first, rest)) if rest.iter().any(|p| p.coord.row != first.coord.row) => Axis::Col,
        _ => Axis::Row,
    }
}

/// Grid with the turn's placements written on top of `grid`.
#[must_use]
pub fn working_grid(grid: &Grid, placements: &[Placement]) -> Grid {
    grid.with_placements(placements.iter().map(|p| (p.coord, &p.card)))
}

/// Distinct lines of two or more cells the turn forms or extends.
///
/// `working` must already contain the placements. For each placement, in
/// order, the line along the turn's axis comes first, then the cross line.
/// Lines shared by several placements are reported once.
#[must_use]
pub fn turn_lines(working: &Grid, placements: &[Placement]) -> Vec<Line> {
    let main = turn_axis(placements);
    let mut lines: Vec<Line> = Vec::new();

    for placement in placements {
        for axis in [main, main.perpendicular()] {
            let line = contiguous_line(working, placement.coord, axis);
            if line.len() >= 2 && !lines.contains(&line) {
                lines.push(line);
            }
        }
    }

    lines
}
