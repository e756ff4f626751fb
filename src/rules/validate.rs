//! Turn validation.
//!
//! Checks run in order and stop at the first failure:
//!
//! 1. Between one and four placements.
//! 2. All placements share a row, or all share a column.
//! 3. No placement lands on an occupied cell or repeats another's cell.
//! 4. Unless the grid is empty, some placement touches an existing card.
//! 5. Every line of two or more cards the turn forms or extends is at most
//!    four long and feasible on color, shape and number.
//!
//! The caller's grid is only read. Line checks run against a working copy
//! with the placements applied.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::trace;

use super::error::TurnError;
use super::feasibility::failed_attribute;
use super::turn::{turn_lines, working_grid, Placement, MAX_TURN_CARDS};
use crate::cards::Card;
use crate::grid::{Grid, Line, FULL_LINE_LEN};

/// Decide whether `placements` is a legal turn on `grid`.
///
/// ```
/// use iota_engine::cards::{Card, CardId, Color, Number, Shape};
/// use iota_engine::core::Coord;
/// use iota_engine::grid::Grid;
/// use iota_engine::rules::{validate_turn, Placement, TurnError};
///
/// let grid: Grid = [(
///     Coord::new(0, 0),
///     Card::normal(CardId(0), Color::Red, Shape::Circle, Number::Two),
/// )]
/// .into_iter()
/// .collect();
///
/// let beside = Card::normal(CardId(1), Color::Red, Shape::Square, Number::Three);
/// assert!(validate_turn(&grid, &[Placement::new(beside, Coord::new(0, 1))]).is_ok());
///
/// let far = Card::normal(CardId(2), Color::Blue, Shape::Plus, Number::One);
/// assert_eq!(
///     validate_turn(&grid, &[Placement::new(far, Coord::new(5, 5))]),
///     Err(TurnError::Disconnected)
/// );
/// ```
pub fn validate_turn(grid: &Grid, placements: &[Placement]) -> Result<(), TurnError> {
    let result = check_turn(grid, placements);
    if let Err(err) = &result {
        trace!(placements = placements.len(), reason = %err, "turn rejected");
    }
    result
}

fn check_turn(grid: &Grid, placements: &[Placement]) -> Result<(), TurnError> {
    if placements.is_empty() || placements.len() > MAX_TURN_CARDS {
        return Err(TurnError::CardCount {
            count: placements.len(),
        });
    }

    let first = placements[0].coord;
    let same_row = placements.iter().all(|p| p.coord.row == first.row);
    let same_col = placements.iter().all(|p| p.coord.col == first.col);
    if !same_row && !same_col {
        return Err(TurnError::NotStraight);
    }

    let mut targeted = FxHashSet::default();
    for placement in placements {
        if grid.is_occupied(placement.coord) {
            return Err(TurnError::Occupied {
                coord: placement.coord,
            });
        }
        if !targeted.insert(placement.coord) {
            return Err(TurnError::DuplicatePlacement {
                coord: placement.coord,
            });
        }
    }

    if !grid.is_empty() && !placements.iter().any(|p| grid.touches_occupied(p.coord)) {
        return Err(TurnError::Disconnected);
    }

    let working = working_grid(grid, placements);
    for line in turn_lines(&working, placements) {
        check_line(&working, line)?;
    }

    Ok(())
}

/// Check one line of `grid` against the length limit and attribute rule.
///
/// Single cells impose no constraint and always pass.
pub(crate) fn check_line(grid: &Grid, line: Line) -> Result<(), TurnError> {
    if line.len() < 2 {
        return Ok(());
    }
    if line.len() > FULL_LINE_LEN {
        return Err(TurnError::LineLength { line });
    }

    let cards: SmallVec<[Card; FULL_LINE_LEN]> = line.cards(grid).copied().collect();
    match failed_attribute(&cards) {
        Some(attribute) => Err(TurnError::LineRule { line, attribute }),
        None => Ok(()),
    }
}
