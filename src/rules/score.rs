//! Turn scoring.
//!
//! Every line of two or more cards the turn forms or extends is worth the sum
//! of its card numbers (wilds count 0). The base is the sum over those lines.
//! The multiplier doubles for each full four-card line, and doubles once more
//! when the turn placed four cards.

use serde::{Deserialize, Serialize};

use super::turn::{turn_lines, working_grid, Placement, MAX_TURN_CARDS};
use crate::cards::Card;
use crate::grid::{Grid, Line};

/// One scored line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineScore {
    pub line: Line,
    /// Sum of card numbers along the line.
    pub value: u32,
    /// Four cards long.
    pub is_full: bool,
}

/// Breakdown of an accepted turn's points.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnScore {
    pub lines: Vec<LineScore>,
    pub base: u32,
    pub multiplier: u32,
    pub total: u32,
}

impl TurnScore {
    /// Number of full lines among the scored lines.
    #[must_use]
    pub fn full_lines(&self) -> usize {
        self.lines.iter().filter(|l| l.is_full).count()
    }
}

/// Score a turn that `validate_turn` has already accepted on `grid`.
///
/// The result is meaningless for a turn that was never validated.
///
/// ```
/// use iota_engine::cards::{Card, CardId, Color, Number, Shape};
/// use iota_engine::core::Coord;
/// use iota_engine::grid::Grid;
/// use iota_engine::rules::{score_turn, Placement};
///
/// let grid: Grid = [(
///     Coord::new(0, 0),
///     Card::normal(CardId(0), Color::Red, Shape::Circle, Number::Two),
/// )]
/// .into_iter()
/// .collect();
/// let card = Card::normal(CardId(1), Color::Red, Shape::Square, Number::Three);
///
/// let score = score_turn(&grid, &[Placement::new(card, Coord::new(0, 1))]);
/// assert_eq!(score.base, 5);
/// assert_eq!(score.multiplier, 1);
/// assert_eq!(score.total, 5);
/// ```
#[must_use]
pub fn score_turn(grid: &Grid, placements: &[Placement]) -> TurnScore {
    let working = working_grid(grid, placements);

    let lines: Vec<LineScore> = turn_lines(&working, placements)
        .into_iter()
        .map(|line| {
            let value = line.cards(&working).map(Card::points).sum();
            let is_full = line.is_full();
            LineScore {
                line,
                value,
                is_full,
            }
        })
        .collect();

    let base: u32 = lines.iter().map(|l| l.value).sum();
    let mut multiplier = 1u32;
    for _ in lines.iter().filter(|l| l.is_full) {
        multiplier *= 2;
    }
    if placements.len() == MAX_TURN_CARDS {
        multiplier *= 2;
    }

    TurnScore {
        lines,
        base,
        multiplier,
        total: base * multiplier,
    }
}
