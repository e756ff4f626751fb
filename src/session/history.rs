//! Record of completed session transitions.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{Coord, PlayerId};
use crate::rules::Turn;

/// What a seat did with its turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    /// Placed cards on the grid.
    Play { placements: Turn, points: u32 },
    /// Discarded cards and drew replacements.
    Exchange { cards: Vec<CardId> },
    /// Swapped a card from hand for a wild on the grid.
    ReplaceWild { coord: Coord, card: CardId },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn counter at the time of the action.
    pub turn: u32,
    pub player: PlayerId,
    pub action: TurnAction,
}

impl TurnRecord {
    /// Points scored by this action (only plays score).
    #[must_use]
    pub fn points(&self) -> u32 {
        match &self.action {
            TurnAction::Play { points, .. } => *points,
            TurnAction::Exchange { .. } | TurnAction::ReplaceWild { .. } => 0,
        }
    }
}
