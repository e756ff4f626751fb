//! Turn rejection reasons.

use thiserror::Error;

use crate::cards::Attribute;
use crate::core::Coord;
use crate::grid::Line;

/// Why a proposed turn is illegal.
///
/// Checks run in a fixed order and the first failure is the one reported.
/// The `Display` text is the player-facing reason; the fields identify the
/// offending cell or line for callers that want to highlight it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("play 1 to 4 cards")]
    CardCount { count: usize },

    #[error("cards must be in a single straight line")]
    NotStraight,

    #[error("cell already occupied")]
    Occupied { coord: Coord },

    #[error("duplicate placement")]
    DuplicatePlacement { coord: Coord },

    #[error("must connect to existing cards")]
    Disconnected,

    #[error("line length must be 2 to 4")]
    LineLength { line: Line },

    #[error("line rule failed")]
    LineRule { line: Line, attribute: Attribute },
}

impl TurnError {
    /// Player-facing reason text.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// The attribute that broke a line, for `LineRule` rejections.
    #[must_use]
    pub fn failed_attribute(&self) -> Option<Attribute> {
        match self {
            TurnError::LineRule { attribute, .. } => Some(*attribute),
            _ => None,
        }
    }
}
