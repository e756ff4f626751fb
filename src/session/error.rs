use thiserror::Error;

use crate::cards::CardId;
use crate::core::{Coord, PlayerId};
use crate::rules::TurnError;

/// Why a session transition was refused. The session is unchanged.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error("{player} is not seated at this table")]
    UnknownPlayer { player: PlayerId },

    #[error("it is {current}'s turn, not {player}'s")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("card {card} is not in hand")]
    NotInHand { card: CardId },

    #[error("card {card} selected more than once")]
    DuplicateCard { card: CardId },

    #[error("no cards selected")]
    NothingSelected,

    #[error("not enough cards in deck: need {needed}, have {available}")]
    DeckExhausted { needed: usize, available: usize },

    #[error("no wild card at {coord}")]
    NoWildAt { coord: Coord },

    #[error("a wild can only be replaced by a normal card")]
    WildForWild,

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("invalid snapshot: {reason}")]
    InvalidSnapshot { reason: &'static str },
}

impl SessionError {
    /// The rule rejection behind this error, if it was one.
    #[must_use]
    pub fn turn_error(&self) -> Option<&TurnError> {
        match self {
            SessionError::Turn(err) => Some(err),
            _ => None,
        }
    }
}
