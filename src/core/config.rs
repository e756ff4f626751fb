//! Session configuration.
//!
//! The rules engine has no knobs: turn size and line length limits are part
//! of the game. What varies between tables is the shell around it (how many
//! players, how big a hand, how many wilds in the deck).
//!
//! ```
//! use iota_engine::core::SessionConfig;
//!
//! let config = SessionConfig::new(3).with_hand_size(5).with_wild_cards(0);
//! assert_eq!(config.player_count, 3);
//! assert_eq!(config.cards_needed(), 1 + 3 * 5);
//! ```

use serde::{Deserialize, Serialize};

/// Most players a session accepts.
pub const MAX_PLAYERS: usize = 8;

/// Table setup for a `Session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of seats (2..=8).
    pub player_count: usize,

    /// Cards dealt to each seat, and the size hands are refilled to.
    pub hand_size: usize,

    /// Wild cards shuffled into the 64-card deck.
    pub wild_cards: usize,

    /// Place the top deck card at the origin before dealing.
    pub opening_card: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            hand_size: 4,
            wild_cards: 2,
            opening_card: true,
        }
    }
}

impl SessionConfig {
    /// Default table for `player_count` seats.
    pub fn new(player_count: usize) -> Self {
        assert!(player_count >= 2, "Must have at least 2 players");
        assert!(player_count <= MAX_PLAYERS, "At most 8 players supported");

        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        assert!(hand_size > 0, "Hand size must be positive");
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_wild_cards(mut self, wild_cards: usize) -> Self {
        self.wild_cards = wild_cards;
        self
    }

    /// Start from an empty grid instead of seeding the origin.
    #[must_use]
    pub fn without_opening_card(mut self) -> Self {
        self.opening_card = false;
        self
    }

    /// Cards consumed from the deck before the first turn.
    #[must_use]
    pub fn cards_needed(&self) -> usize {
        usize::from(self.opening_card) + self.player_count * self.hand_size
    }
}
