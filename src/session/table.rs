//! The stateful shell around the rules engine.
//!
//! A `Session` owns the one authoritative grid and applies every change
//! through explicit transitions (`play`, `exchange`, `replace_wild`). Each
//! transition either succeeds completely or leaves the session untouched.
//! Callers serving several clients should route all transitions through a
//! single owner so no two turns are validated against the same grid.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::SessionError;
use super::history::{TurnAction, TurnRecord};
use crate::cards::{Card, CardId, Deck};
use crate::core::{Axis, Coord, GameRng, PlayerId, PlayerMap, SessionConfig, MAX_PLAYERS};
use crate::grid::{contiguous_line, Grid};
use crate::rules::validate::check_line;
use crate::rules::{legal_positions, score_turn, validate_turn, Placement, Turn, TurnError, TurnScore};

/// A game in progress.
///
/// ```
/// use iota_engine::core::{PlayerId, SessionConfig};
/// use iota_engine::session::Session;
///
/// let session = Session::new(SessionConfig::default(), 42).unwrap();
/// assert_eq!(session.grid().len(), 1); // opening card
/// assert_eq!(session.hand(PlayerId::new(0)).unwrap().len(), 4);
/// assert_eq!(session.deck_len(), 66 - 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    deck: Deck,
    hands: PlayerMap<Vec<Card>>,
    scores: PlayerMap<u32>,
    discards: Vec<Card>,
    current: PlayerId,
    turn_number: u32,
    history: Vec<TurnRecord>,
}

impl Session {
    /// Shuffle a fresh deck from `seed` and set up the table.
    pub fn new(config: SessionConfig, seed: u64) -> Result<Self, SessionError> {
        let mut rng = GameRng::new(seed).for_context("deck");
        let deck = Deck::shuffled(config.wild_cards, &mut rng);
        Self::from_deck(config, deck)
    }

    /// Set up the table from a prepared deck (top card first).
    pub fn from_deck(config: SessionConfig, mut deck: Deck) -> Result<Self, SessionError> {
        let needed = config.cards_needed();
        if deck.len() < needed {
            return Err(SessionError::DeckExhausted {
                needed,
                available: deck.len(),
            });
        }

        let mut grid = Grid::new();
        if config.opening_card {
            if let Some(card) = deck.draw_one() {
                grid.insert(Coord::ORIGIN, card);
            }
        }

        let mut hands = PlayerMap::with_default(config.player_count);
        for player in PlayerId::all(config.player_count) {
            hands[player] = deck.draw(config.hand_size);
        }

        debug!(
            players = config.player_count,
            deck = deck.len(),
            "session started"
        );

        Ok(Self {
            scores: PlayerMap::with_value(config.player_count, 0),
            config,
            grid,
            deck,
            hands,
            discards: Vec::new(),
            current: PlayerId::new(0),
            turn_number: 1,
            history: Vec::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// `None` for a seat not at this table.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&[Card]> {
        self.hands.get(player).map(Vec::as_slice)
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// 1-based count of the turn about to be taken.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Cards given up by exchanges, oldest first.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    // === Queries ===

    /// Validate and score `placements` against the current grid without
    /// committing anything. Does not check hands or seat order.
    pub fn preview(&self, placements: &[Placement]) -> Result<TurnScore, TurnError> {
        validate_turn(&self.grid, placements)?;
        Ok(score_turn(&self.grid, placements))
    }

    /// Cells where `player`'s card `card` could be played alone.
    pub fn legal_positions_for(
        &self,
        player: PlayerId,
        card: CardId,
    ) -> Result<FxHashSet<Coord>, SessionError> {
        let hand = self.hand(player).ok_or(SessionError::UnknownPlayer { player })?;
        let card = hand
            .iter()
            .find(|c| c.id() == card)
            .ok_or(SessionError::NotInHand { card })?;
        Ok(legal_positions(&self.grid, card))
    }

    // === Transitions ===

    /// Play cards from `player`'s hand onto the grid.
    ///
    /// Placements name cards by identity; the faces used for validation are
    /// the ones in the player's hand. On success the points are added to the
    /// player's score, the hand is refilled from the deck as far as it goes,
    /// and play passes to the next seat.
    pub fn play(&mut self, player: PlayerId, placements: &[Placement]) -> Result<TurnScore, SessionError> {
        self.ensure_turn(player)?;

        let ids: Vec<CardId> = placements.iter().map(|p| p.card.id()).collect();
        self.check_selection(player, &ids)?;

        let hand = &self.hands[player];
        let turn: Turn = placements
            .iter()
            .filter_map(|p| {
                hand.iter()
                    .find(|c| c.id() == p.card.id())
                    .map(|card| Placement::new(*card, p.coord))
            })
            .collect();

        if let Err(err) = validate_turn(&self.grid, &turn) {
            debug!(%player, reason = %err, "play rejected");
            return Err(err.into());
        }
        let score = score_turn(&self.grid, &turn);

        for placement in &turn {
            self.grid.insert(placement.coord, placement.card);
        }
        self.remove_from_hand(player, &ids);
        let refill = self.deck.draw(turn.len());
        self.hands[player].extend(refill);
        self.scores[player] += score.total;

        debug!(
            %player,
            cards = turn.len(),
            points = score.total,
            total = self.scores[player],
            "turn played"
        );

        self.finish_turn(
            player,
            TurnAction::Play {
                placements: turn,
                points: score.total,
            },
        );
        Ok(score)
    }

    /// Discard the selected cards and draw as many replacements.
    ///
    /// The deck must hold enough cards to replace the whole selection.
    pub fn exchange(&mut self, player: PlayerId, cards: &[CardId]) -> Result<(), SessionError> {
        self.ensure_turn(player)?;
        if cards.is_empty() {
            return Err(SessionError::NothingSelected);
        }
        self.check_selection(player, cards)?;
        if self.deck.len() < cards.len() {
            return Err(SessionError::DeckExhausted {
                needed: cards.len(),
                available: self.deck.len(),
            });
        }

        let discarded = self.remove_from_hand(player, cards);
        self.discards.extend(discarded);
        let refill = self.deck.draw(cards.len());
        self.hands[player].extend(refill);

        debug!(%player, cards = cards.len(), "cards exchanged");

        self.finish_turn(
            player,
            TurnAction::Exchange {
                cards: cards.to_vec(),
            },
        );
        Ok(())
    }

    /// Swap a normal card from hand for the wild at `coord`.
    ///
    /// Every line through `coord` must still be legal with the replacement in
    /// place. The wild goes back into the player's hand.
    pub fn replace_wild(&mut self, player: PlayerId, coord: Coord, card: CardId) -> Result<(), SessionError> {
        self.ensure_turn(player)?;

        let wild = match self.grid.get(coord) {
            Some(placed) if placed.is_wild() => *placed,
            _ => return Err(SessionError::NoWildAt { coord }),
        };
        let replacement = *self.hands[player]
            .iter()
            .find(|c| c.id() == card)
            .ok_or(SessionError::NotInHand { card })?;
        if replacement.is_wild() {
            return Err(SessionError::WildForWild);
        }

        let mut working = self.grid.clone();
        working.insert(coord, replacement);
        for axis in [Axis::Row, Axis::Col] {
            check_line(&working, contiguous_line(&working, coord, axis))?;
        }

        self.grid = working;
        self.remove_from_hand(player, &[card]);
        self.hands[player].push(wild);

        debug!(%player, %coord, card = %replacement, "wild replaced");

        self.finish_turn(player, TurnAction::ReplaceWild { coord, card });
        Ok(())
    }

    // === Snapshots ===

    /// Encode the whole session.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SessionError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a session produced by `to_bytes`.
    ///
    /// The decoded table must be one `new` could have produced: a supported
    /// player count, one hand and one score per seat, and a seated current
    /// player.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SessionError> {
        let session: Self = bincode::deserialize(bytes)?;
        session.check_seats()?;
        Ok(session)
    }

    // === Internals ===

    fn check_seats(&self) -> Result<(), SessionError> {
        let seats = self.config.player_count;
        let reason = if !(2..=MAX_PLAYERS).contains(&seats) {
            "unsupported player count"
        } else if self.hands.player_count() != seats {
            "hand count does not match player count"
        } else if self.scores.player_count() != seats {
            "score count does not match player count"
        } else if self.current.index() >= seats {
            "current player is not seated"
        } else {
            return Ok(());
        };
        Err(SessionError::InvalidSnapshot { reason })
    }

    fn ensure_turn(&self, player: PlayerId) -> Result<(), SessionError> {
        if self.hands.get(player).is_none() {
            return Err(SessionError::UnknownPlayer { player });
        }
        if player != self.current {
            return Err(SessionError::NotYourTurn {
                player,
                current: self.current,
            });
        }
        Ok(())
    }

    /// Every id must be in `player`'s hand, and none repeated.
    fn check_selection(&self, player: PlayerId, ids: &[CardId]) -> Result<(), SessionError> {
        let hand = &self.hands[player];
        let mut seen = FxHashSet::default();
        for &card in ids {
            if !hand.iter().any(|c| c.id() == card) {
                return Err(SessionError::NotInHand { card });
            }
            if !seen.insert(card) {
                return Err(SessionError::DuplicateCard { card });
            }
        }
        Ok(())
    }

    fn remove_from_hand(&mut self, player: PlayerId, ids: &[CardId]) -> Vec<Card> {
        let hand = &mut self.hands[player];
        let (removed, kept): (Vec<Card>, Vec<Card>) =
            hand.drain(..).partition(|c| ids.contains(&c.id()));
        *hand = kept;
        removed
    }

    fn finish_turn(&mut self, player: PlayerId, action: TurnAction) {
        self.history.push(TurnRecord {
            turn: self.turn_number,
            player,
            action,
        });
        self.turn_number += 1;
        self.current = self.current.next(self.config.player_count);
    }
}
