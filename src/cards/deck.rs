//! Deck construction and drawing.
//!
//! A standard deck is every combination of color, shape and number (64
//! cards) plus a configurable number of wilds. Card IDs are assigned in
//! construction order, before shuffling, so they are unique per deck.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, Color, Number, Shape};
use crate::core::GameRng;

/// Normal cards in a standard deck.
pub const NORMAL_CARDS: usize = Color::ALL.len() * Shape::ALL.len() * Number::ALL.len();

/// An ordered draw pile. The top of the deck is the front.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled standard deck: normals ordered color, shape, number, then wilds.
    #[must_use]
    pub fn standard(wild_cards: usize) -> Self {
        let mut cards = Vec::with_capacity(NORMAL_CARDS + wild_cards);
        let mut next_id = 0u32;

        for color in Color::ALL {
            for shape in Shape::ALL {
                for number in Number::ALL {
                    cards.push(Card::normal(CardId(next_id), color, shape, number));
                    next_id += 1;
                }
            }
        }
        for _ in 0..wild_cards {
            cards.push(Card::wild(CardId(next_id)));
            next_id += 1;
        }

        Self { cards }
    }

    /// Standard deck shuffled by `rng`.
    #[must_use]
    pub fn shuffled(wild_cards: usize, rng: &mut GameRng) -> Self {
        let mut deck = Self::standard(wild_cards);
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Deck with exactly these cards, top first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Take the top card.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.draw(1).pop()
    }

    /// Take up to `count` cards from the top. Returns fewer when the deck runs out.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_composition() {
        let deck = Deck::standard(2);
        assert_eq!(deck.len(), 66);
        assert_eq!(deck.cards().iter().filter(|c| c.is_wild()).count(), 2);

        let ids: FxHashSet<_> = deck.cards().iter().map(Card::id).collect();
        assert_eq!(ids.len(), 66);

        // Every normal face appears exactly once.
        let normals: Vec<_> = deck.cards().iter().filter(|c| !c.is_wild()).collect();
        for (i, a) in normals.iter().enumerate() {
            assert!(normals[i + 1..].iter().all(|b| !a.same_face(b)));
        }
    }

    #[test]
    fn test_standard_order() {
        let deck = Deck::standard(0);
        assert_eq!(
            deck.cards()[0],
            Card::normal(CardId(0), Color::Red, Shape::Triangle, Number::One)
        );
        assert_eq!(
            deck.cards()[63],
            Card::normal(CardId(63), Color::Yellow, Shape::Plus, Number::Four)
        );
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = Deck::shuffled(2, &mut GameRng::new(5));
        let b = Deck::shuffled(2, &mut GameRng::new(5));
        let c = Deck::shuffled(2, &mut GameRng::new(6));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Deck::standard(2));
    }

    #[test]
    fn test_draw_takes_from_top() {
        let mut deck = Deck::standard(0);
        let top = deck.cards()[0];

        assert_eq!(deck.draw_one(), Some(top));
        let hand = deck.draw(4);
        assert_eq!(hand.len(), 4);
        assert_eq!(hand[0].id(), CardId(1));
        assert_eq!(deck.len(), 59);
    }

    #[test]
    fn test_draw_short_deck() {
        let mut deck = Deck::from_cards(vec![Card::wild(CardId(0)), Card::wild(CardId(1))]);
        assert_eq!(deck.draw(4).len(), 2);
        assert!(deck.is_empty());
        assert_eq!(deck.draw_one(), None);
        assert!(deck.draw(3).is_empty());
    }

    #[test]
    fn test_draw_one_keeps_pile_order() {
        let mut deck = Deck::standard(2);
        let expected: Vec<_> = deck.cards().iter().map(Card::id).collect();

        let drawn: Vec<_> = std::iter::from_fn(|| deck.draw_one()).map(|c| c.id()).collect();
        assert_eq!(drawn, expected);
        assert!(deck.is_empty());
    }
}
