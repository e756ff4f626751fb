//! Card values.
//!
//! A card is either **normal** (color, shape and number, each one of four
//! values) or **wild** (no attributes at all). Both carry a `CardId` that is
//! unique within a deck, so two cards with identical faces are still distinct
//! cards.

use serde::{Deserialize, Serialize};

/// Unique identifier of a physical card within one deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shape {
    Triangle,
    Square,
    Circle,
    Plus,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Triangle, Shape::Square, Shape::Circle, Shape::Plus];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Triangle => "triangle",
            Shape::Square => "square",
            Shape::Circle => "circle",
            Shape::Plus => "plus",
        }
    }
}

/// Face value 1 through 4. Also the card's point value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Number {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Number {
    pub const ALL: [Number; 4] = [Number::One, Number::Two, Number::Three, Number::Four];

    #[must_use]
    pub const fn value(self) -> u32 {
        self as u32
    }
}

/// A playing card.
///
/// ```
/// use iota_engine::cards::{Card, CardId, Color, Number, Shape};
///
/// let red2 = Card::normal(CardId(0), Color::Red, Shape::Circle, Number::Two);
/// let wild = Card::wild(CardId(1));
///
/// assert_eq!(red2.points(), 2);
/// assert_eq!(wild.points(), 0);
/// assert!(wild.is_wild());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Normal {
        id: CardId,
        color: Color,
        shape: Shape,
        number: Number,
    },
    Wild {
        id: CardId,
    },
}

impl Card {
    #[must_use]
    pub const fn normal(id: CardId, color: Color, shape: Shape, number: Number) -> Self {
        Card::Normal {
            id,
            color,
            shape,
            number,
        }
    }

    #[must_use]
    pub const fn wild(id: CardId) -> Self {
        Card::Wild { id }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        match self {
            Card::Normal { id, .. } | Card::Wild { id } => *id,
        }
    }

    #[must_use]
    pub const fn is_wild(&self) -> bool {
        matches!(self, Card::Wild { .. })
    }

    /// Points this card adds to every scored line it sits in.
    #[must_use]
    pub const fn points(&self) -> u32 {
        match self {
            Card::Normal { number, .. } => number.value(),
            Card::Wild { .. } => 0,
        }
    }

    /// True when both cards show the same face, ignoring identity.
    #[cfg(test)]
    pub(crate) fn same_face(&self, other: &Card) -> bool {
        match (self, other) {
            (
                Card::Normal {
                    color: c1,
                    shape: s1,
                    number: n1,
                    ..
                },
                Card::Normal {
                    color: c2,
                    shape: s2,
                    number: n2,
                    ..
                },
            ) => c1 == c2 && s1 == s2 && n1 == n2,
            (Card::Wild { .. }, Card::Wild { .. }) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Normal {
                color,
                shape,
                number,
                ..
            } => write!(f, "{} {} {}", color.name(), shape.name(), number.value()),
            Card::Wild { .. } => f.write_str("wild"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_distinguishes_equal_faces() {
        let a = Card::normal(CardId(1), Color::Blue, Shape::Plus, Number::Four);
        let b = Card::normal(CardId(2), Color::Blue, Shape::Plus, Number::Four);

        assert_ne!(a, b);
        assert!(a.same_face(&b));
        assert!(Card::wild(CardId(3)).same_face(&Card::wild(CardId(4))));
        assert!(!a.same_face(&Card::wild(CardId(1))));
    }

    #[test]
    fn test_number_values() {
        let values: Vec<_> = Number::ALL.iter().map(|n| n.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_display() {
        let card = Card::normal(CardId(0), Color::Yellow, Shape::Triangle, Number::One);
        assert_eq!(card.to_string(), "yellow triangle 1");
        assert_eq!(Card::wild(CardId(9)).to_string(), "wild");
        assert_eq!(CardId(9).to_string(), "c9");
    }

    #[test]
    fn test_id() {
        assert_eq!(Card::wild(CardId(7)).id(), CardId(7));
        let card = Card::normal(CardId(8), Color::Red, Shape::Square, Number::Two);
        assert_eq!(card.id().raw(), 8);
    }

    #[test]
    fn test_serialization() {
        let cards = vec![
            Card::normal(CardId(0), Color::Green, Shape::Circle, Number::Three),
            Card::wild(CardId(1)),
        ];
        let json = serde_json::to_string(&cards).unwrap();
        let back: Vec<Card> = serde_json::from_str(&json).unwrap();
        assert_eq!(cards, back);
    }
}
