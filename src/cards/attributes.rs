//! Attribute projection for line checks.
//!
//! Lines are checked one attribute at a time. Each card is projected onto a
//! `Symbol` for the attribute under test; a wild card projects onto
//! `Symbol::Wild`, which is distinct from every real value. A wild is **not**
//! a joker here: two wilds in a line share a symbol, and one wild among real
//! values counts as one more distinct value.

use serde::{Deserialize, Serialize};

use super::card::{Card, Color, Number, Shape};

/// The three independently checked card attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Color,
    Shape,
    Number,
}

impl Attribute {
    /// In the order lines are checked.
    pub const ALL: [Attribute; 3] = [Attribute::Color, Attribute::Shape, Attribute::Number];
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Attribute::Color => "color",
            Attribute::Shape => "shape",
            Attribute::Number => "number",
        })
    }
}

/// A card's value on one attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    Color(Color),
    Shape(Shape),
    Number(Number),
    /// Placeholder for a wild card, equal only to itself.
    Wild,
}

impl Card {
    /// Project this card onto `attribute`.
    ///
    /// ```
    /// use iota_engine::cards::{Attribute, Card, CardId, Color, Number, Shape, Symbol};
    ///
    /// let card = Card::normal(CardId(0), Color::Red, Shape::Plus, Number::One);
    /// assert_eq!(card.symbol(Attribute::Shape), Symbol::Shape(Shape::Plus));
    /// assert_eq!(Card::wild(CardId(1)).symbol(Attribute::Shape), Symbol::Wild);
    /// ```
    #[must_use]
    pub const fn symbol(&self, attribute: Attribute) -> Symbol {
        match (self, attribute) {
            (Card::Normal { color, .. }, Attribute::Color) => Symbol::Color(*color),
            (Card::Normal { shape, .. }, Attribute::Shape) => Symbol::Shape(*shape),
            (Card::Normal { number, .. }, Attribute::Number) => Symbol::Number(*number),
            (Card::Wild { .. }, _) => Symbol::Wild,
        }
    }
}
