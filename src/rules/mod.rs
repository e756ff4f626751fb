//! The rules engine: validation, scoring and legal-cell search.
//!
//! Every function here is pure. The caller owns the grid, passes it by
//! reference, and commits accepted placements itself. The engine never
//! tracks whose turn it is, what is in anyone's hand, or when the game ends;
//! that belongs to `crate::session`.
//!
//! A caller's accept path is always validate, then score, then commit:
//!
//! ```
//! use iota_engine::cards::{Card, CardId, Color, Number, Shape};
//! use iota_engine::core::Coord;
//! use iota_engine::grid::Grid;
//! use iota_engine::rules::{score_turn, validate_turn, Placement};
//!
//! let mut grid = Grid::new();
//! let turn = [Placement::new(
//!     Card::normal(CardId(0), Color::Blue, Shape::Plus, Number::One),
//!     Coord::ORIGIN,
//! )];
//!
//! validate_turn(&grid, &turn).unwrap();
//! let score = score_turn(&grid, &turn);
//! for p in &turn {
//!     grid.insert(p.coord, p.card);
//! }
//! assert_eq!(score.total, 0);
//! assert_eq!(grid.len(), 1);
//! ```

pub mod error;
pub mod feasibility;
pub mod positions;
pub mod score;
pub mod turn;
pub mod validate;

pub use error::TurnError;
pub use feasibility::{failed_attribute, is_feasible, is_valid_line};
pub use positions::legal_positions;
pub use score::{score_turn, LineScore, TurnScore};
pub use turn::{turn_axis, turn_lines, working_grid, Placement, Turn, MAX_TURN_CARDS};
pub use validate::validate_turn;
