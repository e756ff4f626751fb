//! Sparse grid model and line discovery.
//!
//! - `Grid`: unbounded coordinate → card map with O(1) clones
//! - `Line` / `contiguous_line`: maximal runs of occupied cells
//! - `GridBounds`: occupied extent and padded viewports

pub mod bounds;
pub mod cells;
pub mod line;

pub use bounds::GridBounds;
pub use cells::Grid;
pub use line::{contiguous_line, Line, FULL_LINE_LEN};
