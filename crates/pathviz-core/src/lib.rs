//! Geometry primitives for the pathfinding visualizer.
//!
//! Cells on the tile grid are addressed by [`Point`] in tile units
//! (`x` = column, `y` = row). [`Range`] describes the rectangle of cells a
//! grid covers.

pub mod geom;

pub use geom::{ParsePointError, Point, Range, RangeIter};
