//! Errors raised while building a grid or configuring a board.
//!
//! An unreachable target is not an error: it is reported as
//! [`SearchOutcome::Unreachable`](crate::SearchOutcome::Unreachable).

use std::fmt;

use pathviz_core::Point;

/// Errors that can occur when partitioning a canvas into tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A dimension or the tile size is non-positive, or the tile does not
    /// fit in the canvas even once.
    InvalidDimensions {
        width: i32,
        height: i32,
        tile_size: i32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                width,
                height,
                tile_size,
            } => write!(
                f,
                "grid: cannot tile a {width}x{height} canvas with tiles of size {tile_size}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Errors that reject a board edit or a run before any search starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The underlying grid could not be built.
    Grid(GridError),
    /// The cell lies outside the grid.
    OutOfBounds(Point),
    /// A marker was placed on a border or barrier cell.
    Blocked(Point),
    /// Start and end would share a cell.
    SameStartEnd(Point),
    /// A barrier was painted over the start or end marker.
    OccupiedByMarker(Point),
    /// No start marker has been placed.
    MissingStart,
    /// No end marker has been placed.
    MissingEnd,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "board: {e}"),
            Self::OutOfBounds(p) => write!(f, "board: cell {p} is outside the grid"),
            Self::Blocked(p) => write!(f, "board: cell {p} is blocked"),
            Self::SameStartEnd(p) => write!(f, "board: start and end both at {p}"),
            Self::OccupiedByMarker(p) => {
                write!(f, "board: cell {p} holds the start or end marker")
            }
            Self::MissingStart => f.write_str("board: no start cell placed"),
            Self::MissingEnd => f.write_str("board: no end cell placed"),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for BoardError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
