//! Grid search engine for the pathfinding visualizer.
//!
//! The crate turns a rectangular tile canvas into a graph and animates four
//! classic searches over it:
//!
//! - **Breadth-first search** ([`Algorithm::Bfs`])
//! - **Depth-first search** ([`Algorithm::Dfs`])
//! - **Dijkstra** with lazy deletion ([`Algorithm::Dijkstra`])
//! - **A\*** with a Manhattan heuristic ([`Algorithm::AStar`])
//!
//! The pieces, leaves first:
//!
//! | Type | Role |
//! |---|---|
//! | [`TileGrid`] | fixed cell array, neighbor lists by position class |
//! | [`ObstacleRegistry`] | border ring and user barriers |
//! | [`AdjacencyIndex`] | read-only unweighted and weighted adjacency |
//! | [`search`] | shared run contract, reports to a [`Visualizer`] |
//! | [`Board`] | owns all of the above plus the start/end markers |
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod adjacency;
mod astar;
mod bfs;
mod board;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod obstacles;
mod search;
mod tilegrid;
mod traits;
mod visualizer;

pub use adjacency::{AdjacencyIndex, UNIFORM_COST};
pub use astar::astar_search;
pub use bfs::bfs_search;
pub use board::{Board, BoardConfig, CellState};
pub use dfs::dfs_search;
pub use dijkstra::dijkstra_search;
pub use distance::manhattan;
pub use error::{BoardError, GridError};
pub use obstacles::ObstacleRegistry;
pub use search::{
    Algorithm, ParseAlgorithmError, RunState, SearchOutcome, SearchReport, SearchStats,
    UNREACHABLE, search, search_report,
};
pub use tilegrid::{Corner, Placement, Side, TileGrid};
pub use traits::{AstarPather, Pather, WeightedPather};
pub use visualizer::{Recorder, VisitEvent, Visualizer};

pub use pathviz_core::{Point, Range};
