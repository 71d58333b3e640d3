//! The read-only graph handle every search runs on.

use std::collections::HashMap;

use pathviz_core::Point;

use crate::distance::manhattan;
use crate::tilegrid::TileGrid;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Cost of every edge built from a [`TileGrid`].
pub const UNIFORM_COST: i32 = 1;

/// Cell-keyed adjacency derived once from a [`TileGrid`].
///
/// Holds both an ordered unweighted neighbor list and a weighted map per
/// cell. Every weight is [`UNIFORM_COST`]; the weighted map is kept so that
/// Dijkstra and A* read costs the same way they would on a weighted graph.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    unweighted: HashMap<Point, Vec<Point>>,
    weighted: HashMap<Point, HashMap<Point, i32>>,
    edges: usize,
}

impl AdjacencyIndex {
    /// Build the index from the grid's neighbor lists.
    pub fn build(grid: &TileGrid) -> Self {
        let mut unweighted = HashMap::with_capacity(grid.len());
        let mut weighted: HashMap<Point, HashMap<Point, i32>> =
            HashMap::with_capacity(grid.len());
        let mut degree_sum = 0;
        for p in grid.cells() {
            let ns = grid.neighbors(p);
            degree_sum += ns.len();
            weighted.insert(p, ns.iter().map(|&n| (n, UNIFORM_COST)).collect());
            unweighted.insert(p, ns.to_vec());
        }
        log::debug!(
            "adjacency index built: {} cells, {} edges",
            unweighted.len(),
            degree_sum / 2
        );
        Self {
            unweighted,
            weighted,
            edges: degree_sum / 2,
        }
    }

    /// Ordered neighbors of `p`. Empty for cells not in the index.
    #[inline]
    pub fn neighbors(&self, p: Point) -> &[Point] {
        self.unweighted.get(&p).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weighted neighbors of `p`.
    #[inline]
    pub fn weighted(&self, p: Point) -> Option<&HashMap<Point, i32>> {
        self.weighted.get(&p)
    }

    /// Weight of the edge `from -> to`, if the cells are adjacent.
    #[inline]
    pub fn weight(&self, from: Point, to: Point) -> Option<i32> {
        self.weighted.get(&from)?.get(&to).copied()
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.unweighted.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.unweighted.is_empty()
    }
}

impl Pather for AdjacencyIndex {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend_from_slice(AdjacencyIndex::neighbors(self, p));
    }
}

impl WeightedPather for AdjacencyIndex {
    fn cost(&self, from: Point, to: Point) -> i32 {
        // searches only ask about pairs they got from `neighbors`
        self.weight(from, to).unwrap_or(UNIFORM_COST)
    }
}

impl AstarPather for AdjacencyIndex {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
