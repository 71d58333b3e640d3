//! The contract shared by every search: outcome, run state, per-run state,
//! path reconstruction and the priority frontier used by Dijkstra and A*.

use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use pathviz_core::Point;

use crate::astar::astar_search;
use crate::bfs::bfs_search;
use crate::dfs::dfs_search;
use crate::dijkstra::dijkstra_search;
use crate::obstacles::ObstacleRegistry;
use crate::traits::AstarPather;
use crate::visualizer::Visualizer;

/// Sentinel distance meaning "not reached yet" in score maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The four interchangeable traversal strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Breadth-first search: FIFO frontier, shortest by edge count.
    Bfs,
    /// Depth-first search: LIFO frontier, finds some path.
    Dfs,
    /// Dijkstra: min-distance frontier with lazy deletion.
    Dijkstra,
    /// A*: min `g + h` frontier with a Manhattan heuristic.
    AStar,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::AStar];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }

    /// Whether the algorithm always returns a shortest path.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned by [`Algorithm::from_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d}, expected bfs, dfs, dijkstra or astar",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::Bfs),
            "dfs" | "depth-first" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Lifecycle of one run: `Ready -> Running -> {Found | Unreachable}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    Ready,
    Running,
    Found,
    Unreachable,
}

impl RunState {
    /// Whether the run has ended.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::Unreachable)
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The end cell was reached. `path` holds the cells strictly between
    /// start and end, start side first.
    Found { path: Vec<Point> },
    /// The frontier emptied before the end cell was reached.
    Unreachable,
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The interior path, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found { path } => Some(path),
            Self::Unreachable => None,
        }
    }

    /// The terminal run state this outcome corresponds to.
    pub fn state(&self) -> RunState {
        match self {
            Self::Found { .. } => RunState::Found,
            Self::Unreachable => RunState::Unreachable,
        }
    }
}

/// Counters gathered while a run reports to its sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells reported through `on_visit`.
    pub visited: usize,
    /// Frontier pushes, repeats included.
    pub pushes: usize,
    /// Interior path length, `None` when unreachable.
    pub path_len: Option<usize>,
}

/// An outcome together with the algorithm that produced it and its stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub algorithm: Algorithm,
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Run `algorithm` from `start` to `end` over `graph`, skipping cells that
/// `obstacles` reports as blocked.
///
/// Progress goes to `sink`. The start cell is expanded even if blocked; a
/// blocked end cell is never entered, so the run ends
/// [`Unreachable`](SearchOutcome::Unreachable).
pub fn search<P, V>(
    algorithm: Algorithm,
    graph: &P,
    obstacles: &ObstacleRegistry,
    start: Point,
    end: Point,
    sink: &mut V,
) -> SearchOutcome
where
    P: AstarPather + ?Sized,
    V: Visualizer + ?Sized,
{
    match algorithm {
        Algorithm::Bfs => bfs_search(graph, obstacles, start, end, sink),
        Algorithm::Dfs => dfs_search(graph, obstacles, start, end, sink),
        Algorithm::Dijkstra => dijkstra_search(graph, obstacles, start, end, sink),
        Algorithm::AStar => astar_search(graph, obstacles, start, end, sink),
    }
}

/// Like [`search`], also counting visits and frontier pushes.
pub fn search_report<P, V>(
    algorithm: Algorithm,
    graph: &P,
    obstacles: &ObstacleRegistry,
    start: Point,
    end: Point,
    sink: &mut V,
) -> SearchReport
where
    P: AstarPather + ?Sized,
    V: Visualizer + ?Sized,
{
    let mut tally = Tally {
        sink,
        stats: SearchStats::default(),
    };
    let outcome = search(algorithm, graph, obstacles, start, end, &mut tally);
    let mut stats = tally.stats;
    stats.path_len = outcome.path().map(<[Point]>::len);
    SearchReport {
        algorithm,
        outcome,
        stats,
    }
}

/// Counts callbacks on their way to the real sink.
struct Tally<'a, V: ?Sized> {
    sink: &'a mut V,
    stats: SearchStats,
}

impl<V: Visualizer + ?Sized> Visualizer for Tally<'_, V> {
    fn on_visit(&mut self, cell: Point) {
        self.stats.visited += 1;
        self.sink.on_visit(cell);
    }

    fn on_frontier(&mut self, cell: Point) {
        self.stats.pushes += 1;
        self.sink.on_frontier(cell);
    }

    fn on_path_step(&mut self, cell: Point) {
        self.sink.on_path_step(cell);
    }

    fn on_unreachable(&mut self) {
        self.sink.on_unreachable();
    }
}

// ---------------------------------------------------------------------------
// Per-run state
// ---------------------------------------------------------------------------

/// State owned by exactly one run; dropped when the run ends.
pub(crate) struct SearchState {
    algorithm: Algorithm,
    start: Point,
    end: Point,
    state: RunState,
    /// Visited (BFS, DFS) or closed (Dijkstra) cells. Unused by A*.
    pub(crate) visited: HashSet<Point>,
    /// Predecessor of each reached cell, for path reconstruction only.
    pub(crate) came_from: HashMap<Point, Point>,
}

impl SearchState {
    /// Create the state for a new run and move it to `Running`.
    pub(crate) fn begin(algorithm: Algorithm, start: Point, end: Point) -> Self {
        let mut st = Self {
            algorithm,
            start,
            end,
            state: RunState::Ready,
            visited: HashSet::new(),
            came_from: HashMap::new(),
        };
        log::debug!("{algorithm}: searching {start} -> {end}");
        st.transition(RunState::Running);
        st
    }

    fn transition(&mut self, next: RunState) {
        debug_assert!(
            !self.state.is_terminal(),
            "run already ended in {:?}",
            self.state
        );
        self.state = next;
    }

    #[inline]
    pub(crate) fn is_goal(&self, p: Point) -> bool {
        p == self.end
    }

    #[inline]
    fn is_endpoint(&self, p: Point) -> bool {
        p == self.start || p == self.end
    }

    /// Report an expanded cell, unless it is the start or end.
    #[inline]
    pub(crate) fn visit<V: Visualizer + ?Sized>(&self, p: Point, sink: &mut V) {
        if !self.is_endpoint(p) {
            sink.on_visit(p);
        }
    }

    /// Report a frontier push, unless it is the start or end.
    #[inline]
    pub(crate) fn pushed<V: Visualizer + ?Sized>(&self, p: Point, sink: &mut V) {
        if !self.is_endpoint(p) {
            sink.on_frontier(p);
        }
    }

    /// Finish a run that reached the end cell.
    pub(crate) fn found<V: Visualizer + ?Sized>(mut self, sink: &mut V) -> SearchOutcome {
        self.transition(RunState::Found);
        let path = self.reconstruct();
        log::debug!(
            "{}: reached {} with {} interior cells",
            self.algorithm,
            self.end,
            path.len()
        );
        for &p in &path {
            sink.on_path_step(p);
        }
        SearchOutcome::Found { path }
    }

    /// Finish a run whose frontier emptied.
    pub(crate) fn exhausted<V: Visualizer + ?Sized>(mut self, sink: &mut V) -> SearchOutcome {
        self.transition(RunState::Unreachable);
        log::info!("{}: no path from {} to {}", self.algorithm, self.start, self.end);
        sink.on_unreachable();
        SearchOutcome::Unreachable
    }

    /// Walk predecessors back from the end cell. Start and end are excluded.
    fn reconstruct(&self) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = self.end;
        while let Some(&prev) = self.came_from.get(&cur) {
            if prev == self.start {
                break;
            }
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        path
    }
}

// ---------------------------------------------------------------------------
// Priority frontier
// ---------------------------------------------------------------------------

/// Heap entry ordered by priority, then by insertion order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) pos: Point,
    pub(crate) priority: i32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest priority, and
        // among equal priorities the oldest entry.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with FIFO tie-breaking.
#[derive(Debug, Default)]
pub(crate) struct OpenList {
    heap: BinaryHeap<NodeRef>,
    seq: u64,
}

impl OpenList {
    pub(crate) fn push(&mut self, pos: Point, priority: i32) {
        self.heap.push(NodeRef {
            pos,
            priority,
            seq: self.seq,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<NodeRef> {
        self.heap.pop()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;
    use crate::adjacency::AdjacencyIndex;
    use crate::tilegrid::TileGrid;

    /// An obstacle-free `cols` x `rows` grid with tile size 1 and no border.
    pub(crate) fn open(cols: i32, rows: i32) -> (AdjacencyIndex, ObstacleRegistry) {
        let grid = TileGrid::with_cells(cols, rows).unwrap();
        (AdjacencyIndex::build(&grid), ObstacleRegistry::new())
    }

    /// Parse a small map: `#` barrier, anything else open.
    pub(crate) fn map(rows: &[&str]) -> (AdjacencyIndex, ObstacleRegistry) {
        let (idx, mut obs) = open(rows[0].len() as i32, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    obs.add_barrier(Point::new(x as i32, y as i32));
                }
            }
        }
        (idx, obs)
    }

    /// Check that `path` is a chain of adjacent open cells from `start` to
    /// `end` (both excluded).
    pub(crate) fn assert_valid_path(
        path: &[Point],
        obs: &ObstacleRegistry,
        start: Point,
        end: Point,
    ) {
        let mut prev = start;
        for &p in path.iter().chain(std::iter::once(&end)) {
            let d = (p.x - prev.x).abs() + (p.y - prev.y).abs();
            assert_eq!(d, 1, "{prev} -> {p} is not a single step");
            assert!(p == end || !obs.is_blocked(p), "path crosses obstacle {p}");
            prev = p;
        }
        assert!(!path.contains(&start));
        assert!(!path.contains(&end));
    }
}
