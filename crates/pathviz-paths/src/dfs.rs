use pathviz_core::Point;

use crate::obstacles::ObstacleRegistry;
use crate::search::{Algorithm, SearchOutcome, SearchState};
use crate::traits::Pather;
use crate::visualizer::Visualizer;

/// Depth-first search from `start` to `end`.
///
/// Cells are marked visited when popped, not when pushed, so a cell may sit
/// on the stack several times. Every push overwrites the cell's predecessor
/// with the cell being expanded; since the latest push is the one popped
/// first, the predecessor kept is the one that led to the cell's expansion.
/// The path found is *a* path, not necessarily a shortest one.
pub fn dfs_search<P, V>(
    pather: &P,
    obstacles: &ObstacleRegistry,
    start: Point,
    end: Point,
    sink: &mut V,
) -> SearchOutcome
where
    P: Pather + ?Sized,
    V: Visualizer + ?Sized,
{
    let mut st = SearchState::begin(Algorithm::Dfs, start, end);
    let mut stack = vec![start];

    let mut nbuf = Vec::with_capacity(4);

    while let Some(cur) = stack.pop() {
        if !st.visited.insert(cur) {
            continue;
        }
        st.visit(cur, sink);
        if st.is_goal(cur) {
            return st.found(sink);
        }

        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);

        for &np in nbuf.iter() {
            if st.visited.contains(&np) || obstacles.is_blocked(np) {
                continue;
            }
            st.came_from.insert(np, cur);
            stack.push(np);
            st.pushed(np, sink);
        }
    }

    st.exhausted(sink)
}
