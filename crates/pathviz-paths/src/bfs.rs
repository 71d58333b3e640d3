use std::collections::VecDeque;

use pathviz_core::Point;

use crate::obstacles::ObstacleRegistry;
use crate::search::{Algorithm, SearchOutcome, SearchState};
use crate::traits::Pather;
use crate::visualizer::Visualizer;

/// Breadth-first search from `start` to `end`.
///
/// Cells are marked visited, and their predecessor recorded, when they are
/// enqueued, so each cell enters the queue at most once. Each dequeued cell
/// is reported to `sink` before the goal test. The first dequeue of `end`
/// yields a path that is shortest by edge count.
pub fn bfs_search<P, V>(
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
    let mut st = SearchState::begin(Algorithm::Bfs, start, end);
    let mut queue = VecDeque::from([start]);
    st.visited.insert(start);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(cur) = queue.pop_front() {
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
            st.visited.insert(np);
            st.came_from.insert(np, cur);
            queue.push_back(np);
            st.pushed(np, sink);
        }
    }

    st.exhausted(sink)
}
