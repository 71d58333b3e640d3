use std::collections::HashMap;

use pathviz_core::Point;

use crate::obstacles::ObstacleRegistry;
use crate::search::{Algorithm, OpenList, SearchOutcome, SearchState, UNREACHABLE};
use crate::traits::WeightedPather;
use crate::visualizer::Visualizer;

/// Dijkstra search from `start` to `end`.
///
/// The heap cannot lower a key in place, so an improved distance is pushed
/// as a new entry and outdated entries are skipped when popped. A popped
/// cell is reported to `sink` after its neighbors have been relaxed.
pub fn dijkstra_search<P, V>(
    pather: &P,
    obstacles: &ObstacleRegistry,
    start: Point,
    end: Point,
    sink: &mut V,
) -> SearchOutcome
where
    P: WeightedPather + ?Sized,
    V: Visualizer + ?Sized,
{
    let mut st = SearchState::begin(Algorithm::Dijkstra, start, end);
    // Absent entries are at UNREACHABLE distance.
    let mut dist: HashMap<Point, i32> = HashMap::from([(start, 0)]);
    let mut open = OpenList::default();
    open.push(start, 0);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let cur = current.pos;
        let d = current.priority;

        // Skip stale entries.
        if d > dist.get(&cur).copied().unwrap_or(UNREACHABLE) {
            continue;
        }
        if st.is_goal(cur) {
            return st.found(sink);
        }
        st.visited.insert(cur);

        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);

        for &np in nbuf.iter() {
            if st.visited.contains(&np) || obstacles.is_blocked(np) {
                continue;
            }
            let nd = d + pather.cost(cur, np);
            if nd < dist.get(&np).copied().unwrap_or(UNREACHABLE) {
                dist.insert(np, nd);
                st.came_from.insert(np, cur);
                open.push(np, nd);
                st.pushed(np, sink);
            }
        }

        st.visit(cur, sink);
    }

    st.exhausted(sink)
}
