use std::collections::{HashMap, HashSet};

use pathviz_core::Point;

use crate::obstacles::ObstacleRegistry;
use crate::search::{Algorithm, OpenList, SearchOutcome, SearchState, UNREACHABLE};
use crate::traits::AstarPather;
use crate::visualizer::Visualizer;

/// A* search from `start` to `end`, ordered by `f = g + estimate`.
///
/// There is no closed set and no stale-entry check: the goal test happens
/// as soon as `end` is popped. A neighbor whose `g` improves is pushed only
/// if it is not already queued; a queued cell keeps the priority it was
/// pushed with. The popped cell is reported to `sink` after relaxation, on
/// every iteration.
pub fn astar_search<P, V>(
    pather: &P,
    obstacles: &ObstacleRegistry,
    start: Point,
    end: Point,
    sink: &mut V,
) -> SearchOutcome
where
    P: AstarPather + ?Sized,
    V: Visualizer + ?Sized,
{
    let mut st = SearchState::begin(Algorithm::AStar, start, end);
    // Absent entries are at UNREACHABLE.
    let mut g_score: HashMap<Point, i32> = HashMap::from([(start, 0)]);
    let mut f_score: HashMap<Point, i32> = HashMap::from([(start, pather.estimate(start, end))]);

    let mut open = OpenList::default();
    open.push(start, f_score[&start]);
    // Cells with an entry in `open`, kept in sync with every push and pop.
    let mut queued: HashSet<Point> = HashSet::from([start]);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let cur = current.pos;
        queued.remove(&cur);

        if st.is_goal(cur) {
            return st.found(sink);
        }

        let current_g = g_score.get(&cur).copied().unwrap_or(UNREACHABLE);

        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);

        for &np in nbuf.iter() {
            if obstacles.is_blocked(np) {
                continue;
            }
            let tentative_g = current_g + pather.cost(cur, np);
            if tentative_g >= g_score.get(&np).copied().unwrap_or(UNREACHABLE) {
                continue;
            }
            st.came_from.insert(np, cur);
            g_score.insert(np, tentative_g);
            let f = tentative_g + pather.estimate(np, end);
            f_score.insert(np, f);
            if queued.insert(np) {
                open.push(np, f);
                st.pushed(np, sink);
            }
        }

        st.visit(cur, sink);
    }

    st.exhausted(sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::testutil::*;
    use crate::traits::{Pather, WeightedPather};
    use crate::visualizer::Recorder;
    use crate::visualizer::VisitEvent::{self, *};

    /// A 3x2 grid where moving along the top row costs 5 and every other
    /// move costs 1. The estimate is zero, so order is by `g` alone.
    struct Weighted;

    impl Pather for Weighted {
        fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
            for n in [p.left(), p.right(), p.up(), p.down()] {
                if (0..3).contains(&n.x) && (0..2).contains(&n.y) {
                    buf.push(n);
                }
            }
        }
    }

    impl WeightedPather for Weighted {
        fn cost(&self, from: Point, to: Point) -> i32 {
            if from.y == 0 && to.y == 0 { 5 } else { 1 }
        }
    }

    impl AstarPather for Weighted {
        fn estimate(&self, _: Point, _: Point) -> i32 {
            0
        }
    }

    /// Replays `events` and fails if a cell is pushed while an earlier push
    /// of it has not been popped yet.
    fn assert_single_queue_entry(events: &[VisitEvent]) {
        let mut pending = HashSet::new();
        for (i, ev) in events.iter().enumerate() {
            match *ev {
                Frontier(p) => assert!(pending.insert(p), "{p} pushed twice at event {i}"),
                Visit(p) => {
                    pending.remove(&p);
                }
                PathStep(_) | Unreachable => {}
            }
        }
    }

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn straight_line_visits_only_the_line() {
        let (idx, obs) = open(9, 5);
        let (start, end) = (Point::new(1, 2), Point::new(7, 2));
        let mut rec = Recorder::new();
        let outcome = astar_search(&idx, &obs, start, end, &mut rec);
        assert_eq!(outcome.path().unwrap().len(), 5);
        // Every cell off the row has a worse f and is never popped.
        let visits = rec.visits();
        assert_eq!(visits.len(), 5);
        assert!(visits.iter().all(|p| p.y == 2));
    }

    #[test]
    fn improved_queued_cell_is_not_pushed_again() {
        let obs = ObstacleRegistry::new();
        let mut rec = Recorder::new();
        let outcome = astar_search(&Weighted, &obs, p(0, 0), p(2, 0), &mut rec);
        assert_eq!(outcome.path().unwrap(), &[p(0, 1), p(1, 1), p(2, 1)]);
        // (1,0) is queued at g=5 from the start, then reached at g=3 from
        // (1,1) while still queued. It gets no second entry.
        assert_eq!(
            rec.events(),
            &[
                Frontier(p(1, 0)),
                Frontier(p(0, 1)),
                Frontier(p(1, 1)),
                Visit(p(0, 1)),
                Frontier(p(2, 1)),
                Visit(p(1, 1)),
                Visit(p(2, 1)),
                PathStep(p(0, 1)),
                PathStep(p(1, 1)),
                PathStep(p(2, 1)),
            ]
        );
        assert_single_queue_entry(rec.events());
    }

    #[test]
    fn single_queue_entry_around_wall() {
        let (idx, obs) = map(&[
            "........", //
            ".######.", //
            "........", //
            "........",
        ]);
        let mut rec = Recorder::new();
        let outcome = astar_search(&idx, &obs, p(0, 3), p(7, 0), &mut rec);
        assert!(outcome.is_found());
        assert_single_queue_entry(rec.events());
    }

    #[test]
    fn visit_follows_relaxation() {
        let (idx, obs) = open(5, 5);
        let mut rec = Recorder::new();
        astar_search(&idx, &obs, p(2, 2), p(4, 4), &mut rec);
        // Ties on f pop in push order. Each visit comes after the pushes
        // its relaxation caused.
        let expected = [
            Frontier(p(2, 1)),
            Frontier(p(2, 3)),
            Frontier(p(1, 2)),
            Frontier(p(3, 2)),
            Frontier(p(2, 4)),
            Frontier(p(1, 3)),
            Frontier(p(3, 3)),
            Visit(p(2, 3)),
            Frontier(p(3, 1)),
            Frontier(p(4, 2)),
            Visit(p(3, 2)),
            Frontier(p(1, 4)),
            Frontier(p(3, 4)),
            Visit(p(2, 4)),
            Frontier(p(4, 3)),
            Visit(p(3, 3)),
            Frontier(p(4, 1)),
            Visit(p(4, 2)),
            Visit(p(3, 4)),
            Visit(p(4, 3)),
            PathStep(p(2, 3)),
            PathStep(p(2, 4)),
            PathStep(p(3, 4)),
        ];
        assert_eq!(rec.events(), &expected);
    }

    #[test]
    fn pop_without_improvement_is_still_visited() {
        let (idx, obs) = map(&["...#."]);
        let mut rec = Recorder::new();
        let outcome = astar_search(&idx, &obs, p(0, 0), p(4, 0), &mut rec);
        assert!(!outcome.is_found());
        // Popping (2,0) relaxes nothing: its left side is already better
        // and its right side is a barrier.
        assert_eq!(
            rec.events(),
            &[
                Frontier(p(1, 0)),
                Frontier(p(2, 0)),
                Visit(p(1, 0)),
                Visit(p(2, 0)),
                Unreachable,
            ]
        );
    }

    #[test]
    fn detours_around_wall() {
        let (idx, obs) = map(&[
            "..........", //
            "....#.....", //
            "....#.....", //
            "....#.....", //
            "..........",
        ]);
        let (start, end) = (Point::new(2, 2), Point::new(7, 2));
        let outcome = astar_search(&idx, &obs, start, end, &mut ());
        let path = outcome.path().unwrap();
        assert_valid_path(path, &obs, start, end);
        // 5 across plus 2 up and 2 back down.
        assert_eq!(path.len(), 8);
    }
}
