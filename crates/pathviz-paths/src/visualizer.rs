//! The display side of a run.
//!
//! Searches report progress through a [`Visualizer`]. The search never
//! depends on what the sink does with the callbacks.

use pathviz_core::Point;

/// Receives per-cell progress from a running search.
///
/// Start and end are never reported through [`on_visit`](Self::on_visit) or
/// [`on_frontier`](Self::on_frontier).
pub trait Visualizer {
    /// A cell left the frontier and was expanded.
    fn on_visit(&mut self, cell: Point);

    /// A cell was pushed onto the frontier.
    fn on_frontier(&mut self, _cell: Point) {}

    /// A cell of the final path, reported in order from start to end.
    fn on_path_step(&mut self, _cell: Point) {}

    /// The frontier ran dry before reaching the end cell.
    fn on_unreachable(&mut self) {}
}

/// The no-op sink.
impl Visualizer for () {
    fn on_visit(&mut self, _cell: Point) {}
}

impl<V: Visualizer + ?Sized> Visualizer for &mut V {
    fn on_visit(&mut self, cell: Point) {
        (**self).on_visit(cell);
    }

    fn on_frontier(&mut self, cell: Point) {
        (**self).on_frontier(cell);
    }

    fn on_path_step(&mut self, cell: Point) {
        (**self).on_path_step(cell);
    }

    fn on_unreachable(&mut self) {
        (**self).on_unreachable();
    }
}

/// One callback received by a [`Recorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisitEvent {
    Visit(Point),
    Frontier(Point),
    PathStep(Point),
    Unreachable,
}

/// A sink that keeps every callback, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recorder {
    events: Vec<VisitEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in arrival order.
    pub fn events(&self) -> &[VisitEvent] {
        &self.events
    }

    /// Visited cells in visit order.
    pub fn visits(&self) -> Vec<Point> {
        self.events
            .iter()
            .filter_map(|e| match e {
                VisitEvent::Visit(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Cells pushed onto the frontier, in push order (with repeats).
    pub fn frontier(&self) -> Vec<Point> {
        self.events
            .iter()
            .filter_map(|e| match e {
                VisitEvent::Frontier(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Reported path cells, start side first.
    pub fn path_steps(&self) -> Vec<Point> {
        self.events
            .iter()
            .filter_map(|e| match e {
                VisitEvent::PathStep(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Whether the run reported an unreachable end.
    pub fn unreachable(&self) -> bool {
        self.events.contains(&VisitEvent::Unreachable)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Visualizer for Recorder {
    fn on_visit(&mut self, cell: Point) {
        self.events.push(VisitEvent::Visit(cell));
    }

    fn on_frontier(&mut self, cell: Point) {
        self.events.push(VisitEvent::Frontier(cell));
    }

    fn on_path_step(&mut self, cell: Point) {
        self.events.push(VisitEvent::PathStep(cell));
    }

    fn on_unreachable(&mut self) {
        self.events.push(VisitEvent::Unreachable);
    }
}
