//! Blocked cells: the fixed border ring and the user-painted barriers.

use std::collections::HashSet;

use pathviz_core::Point;

use crate::tilegrid::TileGrid;

/// Two disjoint sets of impassable cells.
///
/// The border is fixed when the registry is created. Barriers can be added
/// and removed between runs; a border cell is never stored as a barrier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleRegistry {
    border: HashSet<Point>,
    barriers: HashSet<Point>,
}

impl ObstacleRegistry {
    /// A registry with no border and no barriers.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry whose border is the outermost ring of `grid`.
    pub fn with_border(grid: &TileGrid) -> Self {
        Self {
            border: grid.outer_ring().collect(),
            barriers: HashSet::new(),
        }
    }

    /// Whether `p` is impassable.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.border.contains(&p) || self.barriers.contains(&p)
    }

    /// Whether `p` belongs to the fixed border.
    #[inline]
    pub fn is_border(&self, p: Point) -> bool {
        self.border.contains(&p)
    }

    /// Whether `p` holds a user barrier.
    #[inline]
    pub fn is_barrier(&self, p: Point) -> bool {
        self.barriers.contains(&p)
    }

    /// Add a barrier at `p`. Returns `true` if the barrier is new.
    ///
    /// Adding twice, or adding on the border, changes nothing.
    pub fn add_barrier(&mut self, p: Point) -> bool {
        if self.border.contains(&p) {
            return false;
        }
        let added = self.barriers.insert(p);
        if added {
            log::trace!("barrier added at {p}");
        }
        added
    }

    /// Remove the barrier at `p`. Returns `true` if one was present.
    pub fn remove_barrier(&mut self, p: Point) -> bool {
        let removed = self.barriers.remove(&p);
        if removed {
            log::trace!("barrier removed at {p}");
        }
        removed
    }

    /// Flip the barrier at `p`. Returns whether `p` holds a barrier afterwards.
    pub fn toggle_barrier(&mut self, p: Point) -> bool {
        if self.remove_barrier(p) {
            false
        } else {
            self.add_barrier(p)
        }
    }

    /// Remove every barrier. The border is kept.
    pub fn reset_barriers(&mut self) {
        log::trace!("clearing {} barriers", self.barriers.len());
        self.barriers.clear();
    }

    /// Iterate over the barrier cells (unordered).
    pub fn barriers(&self) -> impl Iterator<Item = Point> + '_ {
        self.barriers.iter().copied()
    }

    /// Iterate over the border cells (unordered).
    pub fn border(&self) -> impl Iterator<Item = Point> + '_ {
        self.border.iter().copied()
    }

    /// Number of barrier cells.
    #[inline]
    pub fn barrier_count(&self) -> usize {
        self.barriers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_covers_outer_ring() {
        let grid = TileGrid::with_cells(6, 4).unwrap();
        let reg = ObstacleRegistry::with_border(&grid);
        assert_eq!(reg.border().count(), 16);
        for p in grid.cells() {
            assert_eq!(reg.is_border(p), grid.is_outer_ring(p), "{p}");
            assert_eq!(reg.is_blocked(p), grid.is_outer_ring(p), "{p}");
        }
    }

    #[test]
    fn add_barrier_is_idempotent() {
        let mut reg = ObstacleRegistry::new();
        let p = Point::new(2, 3);
        assert!(reg.add_barrier(p));
        let once = reg.clone();
        assert!(!reg.add_barrier(p));
        assert_eq!(reg, once);
        assert!(reg.is_blocked(p));
        assert_eq!(reg.barrier_count(), 1);
    }

    #[test]
    fn remove_absent_barrier_is_noop() {
        let mut reg = ObstacleRegistry::new();
        reg.add_barrier(Point::new(1, 1));
        let before = reg.clone();
        assert!(!reg.remove_barrier(Point::new(4, 4)));
        assert_eq!(reg, before);
        assert!(reg.remove_barrier(Point::new(1, 1)));
        assert!(!reg.is_blocked(Point::new(1, 1)));
    }

    #[test]
    fn border_cells_are_not_barriers() {
        let grid = TileGrid::with_cells(4, 4).unwrap();
        let mut reg = ObstacleRegistry::with_border(&grid);
        assert!(!reg.add_barrier(Point::new(0, 2)));
        assert!(!reg.is_barrier(Point::new(0, 2)));
        assert!(!reg.remove_barrier(Point::new(0, 2)));
        assert!(reg.is_blocked(Point::new(0, 2)));
    }

    #[test]
    fn reset_keeps_border() {
        let grid = TileGrid::with_cells(5, 5).unwrap();
        let mut reg = ObstacleRegistry::with_border(&grid);
        reg.add_barrier(Point::new(2, 2));
        reg.add_barrier(Point::new(1, 3));
        reg.reset_barriers();
        assert_eq!(reg.barrier_count(), 0);
        assert!(!reg.is_blocked(Point::new(2, 2)));
        assert!(reg.is_blocked(Point::new(0, 0)));
        assert_eq!(reg.border().count(), 16);
    }

    #[test]
    fn toggle_flips() {
        let mut reg = ObstacleRegistry::new();
        let p = Point::new(3, 1);
        assert!(reg.toggle_barrier(p));
        assert!(reg.is_barrier(p));
        assert!(!reg.toggle_barrier(p));
        assert!(!reg.is_barrier(p));
    }
}
