//! The tile grid: a fixed array of cells and their orthogonal neighbors.
//!
//! Neighbor lists are computed once, at construction, by classifying each
//! cell's position ([`Placement`]). Afterwards [`TileGrid::neighbors`] is a
//! plain slice lookup with no bounds arithmetic.

use pathviz_core::{Point, Range, RangeIter};

use crate::error::GridError;

/// One of the four corners of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// One of the four sides of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Where a cell sits on the grid, which fixes its neighbor set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Not on any boundary row or column: 4 neighbors.
    Interior,
    /// A corner cell: 2 neighbors.
    Corner(Corner),
    /// A boundary cell that is not a corner: 3 neighbors.
    Edge(Side),
    /// A cell of a grid only one row or one column thick.
    Line,
    /// The only cell of a 1x1 grid.
    Single,
}

impl Placement {
    /// Neighbors of `p` for this placement, in search order.
    ///
    /// `bounds` is only consulted for [`Placement::Line`].
    fn neighbors(self, p: Point, bounds: Range) -> Vec<Point> {
        match self {
            Self::Interior => vec![p.up(), p.down(), p.left(), p.right()],
            Self::Corner(Corner::TopLeft) => vec![p.down(), p.right()],
            Self::Corner(Corner::TopRight) => vec![p.down(), p.left()],
            Self::Corner(Corner::BottomLeft) => vec![p.right(), p.up()],
            Self::Corner(Corner::BottomRight) => vec![p.left(), p.up()],
            Self::Edge(Side::Top) => vec![p.left(), p.right(), p.down()],
            Self::Edge(Side::Bottom) => vec![p.left(), p.right(), p.up()],
            Self::Edge(Side::Left) => vec![p.up(), p.down(), p.right()],
            Self::Edge(Side::Right) => vec![p.up(), p.down(), p.left()],
            Self::Line => [p.up(), p.down(), p.left(), p.right()]
                .into_iter()
                .filter(|&n| bounds.contains(n))
                .collect(),
            Self::Single => Vec::new(),
        }
    }
}

/// A canvas partitioned into square tiles.
///
/// Cells are addressed in tile units: `Point { x: col, y: row }`, with the
/// top-left cell at the origin.
#[derive(Debug, Clone)]
pub struct TileGrid {
    tile_size: i32,
    bounds: Range,
    // indexed by `idx`, row-major
    neighbors: Vec<Vec<Point>>,
}

impl TileGrid {
    /// Partition a `width` x `height` pixel canvas into tiles of `tile_size`.
    ///
    /// Partial tiles at the right and bottom edges are dropped, so the grid
    /// has `width / tile_size` columns and `height / tile_size` rows.
    pub fn new(width: i32, height: i32, tile_size: i32) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions {
            width,
            height,
            tile_size,
        };
        if width <= 0 || height <= 0 || tile_size <= 0 {
            return Err(invalid);
        }
        let cols = width / tile_size;
        let rows = height / tile_size;
        if cols == 0 || rows == 0 {
            return Err(invalid);
        }

        let bounds = Range::new(0, 0, cols, rows);
        let mut grid = Self {
            tile_size,
            bounds,
            neighbors: Vec::with_capacity(bounds.len()),
        };
        for p in bounds.iter() {
            let placement = grid.classify(p);
            grid.neighbors.push(placement.neighbors(p, bounds));
        }
        Ok(grid)
    }

    /// A grid of `cols` x `rows` cells with a tile size of 1.
    pub fn with_cells(cols: i32, rows: i32) -> Result<Self, GridError> {
        Self::new(cols, rows, 1)
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    /// Side of one tile, in pixels.
    #[inline]
    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// The rectangle of cells covered by the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Always false: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Whether `p` is a cell of this grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Row-major iterator over every cell.
    #[inline]
    pub fn cells(&self) -> RangeIter {
        self.bounds.iter()
    }

    /// Classify the position of `p`. Returns `None` outside the grid.
    pub fn placement(&self, p: Point) -> Option<Placement> {
        self.contains(p).then(|| self.classify(p))
    }

    fn classify(&self, p: Point) -> Placement {
        let (cols, rows) = (self.cols(), self.rows());
        if cols == 1 && rows == 1 {
            return Placement::Single;
        }
        if cols == 1 || rows == 1 {
            return Placement::Line;
        }
        let top = p.y == 0;
        let bottom = p.y == rows - 1;
        let left = p.x == 0;
        let right = p.x == cols - 1;
        match (top, bottom, left, right) {
            (true, _, true, _) => Placement::Corner(Corner::TopLeft),
            (true, _, _, true) => Placement::Corner(Corner::TopRight),
            (_, true, true, _) => Placement::Corner(Corner::BottomLeft),
            (_, true, _, true) => Placement::Corner(Corner::BottomRight),
            (true, ..) => Placement::Edge(Side::Top),
            (_, true, ..) => Placement::Edge(Side::Bottom),
            (_, _, true, _) => Placement::Edge(Side::Left),
            (.., true) => Placement::Edge(Side::Right),
            _ => Placement::Interior,
        }
    }

    /// The orthogonal neighbors of `p`, in search order. Empty outside the
    /// grid.
    #[inline]
    pub fn neighbors(&self, p: Point) -> &[Point] {
        match self.idx(p) {
            Some(i) => self.neighbors[i].as_slice(),
            None => &[],
        }
    }

    /// Whether `p` lies on the outermost ring of cells.
    #[inline]
    pub fn is_outer_ring(&self, p: Point) -> bool {
        self.bounds.on_edge(p)
    }

    /// Every cell of the outermost ring, row-major.
    pub fn outer_ring(&self) -> impl Iterator<Item = Point> + use<> {
        let bounds = self.bounds;
        bounds.iter().filter(move |&p| bounds.on_edge(p))
    }

    /// The cell containing pixel `(x, y)`, snapping down to the tile.
    pub fn cell_at_pixel(&self, x: i32, y: i32) -> Option<Point> {
        if x < 0 || y < 0 {
            return None;
        }
        let p = Point::new(x / self.tile_size, y / self.tile_size);
        self.contains(p).then_some(p)
    }

    /// Pixel coordinates of the top-left corner of cell `p`.
    #[inline]
    pub fn pixel_origin(&self, p: Point) -> Point {
        Point::new(p.x * self.tile_size, p.y * self.tile_size)
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.cols() + p.x) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(cols: i32, rows: i32) -> TileGrid {
        TileGrid::with_cells(cols, rows).unwrap()
    }

    #[test]
    fn dimensions_from_pixels() {
        let g = TileGrid::new(1000, 600, 20).unwrap();
        assert_eq!(g.cols(), 50);
        assert_eq!(g.rows(), 30);
        assert_eq!(g.len(), 1500);
        assert_eq!(g.tile_size(), 20);
    }

    #[test]
    fn partial_tiles_are_dropped() {
        let g = TileGrid::new(45, 30, 10).unwrap();
        assert_eq!((g.cols(), g.rows()), (4, 3));
    }

    #[test]
    fn invalid_dimensions() {
        assert!(TileGrid::new(0, 10, 1).is_err());
        assert!(TileGrid::new(10, -1, 1).is_err());
        assert!(TileGrid::new(10, 10, 0).is_err());
        assert_eq!(
            TileGrid::new(10, 10, 20).unwrap_err(),
            GridError::InvalidDimensions {
                width: 10,
                height: 10,
                tile_size: 20
            }
        );
    }

    #[test]
    fn neighbor_counts_by_placement() {
        let g = grid(6, 5);
        for p in g.cells() {
            let n = g.neighbors(p).len();
            match g.placement(p).unwrap() {
                Placement::Interior => assert_eq!(n, 4, "{p}"),
                Placement::Edge(_) => assert_eq!(n, 3, "{p}"),
                Placement::Corner(_) => assert_eq!(n, 2, "{p}"),
                other => panic!("unexpected placement {other:?} at {p}"),
            }
        }
        assert_eq!(g.placement(Point::new(0, 0)), Some(Placement::Corner(Corner::TopLeft)));
        assert_eq!(g.placement(Point::new(5, 4)), Some(Placement::Corner(Corner::BottomRight)));
        assert_eq!(g.placement(Point::new(3, 4)), Some(Placement::Edge(Side::Bottom)));
        assert_eq!(g.placement(Point::new(5, 2)), Some(Placement::Edge(Side::Right)));
        assert_eq!(g.placement(Point::new(2, 2)), Some(Placement::Interior));
        assert_eq!(g.placement(Point::new(6, 0)), None);
    }

    #[test]
    fn neighbor_total_is_twice_edge_count() {
        let (cols, rows) = (7, 4);
        let g = grid(cols, rows);
        let total: usize = g.cells().map(|p| g.neighbors(p).len()).sum();
        let edges = (cols * (rows - 1) + rows * (cols - 1)) as usize;
        assert_eq!(total, 2 * edges);
    }

    #[test]
    fn neighbors_are_adjacent_and_symmetric() {
        let g = grid(5, 5);
        for p in g.cells() {
            for &n in g.neighbors(p) {
                assert!(g.contains(n));
                assert_eq!((p.x - n.x).abs() + (p.y - n.y).abs(), 1);
                assert!(g.neighbors(n).contains(&p), "{n} does not list {p}");
            }
        }
    }

    #[test]
    fn neighbor_order_per_class() {
        let g = grid(4, 4);
        assert_eq!(
            g.neighbors(Point::new(1, 1)),
            &[Point::new(1, 0), Point::new(1, 2), Point::new(0, 1), Point::new(2, 1)]
        );
        assert_eq!(
            g.neighbors(Point::new(3, 0)),
            &[Point::new(3, 1), Point::new(2, 0)]
        );
        assert_eq!(
            g.neighbors(Point::new(1, 3)),
            &[Point::new(0, 3), Point::new(2, 3), Point::new(1, 2)]
        );
    }

    #[test]
    fn degenerate_grids() {
        let line = grid(5, 1);
        assert_eq!(line.placement(Point::new(0, 0)), Some(Placement::Line));
        assert_eq!(line.neighbors(Point::new(0, 0)), &[Point::new(1, 0)]);
        assert_eq!(line.neighbors(Point::new(2, 0)).len(), 2);

        let single = grid(1, 1);
        assert_eq!(single.placement(Point::ZERO), Some(Placement::Single));
        assert!(single.neighbors(Point::ZERO).is_empty());
    }

    #[test]
    fn outer_ring_covers_boundary() {
        let g = grid(5, 4);
        let ring: Vec<_> = g.outer_ring().collect();
        assert_eq!(ring.len(), 2 * 5 + 2 * 4 - 4);
        assert!(ring.iter().all(|&p| g.placement(p) != Some(Placement::Interior)));
    }

    #[test]
    fn pixel_conversion_snaps_to_tile() {
        let g = TileGrid::new(1000, 600, 20).unwrap();
        assert_eq!(g.cell_at_pixel(0, 0), Some(Point::new(0, 0)));
        assert_eq!(g.cell_at_pixel(119, 41), Some(Point::new(5, 2)));
        assert_eq!(g.cell_at_pixel(1000, 10), None);
        assert_eq!(g.cell_at_pixel(-1, 10), None);
        assert_eq!(g.pixel_origin(Point::new(5, 2)), Point::new(100, 40));
    }

    #[test]
    fn out_of_grid_has_no_neighbors() {
        let g = grid(3, 3);
        assert!(g.neighbors(Point::new(-1, 0)).is_empty());
        assert!(g.neighbors(Point::new(3, 3)).is_empty());
    }
}
