use pathviz_core::Point;

/// Manhattan (L1) distance between two cells, in tile units.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
