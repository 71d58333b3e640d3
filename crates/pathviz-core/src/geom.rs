//! Geometry primitives: [`Point`] and [`Range`].
//!
//! A [`Point`] names one tile of the grid by column (`x`) and row (`y`).
//! A [`Range`] is the half-open rectangle of tiles a grid spans.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A tile coordinate. X grows right (columns), Y grows down (rows).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn up(self) -> Self {
        Self::new(self.x, self.y - 1)
    }

    #[inline]
    pub const fn down(self) -> Self {
        Self::new(self.x, self.y + 1)
    }

    #[inline]
    pub const fn left(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    #[inline]
    pub const fn right(self) -> Self {
        Self::new(self.x + 1, self.y)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order, so sorted cells read like the grid.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Error returned when a `"col,row"` string cannot be parsed into a [`Point`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePointError(String);

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid cell \u{201c}{}\u{201d}, expected col,row", self.0)
    }
}

impl std::error::Error for ParsePointError {}

/// Parses `"col,row"` (whitespace around either number is ignored).
impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePointError(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Self::new(x, y))
    }
}

/// The tiles `min.x..max.x` by `min.y..max.y`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// The range from `(x0, y0)` inclusive to `(x1, y1)` exclusive. It is
    /// empty unless `x0 < x1` and `y0 < y1`.
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        (self.max.x - self.min.x).max(0)
    }

    #[inline]
    pub fn height(self) -> i32 {
        (self.max.y - self.min.y).max(0)
    }

    /// Number of tiles.
    #[inline]
    pub fn len(self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Whether `p` is a tile of the outermost ring.
    #[inline]
    pub fn on_edge(self, p: Point) -> bool {
        self.contains(p)
            && (p.x == self.min.x
                || p.x == self.max.x - 1
                || p.y == self.min.y
                || p.y == self.max.y - 1)
    }

    /// Every tile, row by row.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
            len: self.len(),
        }
    }
}

/// Row-major iterator over the tiles of a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
    len: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.len {
            return None;
        }
        let w = self.range.width() as usize;
        let (col, row) = (self.next % w, self.next / w);
        self.next += 1;
        Some(Point::new(
            self.range.min.x + col as i32,
            self.range.min.y + row as i32,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn range_round_trip() {
        let r = Range::new(1, 2, 10, 20);
        let json = serde_json::to_string(&r).unwrap();
        let back: Range = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
