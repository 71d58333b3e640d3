use pathviz_core::Point;

/// Anything a search can walk: a cell and the cells one step away.
pub trait Pather {
    /// Push the cells adjacent to `p` onto `buf`, in expansion order.
    /// `buf` is empty on entry.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A [`Pather`] whose steps have a price.
pub trait WeightedPather: Pather {
    /// Price of the step `from -> to`; always positive.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// A [`WeightedPather`] that can also guess the remaining price.
pub trait AstarPather: WeightedPather {
    /// Lower bound on the price of reaching `to` from `from`.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
