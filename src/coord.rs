use std::cmp::Ordering;

/// A cell coordinate on the grid
///
/// `x` is the row index and `y` the column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}
impl Coord {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Position of this coordinate in a row-major buffer with `columns` columns
    #[inline]
    pub const fn index(self, columns: usize) -> usize {
        self.x * columns + self.y
    }

    /// Inverse of [`Coord::index`]
    #[inline]
    pub const fn from_index(index: usize, columns: usize) -> Self {
        Self {
            x: index / columns,
            y: index % columns,
        }
    }
}
impl From<(usize, usize)> for Coord {
    #[inline]
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}
impl PartialOrd for Coord {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Coord {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major: compare rows first, then columns
        Ord::cmp(&self.x, &other.x).then(Ord::cmp(&self.y, &other.y))
    }
}
