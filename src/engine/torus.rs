use crate::Coord;

/// Offsets of the 8-neighborhood as `(dx, dy)`
///
/// Order: left, right, up, down, top-left, top-right, bottom-left, bottom-right
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, -1),
];

/// Wraps an index onto `0..modulus`, so the last index is adjacent to the first
///
/// `-1` maps to `modulus - 1` and `modulus` maps to `0`.
///
/// ## Panics
/// If `modulus` is zero
#[inline]
pub fn wrap(index: isize, modulus: usize) -> usize {
    assert!(modulus > 0, "cannot wrap onto an empty axis");
    index.rem_euclid(modulus as isize) as usize
}

/// The 8 neighbors of `coord` on a `rows x columns` torus, in
/// [`NEIGHBOR_OFFSETS`] order
///
/// On axes shorter than 3 the same cell can be yielded more than once.
pub fn neighbors(coord: Coord, rows: usize, columns: usize) -> impl Iterator<Item = Coord> {
    NEIGHBOR_OFFSETS.iter().map(move |&(dx, dy)| Coord {
        x: wrap(coord.x as isize + dx, rows),
        y: wrap(coord.y as isize + dy, columns),
    })
}
