use super::Grid;
use crate::Coord;

/// Unit square as two right triangles, 3 components (x, y, z) per vertex
const UNIT_SQUARE: [f32; 18] = [
    // bottom left right-triangle
    -0.5, 0.5, 0.0, //
    -0.5, -0.5, 0.0, //
    0.5, -0.5, 0.0, //
    // top right right-triangle
    -0.5, 0.5, 0.0, //
    0.5, 0.5, 0.0, //
    0.5, -0.5, 0.0, //
];

/// A drawable square for one live cell
///
/// Positions and sizes are fractions of the viewport in `[0, 1]`: the board
/// covers the whole viewport and every tile is `1/rows x 1/columns` of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub coord: Coord,
    pub left: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Tile {
    fn new(coord: Coord, rows: usize, columns: usize) -> Self {
        let width = 1.0 / rows as f32;
        let height = 1.0 / columns as f32;
        Self {
            coord,
            left: coord.x as f32 * width,
            bottom: coord.y as f32 * height,
            width,
            height,
        }
    }

    /// The tile as 6 vertices in normalized device coordinates (`-1..=1`)
    pub fn quad(&self) -> [f32; 18] {
        let mut points = UNIT_SQUARE;
        for (i, point) in points.iter_mut().enumerate() {
            let (position, size) = match i % 3 {
                0 => (self.left, self.width),
                1 => (self.bottom, self.height),
                // z stays flat
                _ => continue,
            };

            *point = if *point < 0.0 {
                position * 2.0 - 1.0
            } else {
                (position + size) * 2.0 - 1.0
            };
        }
        points
    }
}

/// Read-only view handing the renderer one [`Tile`] per live cell
pub struct TileView<'a> {
    grid: &'a Grid,
}
impl<'a> TileView<'a> {
    pub(super) fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Tile> + use<'a> {
        let (rows, columns) = (self.grid.rows(), self.grid.columns());
        self.grid
            .iter_alive()
            .map(move |coord| Tile::new(coord, rows, columns))
    }

    /// Total number of tiles the renderer will draw this frame
    #[inline]
    pub fn len(&self) -> usize {
        self.grid.alive_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
