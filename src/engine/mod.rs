mod rule;
mod tiles;
pub mod torus;

pub use self::tiles::{Tile, TileView};
use crate::{Coord, GridConfig, error::ConfigError};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use std::fmt;

/// A fixed-size toroidal Game of Life board
///
/// Cell state is double buffered: `alive` holds the committed generation
/// and `next_alive` is scratch space for the generation being computed.
/// Both are flat row-major buffers of `rows * columns` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    alive: Vec<bool>,
    next_alive: Vec<bool>,
    generation: u64,
}

impl Grid {
    /// Creates a randomly populated grid where each cell is alive with
    /// probability `density`
    ///
    /// The same `seed` always produces the same board.
    ///
    /// ## Panics
    /// If `density` is not within `[0, 1]`
    pub fn new(rows: usize, columns: usize, density: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_rng(rows, columns, density, &mut rng)
    }

    /// Same as [`Grid::new`], drawing from the given random source
    pub fn with_rng<R: Rng>(
        rows: usize,
        columns: usize,
        density: f64,
        rng: &mut R,
    ) -> Self {
        assert!(
            (0.0..=1.0).contains(&density),
            "density must be within [0, 1], got {density}"
        );
        let len = rows
            .checked_mul(columns)
            .expect("grid dimensions overflow usize");

        // one draw per cell, in row-major order
        let alive: Vec<bool> = (0..len).map(|_| rng.random::<f64>() < density).collect();
        Self::from_state(rows, columns, alive)
    }

    /// Validates `config` and builds the grid it describes
    pub fn from_config(config: &GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            config.rows,
            config.columns,
            config.density,
            config.seed,
        ))
    }

    /// Creates a grid where only the given cells are alive
    ///
    /// ## Panics
    /// If any coordinate is outside the grid
    pub fn from_alive<I>(rows: usize, columns: usize, alive: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut state = vec![false; rows * columns];
        for coord in alive {
            assert!(
                coord.x < rows && coord.y < columns,
                "{coord:?} is outside a {rows}x{columns} grid"
            );
            state[coord.index(columns)] = true;
        }
        Self::from_state(rows, columns, state)
    }

    fn from_state(rows: usize, columns: usize, alive: Vec<bool>) -> Self {
        debug_assert_eq!(alive.len(), rows * columns);
        Self {
            rows,
            columns,
            next_alive: alive.clone(),
            alive,
            generation: 0,
        }
    }

    /// Advances every cell by one generation
    pub fn step(&mut self) {
        let Self {
            rows,
            columns,
            ref alive,
            ref mut next_alive,
            ..
        } = *self;

        // phase 1: compute against the committed state only
        for (i, next) in next_alive.iter_mut().enumerate() {
            let coord = Coord::from_index(i, columns);
            let neighbors = count_neighbors(alive, rows, columns, coord);
            *next = rule::next_state(alive[i], neighbors);
        }

        self.commit();
    }

    /// Same as [`Grid::step`], computing rows in parallel
    pub fn step_parallel(&mut self) {
        if self.is_empty() {
            self.generation += 1;
            return;
        }

        let Self {
            rows,
            columns,
            ref alive,
            ref mut next_alive,
            ..
        } = *self;

        // phase 1: every row reads the same immutable snapshot
        next_alive
            .par_chunks_mut(columns)
            .enumerate()
            .for_each(|(x, row)| {
                for (y, next) in row.iter_mut().enumerate() {
                    let coord = Coord { x, y };
                    let neighbors = count_neighbors(alive, rows, columns, coord);
                    *next = rule::next_state(alive[coord.index(columns)], neighbors);
                }
            });

        self.commit();
    }

    /// Phase 2: publish every computed state at once
    fn commit(&mut self) {
        self.alive.copy_from_slice(&self.next_alive);
        self.generation += 1;
    }

    /// Number of live cells among the 8 neighbors of `(x, y)`, wrapping
    /// around the grid edges
    ///
    /// ## Panics
    /// If `(x, y)` is outside the grid
    pub fn live_neighbor_count(&self, x: usize, y: usize) -> u8 {
        let coord = self.checked(x, y);
        count_neighbors(&self.alive, self.rows, self.columns, coord)
    }

    /// Whether the cell at `(x, y)` is alive in the committed generation
    ///
    /// ## Panics
    /// If `(x, y)` is outside the grid
    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        let coord = self.checked(x, y);
        self.alive[coord.index(self.columns)]
    }

    fn checked(&self, x: usize, y: usize) -> Coord {
        assert!(
            x < self.rows && y < self.columns,
            "({x}, {y}) is outside a {}x{} grid",
            self.rows,
            self.columns
        );
        Coord { x, y }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.alive.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// Number of generations advanced since creation
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn alive_count(&self) -> usize {
        self.alive.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of all live cells in row-major order
    pub fn iter_alive(&self) -> impl Iterator<Item = Coord> + '_ {
        let columns = self.columns;
        self.alive
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| Coord::from_index(i, columns))
    }

    /// Renderer view over the live cells
    #[inline]
    pub fn tiles(&self) -> TileView<'_> {
        TileView::new(self)
    }
}

fn count_neighbors(alive: &[bool], rows: usize, columns: usize, coord: Coord) -> u8 {
    torus::neighbors(coord, rows, columns)
        .filter(|n| alive[n.index(columns)])
        .count() as u8
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.alive.chunks(self.columns.max(1)) {
            for &alive in row {
                f.write_str(if alive { "█" } else { " " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
