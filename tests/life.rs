use std::collections::HashSet;

use torus_life::{Coord, Grid, GridConfig};

fn grid_with(rows: usize, columns: usize, cells: &[(usize, usize)]) -> Grid {
    Grid::from_alive(rows, columns, cells.iter().copied().map(Coord::from))
}

fn live_set(grid: &Grid) -> HashSet<(usize, usize)> {
    grid.iter_alive().map(|c| (c.x, c.y)).collect()
}

fn assert_alive(grid: &Grid, cells: &[(usize, usize)]) {
    for &(x, y) in cells {
        assert!(grid.is_alive(x, y), "expected alive at ({x},{y})");
    }
}

/// Places `pattern` at `origin`, wrapping around the edges
fn place(
    rows: usize,
    columns: usize,
    origin: (usize, usize),
    pattern: &[(usize, usize)],
) -> Vec<(usize, usize)> {
    pattern
        .iter()
        .map(|&(x, y)| ((origin.0 + x) % rows, (origin.1 + y) % columns))
        .collect()
}

fn step_naive(
    rows: usize,
    columns: usize,
    cells: &HashSet<(usize, usize)>,
) -> HashSet<(usize, usize)> {
    let mut next = HashSet::new();
    for x in 0..rows {
        for y in 0..columns {
            let mut neighbors = 0;
            for dx in -1isize..=1 {
                for dy in -1isize..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = (x as isize + dx).rem_euclid(rows as isize) as usize;
                    let ny = (y as isize + dy).rem_euclid(columns as isize) as usize;
                    if cells.contains(&(nx, ny)) {
                        neighbors += 1;
                    }
                }
            }
            let alive = cells.contains(&(x, y));
            if matches!((alive, neighbors), (true, 2 | 3) | (false, 3)) {
                next.insert((x, y));
            }
        }
    }
    next
}

const GLIDER: [(usize, usize); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

#[test]
fn empty_board_stays_empty() {
    let mut grid = Grid::new(12, 9, 0.0, 1);
    for _ in 0..10 {
        grid.step();
        assert_eq!(grid.alive_count(), 0);
    }
}

#[test]
fn lone_cell_dies() {
    let mut grid = grid_with(5, 5, &[(2, 2)]);
    assert_eq!(grid.live_neighbor_count(2, 2), 0);

    grid.step();
    assert_eq!(grid.alive_count(), 0);
}

#[test]
fn block_is_stable() {
    let block = [(3, 3), (3, 4), (4, 3), (4, 4)];
    let mut grid = grid_with(8, 8, &block);
    let before = grid.clone();

    for _ in 0..50 {
        grid.step();
        assert_eq!(live_set(&grid), live_set(&before));
    }
    assert_alive(&grid, &block);
}

#[test]
fn blinker_oscillates() {
    let horizontal = [(4, 3), (4, 4), (4, 5)];
    let vertical = [(3, 4), (4, 4), (5, 4)];
    let mut grid = grid_with(9, 9, &horizontal);

    grid.step();
    assert_eq!(live_set(&grid), HashSet::from(vertical));

    grid.step();
    assert_eq!(live_set(&grid), HashSet::from(horizontal));
}

#[test]
fn blinker_on_seam_oscillates() {
    // straddles the last and first columns
    let horizontal = [(3, 7), (3, 0), (3, 1)];
    let vertical = [(2, 0), (3, 0), (4, 0)];
    let mut grid = grid_with(8, 8, &horizontal);

    grid.step();
    assert_eq!(live_set(&grid), HashSet::from(vertical));

    grid.step();
    assert_eq!(live_set(&grid), HashSet::from(horizontal));
}

#[test]
fn glider_crosses_edges() {
    let (rows, columns) = (8, 10);
    let mut grid = grid_with(rows, columns, &place(rows, columns, (6, 8), &GLIDER));

    // a glider moves one cell diagonally every 4 generations
    for shift in 1..=3 {
        for _ in 0..4 {
            grid.step();
        }
        let expected = place(rows, columns, (6 + shift, 8 + shift), &GLIDER);
        assert_eq!(live_set(&grid), expected.into_iter().collect::<HashSet<_>>());
    }
}

#[test]
fn glider_returns_home() {
    let size = 6;
    let start = place(size, size, (0, 0), &GLIDER);
    let mut grid = grid_with(size, size, &start);

    for _ in 0..4 * size {
        grid.step();
    }
    assert_eq!(live_set(&grid), start.into_iter().collect::<HashSet<_>>());
    assert_eq!(grid.generation(), 4 * size as u64);
}

#[test]
fn corner_sees_wrapped_neighbors() {
    let (rows, columns) = (6, 4);
    let corners = [(rows - 1, columns - 1), (rows - 1, 0), (0, columns - 1)];
    let grid = grid_with(rows, columns, &corners);

    assert_eq!(grid.live_neighbor_count(0, 0), 3);
    // the far corner is adjacent to the other two as well
    assert_eq!(grid.live_neighbor_count(rows - 1, columns - 1), 2);
}

#[test]
fn matches_reference_rule() {
    for seed in 0..8 {
        let (rows, columns) = (13, 17);
        let mut grid = Grid::new(rows, columns, 0.35, seed);
        let mut expected = live_set(&grid);

        for _ in 0..20 {
            grid.step();
            expected = step_naive(rows, columns, &expected);
            assert_eq!(live_set(&grid), expected, "seed {seed}");
        }
    }
}

#[test]
fn parallel_matches_serial() {
    let mut serial = Grid::new(64, 48, 0.3, 99);
    let mut parallel = serial.clone();

    for _ in 0..30 {
        serial.step();
        parallel.step_parallel();
        assert_eq!(serial, parallel);
    }
}

#[test]
fn stepping_is_deterministic() {
    let start = Grid::new(32, 32, 0.25, 5);
    let mut a = start.clone();
    let mut b = start.clone();

    for _ in 0..10 {
        a.step();
        b.step();
    }
    assert_eq!(a, b);
}

#[test]
fn seed_reproduces_board() {
    let config = GridConfig {
        rows: 40,
        columns: 30,
        density: 0.5,
        seed: 1234,
    };
    let a = Grid::from_config(&config).unwrap();
    let b = Grid::from_config(&config).unwrap();
    let other = Grid::new(40, 30, 0.5, 4321);

    assert_eq!(a, b);
    assert_ne!(live_set(&a), live_set(&other));
}

#[test]
fn density_extremes() {
    let dead = Grid::new(10, 7, 0.0, 3);
    let full = Grid::new(10, 7, 1.0, 3);

    assert_eq!(dead.alive_count(), 0);
    assert_eq!(full.alive_count(), 70);
}

#[test]
fn full_board_dies_out() {
    // every cell has 8 live neighbors
    let mut grid = Grid::new(5, 5, 1.0, 0);
    grid.step();
    assert_eq!(grid.alive_count(), 0);
}

#[test]
fn tiles_follow_live_cells() {
    let mut grid = grid_with(9, 9, &[(4, 3), (4, 4), (4, 5)]);
    grid.step();

    let tiles: Vec<_> = grid.tiles().iter().collect();
    let coords: Vec<_> = tiles.iter().map(|t| (t.coord.x, t.coord.y)).collect();
    assert_eq!(coords, vec![(3, 4), (4, 4), (5, 4)]);
    assert!(tiles.iter().all(|t| (t.width - 1.0 / 9.0).abs() < 1e-6));
}
