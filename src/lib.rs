//! Core library for Conway's Game of Life on a toroidal grid.

pub mod config;
pub mod coord;
pub mod engine;
pub mod error;

pub use config::GridConfig;
pub use coord::Coord;
pub use engine::{Grid, Tile, TileView};
pub use error::ConfigError;
