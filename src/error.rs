//! Error types for building a grid from configuration.

use thiserror::Error;

/// A [`GridConfig`](crate::GridConfig) that cannot produce a grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Initial live probability outside `[0, 1]`.
    #[error("density must be within [0, 1], got {0}")]
    Density(f64),

    /// `rows * columns` does not fit in memory addressing.
    #[error("grid of {rows}x{columns} cells is too large")]
    TooLarge { rows: usize, columns: usize },
}
