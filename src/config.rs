use crate::error::ConfigError;

/// Everything the engine consumes at initialization
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,
    /// Probability that any given cell starts alive
    pub density: f64,
    pub seed: u64,
}

impl GridConfig {
    pub const DEFAULT_ROWS: usize = 20;
    pub const DEFAULT_COLUMNS: usize = 20;
    pub const DEFAULT_DENSITY: f64 = 0.15;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::Density(self.density));
        }
        if self.rows.checked_mul(self.columns).is_none() {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            columns: Self::DEFAULT_COLUMNS,
            density: Self::DEFAULT_DENSITY,
            seed: 0,
        }
    }
}
