//! Level configuration: board dimensions, color catalog size, and combo
//! thresholds, loaded from a JSON level asset and validated before any
//! board is constructed.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Per-level parameters. Immutable for the lifetime of a loaded board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LevelConfig {
    pub rows: usize,
    pub cols: usize,
    /// Size of the color catalog; cell colors are drawn from `0..num_colors`.
    pub num_colors: u8,
    /// Combo tier thresholds, ascending: tier 0 up to `a`, tier 1 up to `b`,
    /// tier 2 up to `c`, tier 3 beyond.
    pub combo_threshold_a: usize,
    pub combo_threshold_b: usize,
    pub combo_threshold_c: usize,
}

/// Rejection reasons for a malformed level asset.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {rows}x{cols}")]
    BadDimensions { rows: usize, cols: usize },
    #[error("num_colors must be at least 1")]
    EmptyCatalog,
    #[error("combo thresholds must be positive and ascending, got {a}, {b}, {c}")]
    BadThresholds { a: usize, b: usize, c: usize },
    #[error("board does not match level config: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    BoardMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
    #[error("failed to read level file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse level file")]
    Parse(#[from] serde_json::Error),
}

impl LevelConfig {
    /// Check every constraint the engine relies on. Runs at load time so the
    /// core algorithms never see a malformed config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::BadDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.num_colors == 0 {
            return Err(ConfigError::EmptyCatalog);
        }
        let (a, b, c) = (
            self.combo_threshold_a,
            self.combo_threshold_b,
            self.combo_threshold_c,
        );
        if a == 0 || a > b || b > c {
            return Err(ConfigError::BadThresholds { a, b, c });
        }
        Ok(())
    }

    /// Parse and validate a JSON level asset.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON level asset from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for LevelConfig {
    /// The reference level: 10 rows x 12 columns, 6 colors, tiers at 4/7/9.
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 12,
            num_colors: 6,
            combo_threshold_a: 4,
            combo_threshold_b: 7,
            combo_threshold_c: 9,
        }
    }
}
