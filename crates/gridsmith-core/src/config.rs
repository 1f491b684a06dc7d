//! Grid configuration: track counts and gaps.

use serde::{Deserialize, Serialize};

/// Configuration of the editable grid.
///
/// `columns` and `rows` bound all coordinate arithmetic and must be at
/// least 1. Gap values are device pixels. When `use_uniform_gap` is set,
/// `gap` applies to both axes; otherwise `column_gap` and `row_gap` apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns (>= 1)
    pub columns: u32,
    /// Number of rows (>= 1)
    pub rows: u32,
    /// Uniform gap in pixels
    pub gap: u32,
    /// Column gap in pixels (non-uniform mode)
    pub column_gap: u32,
    /// Row gap in pixels (non-uniform mode)
    pub row_gap: u32,
    /// Whether the single `gap` value applies to both axes
    pub use_uniform_gap: bool,
}

impl GridConfig {
    /// Create a config with the given track counts and a uniform gap.
    #[must_use]
    pub const fn new(columns: u32, rows: u32, gap: u32) -> Self {
        Self {
            columns,
            rows,
            gap,
            column_gap: gap,
            row_gap: gap,
            use_uniform_gap: true,
        }
    }

    /// Switch to axis-specific gaps.
    #[must_use]
    pub const fn with_axis_gaps(mut self, column_gap: u32, row_gap: u32) -> Self {
        self.column_gap = column_gap;
        self.row_gap = row_gap;
        self.use_uniform_gap = false;
        self
    }

    /// Validate the config at the shell boundary.
    ///
    /// Core operations only require `columns, rows >= 1`; this is the
    /// place a caller checks that contract before handing the config in.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either track count is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        Ok(())
    }
}

impl Default for GridConfig {
    /// The editor's starting state: 3x3 grid with a 16px uniform gap.
    fn default() -> Self {
        Self::new(3, 3, 16)
    }
}

/// Error type for grid configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Column count is zero
    ZeroColumns,
    /// Row count is zero
    ZeroRows,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroColumns => write!(f, "grid must have at least one column"),
            Self::ZeroRows => write!(f, "grid must have at least one row"),
        }
    }
}

impl std::error::Error for ConfigError {}
