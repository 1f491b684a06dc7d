//! Grid items and the spans they occupy.

use crate::config::GridConfig;
use serde::{Deserialize, Serialize};

/// Unique identifier for a grid item, stable for the item's lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// A rectangular span of grid cells in 1-based, half-open line indices.
///
/// A span from line `i` to line `j` (`i < j`) occupies cells `i..j-1`,
/// matching CSS Grid's `grid-column: i / j` placement. Invariant:
/// `column_start < column_end` and `row_start < row_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Starting column line (1-based)
    pub column_start: u32,
    /// Ending column line (exclusive)
    pub column_end: u32,
    /// Starting row line (1-based)
    pub row_start: u32,
    /// Ending row line (exclusive)
    pub row_end: u32,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub const fn new(column_start: u32, column_end: u32, row_start: u32, row_end: u32) -> Self {
        Self {
            column_start,
            column_end,
            row_start,
            row_end,
        }
    }

    /// Create a single-cell span at (col, row).
    #[must_use]
    pub const fn cell(col: u32, row: u32) -> Self {
        Self {
            column_start: col,
            column_end: col + 1,
            row_start: row,
            row_end: row + 1,
        }
    }

    /// Number of columns this span covers.
    #[must_use]
    pub const fn column_span(&self) -> u32 {
        self.column_end.saturating_sub(self.column_start)
    }

    /// Number of rows this span covers.
    #[must_use]
    pub const fn row_span(&self) -> u32 {
        self.row_end.saturating_sub(self.row_start)
    }

    /// Whether the cell (col, row) lies inside this span.
    #[must_use]
    pub const fn contains(&self, col: u32, row: u32) -> bool {
        col >= self.column_start && col < self.column_end && row >= self.row_start && row < self.row_end
    }

    /// The same footprint anchored at a new origin.
    #[must_use]
    pub const fn anchored_at(&self, col: u32, row: u32) -> Self {
        Self {
            column_start: col,
            column_end: col + self.column_span(),
            row_start: row,
            row_end: row + self.row_span(),
        }
    }

    /// Whether both axes satisfy `start < end`.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.column_start < self.column_end && self.row_start < self.row_end
    }

    /// Whether the span lies within a `columns` x `rows` grid.
    ///
    /// Bounds only; overlap with other items is a separate concern.
    #[must_use]
    pub const fn in_bounds(&self, columns: u32, rows: u32) -> bool {
        self.column_start >= 1
            && self.column_end <= columns + 1
            && self.row_start >= 1
            && self.row_end <= rows + 1
    }
}

/// An item placed on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridItem {
    /// Stable identity
    pub id: ItemId,
    /// Occupied cells
    pub span: Span,
    /// Display text
    pub label: String,
}

impl GridItem {
    /// Create a new item.
    #[must_use]
    pub fn new(id: ItemId, span: Span, label: impl Into<String>) -> Self {
        Self {
            id,
            span,
            label: label.into(),
        }
    }
}

/// Complete grid state: config plus items in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridState {
    /// Grid configuration
    pub config: GridConfig,
    /// Items in creation order
    pub items: Vec<GridItem>,
}

impl GridState {
    /// Create a state snapshot.
    #[must_use]
    pub const fn new(config: GridConfig, items: Vec<GridItem>) -> Self {
        Self { config, items }
    }
}
