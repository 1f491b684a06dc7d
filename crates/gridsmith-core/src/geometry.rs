//! Pointer-to-cell mapping and cell occupancy tests.
//!
//! All functions here are pure: they take a config and an item list and
//! compute over them without touching any state. Pointer coordinates and
//! the canvas bounding rectangle are in device pixels.

use crate::config::GridConfig;
use crate::item::{GridItem, ItemId, Span};
use serde::{Deserialize, Serialize};

/// A 2D point in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The canvas bounding rectangle in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A single grid cell addressed by 1-based column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Column index (1-based)
    pub col: u32,
    /// Row index (1-based)
    pub row: u32,
}

impl Cell {
    /// Create a new cell address.
    #[must_use]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Map a pointer position to the grid cell under it.
///
/// Divides the canvas into `columns x rows` equal cells and floors the
/// offset position into a 1-based cell index. Returns `None` when the
/// pointer falls outside the grid.
#[must_use]
pub fn cell_from_point(point: Point, canvas: Rect, config: &GridConfig) -> Option<Cell> {
    if config.columns == 0 || config.rows == 0 || canvas.width <= 0.0 || canvas.height <= 0.0 {
        return None;
    }

    let x = point.x - canvas.x;
    let y = point.y - canvas.y;
    let cell_width = canvas.width / config.columns as f32;
    let cell_height = canvas.height / config.rows as f32;

    let col = (x / cell_width).floor() as i64 + 1;
    let row = (y / cell_height).floor() as i64 + 1;

    if col < 1 || col > i64::from(config.columns) || row < 1 || row > i64::from(config.rows) {
        return None;
    }

    Some(Cell::new(col as u32, row as u32))
}

/// Find the item occupying a cell, if any.
///
/// First match in list order wins; overlapping items (which the editor
/// never commits) resolve to the earlier one. An id in `exclude` is
/// skipped, which lets a gesture ignore the item it is moving.
#[must_use]
pub fn item_at_cell(
    items: &[GridItem],
    col: u32,
    row: u32,
    exclude: Option<ItemId>,
) -> Option<&GridItem> {
    items
        .iter()
        .find(|item| exclude != Some(item.id) && item.span.contains(col, row))
}

/// Ids of the distinct items a span would cover, in list order.
#[must_use]
pub fn overlapped_items(items: &[GridItem], span: Span, exclude: ItemId) -> Vec<ItemId> {
    items
        .iter()
        .filter(|item| {
            item.id != exclude
                && item.span.column_start < span.column_end
                && span.column_start < item.span.column_end
                && item.span.row_start < span.row_end
                && span.row_start < item.span.row_end
        })
        .map(|item| item.id)
        .collect()
}
