//! Interaction state machine for the editor canvas.
//!
//! [`GridEditor`] owns the authoritative item list, the current
//! selection, and at most one in-progress gesture (drag or resize). A
//! gesture never mutates the item list directly: every pointer-move
//! event recomputes a full candidate map of item spans (the preview)
//! from the pointer position and the authoritative list, and the map is
//! applied atomically on release. This keeps move handling idempotent —
//! dropped or out-of-order move events cannot corrupt state — and makes
//! a gesture trivially cancellable by discarding the preview.

use crate::config::GridConfig;
use crate::geometry::{self, Cell, Point, Rect};
use crate::item::{GridItem, GridState, ItemId, Span};
use std::collections::HashMap;

/// Candidate item spans shown during an in-progress gesture.
pub type PreviewMap = HashMap<ItemId, Span>;

/// Cell-unit offset between the pointer and a dragged item's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct CellOffset {
    col: i64,
    row: i64,
}

/// An in-progress gesture on the selected item.
#[derive(Debug, Clone)]
enum Gesture {
    Drag {
        offset: CellOffset,
        preview: PreviewMap,
    },
    Resize {
        preview: PreviewMap,
    },
}

impl Gesture {
    fn preview(&self) -> &PreviewMap {
        match self {
            Self::Drag { preview, .. } | Self::Resize { preview } => preview,
        }
    }
}

/// Interaction phase, as visible to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected
    Idle,
    /// An item is selected
    Selected(ItemId),
    /// The selected item is being dragged
    Dragging(ItemId),
    /// The selected item is being resized
    Resizing(ItemId),
}

/// The interaction state machine driving the editor canvas.
///
/// The shell forwards discrete pointer events (click, press, move,
/// release) and renders from [`display_span`](Self::display_span), which
/// reflects the live preview during a gesture and the committed spans
/// otherwise.
#[derive(Debug, Clone, Default)]
pub struct GridEditor {
    items: Vec<GridItem>,
    selected: Option<ItemId>,
    gesture: Option<Gesture>,
    next_id: u64,
}

impl GridEditor {
    /// Create an empty editor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor over an existing item list.
    #[must_use]
    pub fn with_items(items: Vec<GridItem>) -> Self {
        let next_id = items.iter().map(|i| i.id.0 + 1).max().unwrap_or(0);
        Self {
            items,
            selected: None,
            gesture: None,
            next_id,
        }
    }

    /// The authoritative item list, in creation order.
    #[must_use]
    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    /// The currently selected item, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.selected, &self.gesture) {
            (Some(id), Some(Gesture::Drag { .. })) => Phase::Dragging(id),
            (Some(id), Some(Gesture::Resize { .. })) => Phase::Resizing(id),
            (Some(id), None) => Phase::Selected(id),
            (None, _) => Phase::Idle,
        }
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Some(Gesture::Drag { .. }))
    }

    /// Whether a resize gesture is in progress.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture, Some(Gesture::Resize { .. }))
    }

    /// The live preview map of the current gesture, if one is active.
    #[must_use]
    pub fn preview(&self) -> Option<&PreviewMap> {
        self.gesture.as_ref().map(Gesture::preview)
    }

    /// The span to render for an item: its preview entry during a
    /// gesture, its committed span otherwise.
    #[must_use]
    pub fn display_span(&self, id: ItemId) -> Option<Span> {
        if let Some(span) = self.preview().and_then(|p| p.get(&id)) {
            return Some(*span);
        }
        self.items.iter().find(|i| i.id == id).map(|i| i.span)
    }

    /// Snapshot the full grid state for the shell.
    #[must_use]
    pub fn state(&self, config: GridConfig) -> GridState {
        GridState::new(config, self.items.clone())
    }

    /// Replace the item list with an externally edited snapshot.
    ///
    /// Drops any in-progress gesture; clears the selection if the
    /// selected item is gone from the new list.
    pub fn set_items(&mut self, items: Vec<GridItem>) {
        self.items = items;
        self.gesture = None;
        let floor = self.items.iter().map(|i| i.id.0 + 1).max().unwrap_or(0);
        self.next_id = self.next_id.max(floor);
        if let Some(id) = self.selected {
            if !self.items.iter().any(|i| i.id == id) {
                self.selected = None;
            }
        }
    }

    /// Click on a grid cell: create a 1x1 item there if the cell is in
    /// bounds and unoccupied, and select it.
    ///
    /// Labels count up from 1 in creation order. Returns the new item's
    /// id, or `None` when the click was ignored.
    pub fn click_cell(&mut self, config: &GridConfig, col: u32, row: u32) -> Option<ItemId> {
        if col < 1 || col > config.columns || row < 1 || row > config.rows {
            return None;
        }
        if geometry::item_at_cell(&self.items, col, row, None).is_some() {
            return None;
        }

        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        let label = (self.items.len() + 1).to_string();
        self.items.push(GridItem::new(id, Span::cell(col, row), label));
        self.gesture = None;
        self.selected = Some(id);
        Some(id)
    }

    /// Click on an item: toggle its selection.
    ///
    /// Discards any in-progress gesture. Unknown ids are ignored.
    pub fn click_item(&mut self, id: ItemId) {
        if !self.items.iter().any(|i| i.id == id) {
            return;
        }
        self.gesture = None;
        self.selected = if self.selected == Some(id) { None } else { Some(id) };
    }

    /// Click on the canvas background: clear the selection.
    pub fn deselect(&mut self) {
        self.gesture = None;
        self.selected = None;
    }

    /// Press-and-drag starting on the selected item's body.
    ///
    /// Records the cell offset between the pointer and the item's origin
    /// so the item does not jump under the cursor, and initializes the
    /// preview to every item's current span. Returns false when nothing
    /// is selected.
    pub fn begin_drag(&mut self, config: &GridConfig, canvas: Rect, point: Point) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        let Some(origin) = self.span_of(id) else {
            return false;
        };
        let offset = geometry::cell_from_point(point, canvas, config).map_or_else(
            CellOffset::default,
            |cell| CellOffset {
                col: i64::from(cell.col) - i64::from(origin.column_start),
                row: i64::from(cell.row) - i64::from(origin.row_start),
            },
        );
        self.gesture = Some(Gesture::Drag {
            offset,
            preview: self.full_preview(),
        });
        true
    }

    /// Press-and-drag starting on the selected item's resize handle.
    ///
    /// Returns false when nothing is selected.
    pub fn begin_resize(&mut self) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        if self.span_of(id).is_none() {
            return false;
        }
        self.gesture = Some(Gesture::Resize {
            preview: self.full_preview(),
        });
        true
    }

    /// Pointer moved during a gesture: recompute the preview.
    ///
    /// The full candidate map is rebuilt from the pointer position and
    /// the authoritative item list on every event. A pointer outside the
    /// canvas, or a resize that would cover another item, leaves the
    /// previous preview in place.
    pub fn pointer_moved(&mut self, config: &GridConfig, canvas: Rect, point: Point) {
        let Some(id) = self.selected else {
            return;
        };
        let Some(cell) = geometry::cell_from_point(point, canvas, config) else {
            return;
        };
        let Some(original) = self.span_of(id) else {
            return;
        };

        match &self.gesture {
            Some(Gesture::Drag { offset, .. }) => {
                let next = self.drag_preview(config, id, original, cell, *offset);
                if let Some(Gesture::Drag { preview, .. }) = &mut self.gesture {
                    *preview = next;
                }
            }
            Some(Gesture::Resize { .. }) => {
                if let Some(next) = self.resize_preview(config, id, original, cell) {
                    if let Some(Gesture::Resize { preview }) = &mut self.gesture {
                        *preview = next;
                    }
                }
            }
            None => {}
        }
    }

    /// Pointer released: commit the gesture.
    ///
    /// Every item adopts its preview entry if present and keeps its
    /// current span otherwise; the editor returns to the selected state.
    pub fn pointer_released(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            let preview = match gesture {
                Gesture::Drag { preview, .. } | Gesture::Resize { preview } => preview,
            };
            for item in &mut self.items {
                if let Some(span) = preview.get(&item.id) {
                    item.span = *span;
                }
            }
        }
    }

    /// Abandon the gesture without committing the preview.
    pub fn cancel_gesture(&mut self) {
        self.gesture = None;
    }

    /// Delete an item. Unknown ids are a no-op; deleting the selected
    /// item returns the editor to idle.
    pub fn delete_item(&mut self, id: ItemId) {
        self.items.retain(|i| i.id != id);
        if self.selected == Some(id) {
            self.selected = None;
            self.gesture = None;
        }
    }

    /// Remove all items and reset to idle.
    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = None;
        self.gesture = None;
    }

    fn span_of(&self, id: ItemId) -> Option<Span> {
        self.items.iter().find(|i| i.id == id).map(|i| i.span)
    }

    fn full_preview(&self) -> PreviewMap {
        self.items.iter().map(|i| (i.id, i.span)).collect()
    }

    /// Candidate map for a drag tick: the dragged item moves to the
    /// clamped target span, and a single covered item swaps into the
    /// dragged item's original position when its footprint fits there.
    /// Two or more covered items stay put — ambiguous multi-item overlap
    /// takes no swap action.
    fn drag_preview(
        &self,
        config: &GridConfig,
        id: ItemId,
        original: Span,
        cell: Cell,
        offset: CellOffset,
    ) -> PreviewMap {
        let width = i64::from(original.column_span());
        let height = i64::from(original.row_span());

        // Clamp the candidate origin so the span stays inside the grid.
        let max_col = (i64::from(config.columns) - width + 1).max(1);
        let max_row = (i64::from(config.rows) - height + 1).max(1);
        let col_start = (i64::from(cell.col) - offset.col).clamp(1, max_col);
        let row_start = (i64::from(cell.row) - offset.row).clamp(1, max_row);

        let target = Span::new(
            col_start as u32,
            (col_start + width) as u32,
            row_start as u32,
            (row_start + height) as u32,
        );

        let mut preview = self.full_preview();
        preview.insert(id, target);

        let covered = geometry::overlapped_items(&self.items, target, id);
        if let [other] = covered.as_slice() {
            if let Some(footprint) = self.span_of(*other) {
                let swapped = footprint.anchored_at(original.column_start, original.row_start);
                if swapped.in_bounds(config.columns, config.rows) {
                    preview.insert(*other, swapped);
                }
            }
        }

        preview
    }

    /// Candidate map for a resize tick, or `None` when the new span
    /// would cover another item and the tick is rejected.
    fn resize_preview(
        &self,
        config: &GridConfig,
        id: ItemId,
        original: Span,
        cell: Cell,
    ) -> Option<PreviewMap> {
        let column_end = (cell.col + 1)
            .min(config.columns + 1)
            .max(original.column_start + 1);
        let row_end = (cell.row + 1)
            .min(config.rows + 1)
            .max(original.row_start + 1);
        let target = Span::new(original.column_start, column_end, original.row_start, row_end);

        if !geometry::overlapped_items(&self.items, target, id).is_empty() {
            return None;
        }

        let mut preview = self.full_preview();
        preview.insert(id, target);
        Some(preview)
    }
}
