//! Forest-loss grid layout and per-visit animation state.
//!
//! The grid never renders more than [`MAX_GRID_ITEMS`] items; a larger
//! trees-owed figure is shown as a separate numeric overflow. Layout math
//! is pure so renderers can place the moving indicator at any viewport
//! width.

use std::collections::BTreeSet;

use serde::Serialize;
use tokio::task::JoinHandle;

/// Cap on discrete grid items.
pub const MAX_GRID_ITEMS: u32 = 100;

/// Column count for a viewport width (CSS-pixel breakpoints).
pub fn grid_columns(viewport_width: u32) -> usize {
    if viewport_width >= 768 {
        10
    } else if viewport_width >= 640 {
        8
    } else {
        5
    }
}

/// Fixed grid geometry for one forest display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub items: usize,
    pub cols: usize,
    pub rows: usize,
}

impl GridLayout {
    pub fn new(items: usize, cols: usize) -> Self {
        Self {
            items,
            cols,
            rows: items.div_ceil(cols.max(1)),
        }
    }

    /// Center of the item's cell as `(left, top)` percentages of the grid
    /// bounding box; `None` for out-of-range indices.
    pub fn cell_center(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.items {
            return None;
        }
        let row = index / self.cols;
        let col = index % self.cols;
        let left = (col as f64 / self.cols as f64) * 100.0 + 100.0 / self.cols as f64 / 2.0;
        let top = (row as f64 / self.rows as f64) * 100.0 + 100.0 / self.rows as f64 / 2.0;
        Some((left, top))
    }
}

/// Mutable animation state scoped to one visit of the forest slide.
///
/// Created on entry, discarded — not merely hidden — on exit. Dropping it
/// aborts the driver task, so no timer outlives the visit.
#[derive(Debug)]
pub(crate) struct ForestState {
    pub display_count: u32,
    pub trees_owed: u32,
    /// Item the moving indicator is parked on.
    pub current: Option<u32>,
    /// Monotonically growing set of felled items.
    pub completed: BTreeSet<u32>,
    pub finished: bool,
    pub task: Option<JoinHandle<()>>,
}

impl ForestState {
    pub fn new(trees_owed: u32) -> Self {
        Self {
            display_count: trees_owed.min(MAX_GRID_ITEMS),
            trees_owed,
            current: None,
            completed: BTreeSet::new(),
            finished: false,
            task: None,
        }
    }

    pub fn snapshot(&self) -> ForestSnapshot {
        ForestSnapshot {
            display_count: self.display_count,
            overflow: (self.trees_owed > MAX_GRID_ITEMS).then_some(self.trees_owed),
            current: self.current,
            completed: self.completed.clone(),
            finished: self.finished,
        }
    }
}

impl Drop for ForestState {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Read-only view of the animation for renderers.
#[derive(Debug, Clone, Serialize)]
pub struct ForestSnapshot {
    /// Items actually laid out in the grid.
    pub display_count: u32,
    /// Full trees-owed figure, present only when it exceeds the grid cap.
    pub overflow: Option<u32>,
    /// Item currently being processed.
    pub current: Option<u32>,
    /// Felled items, ascending.
    pub completed: BTreeSet<u32>,
    /// Whether the animation has run to the end.
    pub finished: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_breakpoints() {
        assert_eq!(grid_columns(1024), 10);
        assert_eq!(grid_columns(768), 10);
        assert_eq!(grid_columns(767), 8);
        assert_eq!(grid_columns(640), 8);
        assert_eq!(grid_columns(639), 5);
        assert_eq!(grid_columns(320), 5);
    }

    #[test]
    fn rows_round_up() {
        assert_eq!(GridLayout::new(100, 10).rows, 10);
        assert_eq!(GridLayout::new(17, 5).rows, 4);
        assert_eq!(GridLayout::new(1, 8).rows, 1);
        assert_eq!(GridLayout::new(0, 8).rows, 0);
    }

    #[test]
    fn cell_center_is_cell_midpoint() {
        let grid = GridLayout::new(100, 10);
        // First cell of a 10x10 grid centers at 5%,5%.
        assert_eq!(grid.cell_center(0), Some((5.0, 5.0)));
        // Item 11 sits in row 1, col 1.
        assert_eq!(grid.cell_center(11), Some((15.0, 15.0)));
        // Last cell centers at 95%,95%.
        assert_eq!(grid.cell_center(99), Some((95.0, 95.0)));
        assert_eq!(grid.cell_center(100), None);
    }

    #[test]
    fn display_count_caps_at_grid_limit() {
        let small = ForestState::new(17);
        assert_eq!(small.display_count, 17);
        assert!(small.snapshot().overflow.is_none());

        let big = ForestState::new(206);
        assert_eq!(big.display_count, 100);
        assert_eq!(big.snapshot().overflow, Some(206));
    }
}
