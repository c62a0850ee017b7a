//! # Grid Layout
//!
//! Lays the binary names out as a grid that fills columns top to bottom.
//! A cursor `(column, row)` addresses item `row + column * rows`.
//!
//! ```text
//!  rows = 3, columns = 2, 5 items
//!
//!  0  3
//!  1  4
//!  2
//! ```
//!
//! Everything here is derived from the item list and terminal size, so the
//! grid is recomputed after any change instead of being patched.

use unicode_width::UnicodeWidthStr;

/// Spacing added to the longest name to get a column width.
pub const COLUMN_PADDING: usize = 3;
/// Horizontal space lost to the frame's border and padding.
pub const WIDTH_ADJUSTMENT: usize = 4;
/// Vertical space taken by the title, blank lines, status and footer.
pub const HEIGHT_ADJUSTMENT: usize = 7;

/// Cursor position in grid coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub column: usize,
    pub row: usize,
}

impl Cursor {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// Grid geometry. `rows` and `columns` are both 0 for an empty item list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grid {
    pub columns: usize,
    pub rows: usize,
    /// Rows that fit on screen. Equal to `rows` unless the list overflows.
    pub visible_rows: usize,
}

impl Grid {
    /// Computes the layout for `items` in a `width` x `height` terminal.
    ///
    /// `reserved_lines` is the height claimed by the log panel.
    pub fn compute(items: &[String], width: u16, height: u16, reserved_lines: usize) -> Self {
        let count = items.len();
        if count == 0 {
            return Self::default();
        }

        let column_width = column_width(items);
        let available_width = (width as usize).saturating_sub(WIDTH_ADJUSTMENT);
        let available_height = (height as usize)
            .saturating_sub(HEIGHT_ADJUSTMENT)
            .max(1)
            .saturating_sub(reserved_lines)
            .max(1);

        let max_columns = (available_width / column_width).max(1);
        let mut rows = available_height.min(count).max(1);
        let columns = max_columns.min(count.div_ceil(rows));

        // Narrow terminals can't fit every column; grow downwards instead of
        // leaving items unreachable.
        if rows * columns < count {
            rows = count.div_ceil(columns);
        }

        Self {
            columns,
            rows,
            visible_rows: available_height.min(rows),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column-major index of the item under `cursor`.
    pub fn index_of(&self, cursor: Cursor) -> usize {
        cursor.row + cursor.column * self.rows
    }

    /// Grid position of `index`. Only meaningful for a non-empty grid.
    pub fn position_of(&self, index: usize) -> Cursor {
        Cursor {
            column: index / self.rows,
            row: index % self.rows,
        }
    }

    /// Pulls `cursor` back onto an existing item.
    pub fn clamp(&self, cursor: Cursor, count: usize) -> Cursor {
        if self.is_empty() || count == 0 {
            return Cursor::default();
        }

        let mut clamped = Cursor {
            column: cursor.column.min(self.columns - 1),
            row: cursor.row.min(self.rows - 1),
        };
        if self.index_of(clamped) >= count {
            clamped = self.position_of(count - 1);
        }
        clamped
    }

    /// First grid row to draw so that `cursor_row` stays on screen.
    pub fn first_visible_row(&self, cursor_row: usize) -> usize {
        if self.visible_rows == 0 || cursor_row < self.visible_rows {
            0
        } else {
            cursor_row + 1 - self.visible_rows
        }
    }
}

/// Width of one grid column: the widest name plus padding.
pub fn column_width(items: &[String]) -> usize {
    let longest = items.iter().map(|item| item.width()).max().unwrap_or(0);
    longest + COLUMN_PADDING
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_item() {
        let grid = Grid::compute(&names(&["vhs"]), 80, 24, 0);
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.rows, 1);
    }

    #[test]
    fn test_few_items_fill_one_column() {
        let grid = Grid::compute(&names(&["vhs", "age", "tool"]), 80, 24, 0);
        assert_eq!((grid.columns, grid.rows), (1, 3));

        let narrow = Grid::compute(&names(&["vhs", "age", "tool"]), 20, 24, 0);
        assert_eq!((narrow.columns, narrow.rows), (1, 3));
    }

    #[test]
    fn test_empty_items() {
        let grid = Grid::compute(&[], 80, 24, 0);
        assert_eq!(grid, Grid::default());
        assert!(grid.is_empty());
        assert_eq!(grid.clamp(Cursor::new(3, 4), 0), Cursor::default());
    }

    #[test]
    fn test_items_spill_into_columns() {
        // 24 high leaves 17 rows; 40 items need 3 columns
        let items: Vec<String> = (0..40).map(|i| format!("bin{i:02}")).collect();
        let grid = Grid::compute(&items, 80, 24, 0);
        assert_eq!(grid.rows, 17);
        assert_eq!(grid.columns, 3);
        assert_eq!(grid.visible_rows, 17);
    }

    #[test]
    fn test_reserved_lines_shrink_rows() {
        let items: Vec<String> = (0..40).map(|i| format!("bin{i:02}")).collect();
        let grid = Grid::compute(&items, 80, 24, 6);
        assert_eq!(grid.rows, 11);
        assert_eq!(grid.columns, 4);
    }

    #[test]
    fn test_tiny_terminal_still_has_one_row() {
        let grid = Grid::compute(&names(&["a", "b"]), 0, 0, 10);
        assert!(grid.rows >= 1);
        assert!(grid.columns >= 1);
        assert!(grid.rows * grid.columns >= 2);
    }

    #[test]
    fn test_overflow_grows_rows() {
        // Width only allows one column, height only 17 rows
        let items: Vec<String> = (0..30).map(|i| format!("binary-{i:02}")).collect();
        let grid = Grid::compute(&items, 20, 24, 0);
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.rows, 30);
        assert_eq!(grid.visible_rows, 17);
        assert_eq!(grid.first_visible_row(5), 0);
        assert_eq!(grid.first_visible_row(16), 0);
        assert_eq!(grid.first_visible_row(17), 1);
        assert_eq!(grid.first_visible_row(29), 13);
    }

    #[test]
    fn test_capacity_holds_every_item() {
        for count in 1..60 {
            let items: Vec<String> = (0..count).map(|i| format!("b{i}")).collect();
            for (width, height) in [(0, 0), (10, 5), (80, 24), (200, 60), (30, 100)] {
                let grid = Grid::compute(&items, width, height, 0);
                assert!(grid.rows >= 1 && grid.columns >= 1);
                assert!(
                    grid.rows * grid.columns >= count,
                    "{count} items in {width}x{height}: {grid:?}"
                );
            }
        }
    }

    #[test]
    fn test_index_and_position_are_column_major() {
        let grid = Grid {
            columns: 2,
            rows: 3,
            visible_rows: 3,
        };
        assert_eq!(grid.index_of(Cursor::new(0, 2)), 2);
        assert_eq!(grid.index_of(Cursor::new(1, 0)), 3);
        assert_eq!(grid.position_of(4), Cursor::new(1, 1));
    }

    #[test]
    fn test_clamp_snaps_to_last_item() {
        let grid = Grid {
            columns: 2,
            rows: 3,
            visible_rows: 3,
        };
        // Bottom of the partially filled second column
        assert_eq!(grid.clamp(Cursor::new(1, 2), 5), Cursor::new(1, 1));
        assert_eq!(grid.clamp(Cursor::new(5, 9), 5), Cursor::new(1, 1));
        assert_eq!(grid.clamp(Cursor::new(1, 0), 6), Cursor::new(1, 0));
    }

    #[test]
    fn test_column_width_uses_display_width() {
        assert_eq!(column_width(&names(&["age", "vhs", "golangci-lint"])), 16);
        assert_eq!(column_width(&names(&["日本"])), 4 + COLUMN_PADDING);
    }
}
