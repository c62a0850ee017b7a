//! # Selector State
//!
//! Everything the interactive selector knows, in one struct. No terminal
//! types live here; the `tui` module reads this to draw a frame.
//!
//! ```text
//! Selector
//! ├── items: Vec<String>         // binary names, kept sorted
//! ├── sort_ascending: bool       // current sort order
//! ├── cursor: Cursor             // (column, row) into the grid
//! ├── grid: Grid                 // derived from items + terminal size
//! ├── width, height: u16         // last known terminal size
//! ├── status_message: String     // result of the last removal
//! ├── logs: LogBuffer            // captured log lines
//! ├── show_logs: bool            // log panel visibility
//! ├── log_capture: bool          // log bridge is active
//! └── mode: Mode                 // Browsing or Terminated
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::grid::{Cursor, Grid};
use crate::core::log_buffer::{LogBuffer, MAX_VISIBLE_LOG_LINES};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Browsing,
    Terminated,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub items: Vec<String>,
    pub sort_ascending: bool,
    pub cursor: Cursor,
    pub grid: Grid,
    pub width: u16,
    pub height: u16,
    pub status_message: String,
    pub logs: LogBuffer,
    pub show_logs: bool,
    /// True when log records are being forwarded into `logs`.
    pub log_capture: bool,
    pub mode: Mode,
}

impl Selector {
    pub fn new(items: Vec<String>, sort_ascending: bool) -> Self {
        let mut selector = Self {
            items,
            sort_ascending,
            ..Default::default()
        };
        selector.sort_items();
        selector
    }

    /// Enables the log panel subsystem, initially shown or hidden.
    pub fn with_log_capture(mut self, show_logs: bool) -> Self {
        self.log_capture = true;
        self.show_logs = show_logs;
        self
    }

    pub fn is_terminated(&self) -> bool {
        self.mode == Mode::Terminated
    }

    /// Name under the cursor, if the cursor addresses an item.
    pub fn selected(&self) -> Option<&str> {
        if self.grid.is_empty() {
            return None;
        }
        self.items
            .get(self.grid.index_of(self.cursor))
            .map(String::as_str)
    }

    pub fn sort_items(&mut self) {
        if self.sort_ascending {
            self.items.sort();
        } else {
            self.items.sort_by(|a, b| b.cmp(a));
        }
    }

    /// Whether the log panel takes up space in the current frame.
    pub fn log_panel_visible(&self) -> bool {
        self.show_logs && !self.logs.is_empty()
    }

    /// Lines the grid must leave free for the log panel.
    pub fn reserved_log_lines(&self) -> usize {
        if self.log_panel_visible() {
            self.logs.len().min(MAX_VISIBLE_LOG_LINES) + 1
        } else {
            0
        }
    }

    /// Recomputes the grid for the current items and size, then clamps the cursor.
    pub fn relayout(&mut self) {
        self.grid = Grid::compute(
            &self.items,
            self.width,
            self.height,
            self.reserved_log_lines(),
        );
        self.cursor = self.grid.clamp(self.cursor, self.items.len());
    }
}
