//! # Actions
//!
//! Everything that can happen in the selector becomes an `Action`.
//! User presses Enter? That's `Action::Remove`.
//! The removal went through? That's `Action::Removed { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns the effects the caller must carry out. No I/O here:
//! removing a file, re-listing the directory and polling the log channel are
//! all described as `Effect`s and their outcomes come back as new actions.
//!
//! ```text
//! State + Action  →  update()  →  New State + Vec<Effect>
//! ```

use crate::core::log_buffer::LogMsg;
use crate::core::state::{Mode, Selector};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ToggleSort,
    ToggleLogs,
    /// Remove the binary under the cursor.
    Remove,
    /// A removal succeeded; `remaining` is a fresh directory listing.
    Removed { name: String, remaining: Vec<String> },
    RemoveFailed { name: String, reason: String },
    Resize { width: u16, height: u16 },
    Log(LogMsg),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The selector is done; stop the event loop.
    Quit,
    /// Remove `name` from the bin directory and report back.
    RemoveBinary { name: String },
    /// Try to receive one log message without blocking.
    PollLogs,
}

pub fn update(app: &mut Selector, action: Action) -> Vec<Effect> {
    if app.is_terminated() {
        return Vec::new();
    }

    let mut effects = Vec::new();
    match action {
        Action::Quit => {
            app.mode = Mode::Terminated;
            return vec![Effect::Quit];
        }
        Action::MoveUp => {
            app.cursor.row = app.cursor.row.saturating_sub(1);
        }
        Action::MoveDown => {
            let mut next = app.cursor;
            next.row += 1;
            if next.row < app.grid.rows && app.grid.index_of(next) < app.items.len() {
                app.cursor = next;
            }
        }
        Action::MoveLeft => {
            app.cursor.column = app.cursor.column.saturating_sub(1);
        }
        Action::MoveRight => {
            let mut next = app.cursor;
            next.column += 1;
            if next.column < app.grid.columns && app.grid.index_of(next) < app.items.len() {
                app.cursor = next;
            }
        }
        Action::ToggleSort => {
            // The cursor keeps its index, not its item
            app.sort_ascending = !app.sort_ascending;
            app.sort_items();
            app.relayout();
        }
        Action::ToggleLogs => {
            if app.log_capture {
                app.show_logs = !app.show_logs;
                app.relayout();
            }
        }
        Action::Remove => {
            if let Some(name) = app.selected() {
                effects.push(Effect::RemoveBinary {
                    name: name.to_string(),
                });
            }
        }
        Action::Removed { name, remaining } => {
            app.status_message = format!("Removed {name}");
            app.items = remaining;
            app.sort_items();

            if app.items.is_empty() {
                app.relayout();
                app.mode = Mode::Terminated;
                return vec![Effect::Quit];
            }

            // Clamp against the old grid first, then lay out the shorter list
            app.cursor = app.grid.clamp(app.cursor, app.items.len());
            app.relayout();
        }
        Action::RemoveFailed { name, reason } => {
            app.status_message = format!("Error removing {name}: {reason}");
        }
        Action::Resize { width, height } => {
            app.width = width;
            app.height = height;
            app.relayout();
        }
        Action::Log(msg) => {
            app.logs.push(&msg.level, &msg.message);
            app.relayout();
        }
    }

    // Re-arm the log poll on every cycle so queued messages drain
    if app.log_capture {
        effects.push(Effect::PollLogs);
    }
    effects
}
