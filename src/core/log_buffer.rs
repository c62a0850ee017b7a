//! Bounded ring of formatted log lines for the log panel.

use std::collections::VecDeque;

/// Number of log lines kept; older lines are evicted first.
pub const MAX_LOG_LINES: usize = 50;
/// Number of log lines the panel shows.
pub const MAX_VISIBLE_LOG_LINES: usize = 5;

/// A captured log record on its way to the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMsg {
    /// Short level tag such as `INF` or `DBG`.
    pub level: String,
    pub message: String,
}

impl LogMsg {
    pub fn new(level: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::with_capacity(MAX_LOG_LINES)
    }
}

impl LogBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `[LEVEL] message`, evicting the oldest line when full.
    pub fn push(&mut self, level: &str, message: &str) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(format!("[{level}] {message}"));
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// The most recent `max` lines, oldest first.
    pub fn visible(&self, max: usize) -> impl Iterator<Item = &str> {
        let skip = self.lines.len().saturating_sub(max);
        self.iter().skip(skip)
    }
}
