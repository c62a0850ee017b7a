//! # Frame Rendering
//!
//! Turns a `Selector` into the text of one frame. `view()` is a pure
//! function: the same state always produces the same `Text`, so frames can
//! be checked line by line in tests without a terminal.
//!
//! ## Frame Layout
//!
//! ```text
//! Select a binary to remove:      title
//!                                 blank
//! ❯ age     gopls                 grid, one line per row
//!   dlv     vhs
//!                                 blank
//! ─ Log Messages ─                log panel (optional)
//! [INF] ...
//!                                 blank
//! Removed tool                    status (optional)
//!                                 padding up to the terminal height
//! ↑/k: up  ↓/j: down ...          footer
//! ```
//!
//! The grid is indexed column-major (items run down each column) but drawn
//! row by row, so one line holds items `row`, `row + rows`, `row + 2*rows`...

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::config::Palette;
use crate::core::grid::column_width;
use crate::core::log_buffer::MAX_VISIBLE_LOG_LINES;
use crate::core::state::Selector;
use crate::tui::component::Component;

/// Left padding of the whole frame.
pub const LEFT_PADDING: u16 = 2;
/// Title, two blank lines and footer.
const TOTAL_HEIGHT_BASE: usize = 4;
/// Log panel header plus its trailing blank line.
const LOG_PANEL_SEPARATOR_LINES: usize = 2;

pub const TITLE: &str = "Select a binary to remove:";
pub const EMPTY_MESSAGE: &str = "No binaries found.";
const LOG_HEADER: &str = "─ Log Messages ─";

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub title: Style,
    pub cursor: Style,
    pub footer: Style,
    pub status: Style,
    pub log: Style,
    pub cursor_symbol: String,
}

impl Theme {
    pub fn from_palette(palette: &Palette) -> Self {
        let fg = |color: u8| Style::default().fg(Color::Indexed(color));
        Self {
            title: fg(palette.title_color).add_modifier(Modifier::BOLD),
            cursor: fg(palette.cursor_color),
            footer: fg(palette.footer_color),
            status: fg(palette.status_color),
            log: fg(palette.log_color),
            cursor_symbol: palette.cursor.clone(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}

/// Key help. The log toggle is only listed when there is a log panel.
pub fn footer_text(log_toggle: bool) -> String {
    let mut text =
        String::from("↑/k: up  ↓/j: down  ←/h: left  →/l: right  Enter: remove  s: toggle sort");
    if log_toggle {
        text.push_str("  L: logs");
    }
    text.push_str("  q: quit");
    text
}

pub fn view(app: &Selector, theme: &Theme) -> Text<'static> {
    if app.items.is_empty() {
        return Text::raw(EMPTY_MESSAGE);
    }

    let mut lines = vec![Line::styled(TITLE, theme.title), Line::default()];

    let grid = grid_lines(app, theme);
    let grid_height = grid.len();
    lines.extend(grid);
    lines.push(Line::default());

    let mut log_panel_lines = 0;
    if app.log_panel_visible() {
        lines.push(Line::styled(LOG_HEADER, theme.log));
        let before = lines.len();
        lines.extend(
            app.logs
                .visible(MAX_VISIBLE_LOG_LINES)
                .map(|entry| Line::styled(entry.to_string(), theme.log)),
        );
        log_panel_lines = lines.len() - before + LOG_PANEL_SEPARATOR_LINES;
        lines.push(Line::default());
    }

    let mut status_lines = 0;
    if !app.status_message.is_empty() {
        lines.push(Line::styled(app.status_message.clone(), theme.status));
        status_lines = 1;
    }

    let used = grid_height + TOTAL_HEIGHT_BASE + status_lines + log_panel_lines;
    for _ in used..app.height as usize {
        lines.push(Line::default());
    }

    lines.push(Line::styled(footer_text(app.log_capture), theme.footer));
    Text::from(lines)
}

fn grid_lines(app: &Selector, theme: &Theme) -> Vec<Line<'static>> {
    let grid = app.grid;
    let width = column_width(&app.items);
    let prefix_width = theme.cursor_symbol.width();
    let blank_prefix = " ".repeat(prefix_width);

    let first = grid.first_visible_row(app.cursor.row);
    let last = (first + grid.visible_rows).min(grid.rows);

    (first..last)
        .map(|row| {
            let mut spans = Vec::with_capacity(grid.columns * 2);
            for column in 0..grid.columns {
                let index = row + column * grid.rows;
                let Some(item) = app.items.get(index) else {
                    break;
                };

                if row == app.cursor.row && column == app.cursor.column {
                    spans.push(Span::styled(theme.cursor_symbol.clone(), theme.cursor));
                } else {
                    spans.push(Span::raw(blank_prefix.clone()));
                }

                let padding = width.saturating_sub(prefix_width + item.width());
                spans.push(Span::raw(format!("{item}{}", " ".repeat(padding))));
            }
            Line::from(spans)
        })
        .collect()
}

/// The whole selector screen as a ratatui component.
pub struct SelectorView<'a> {
    pub selector: &'a Selector,
    pub theme: &'a Theme,
}

impl<'a> SelectorView<'a> {
    pub fn new(selector: &'a Selector, theme: &'a Theme) -> Self {
        Self { selector, theme }
    }
}

impl Component for SelectorView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(view(self.selector, self.theme))
            .block(Block::new().padding(Padding::left(LEFT_PADDING)));
        frame.render_widget(paragraph, area);
    }
}
