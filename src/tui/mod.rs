//! # TUI Adapter
//!
//! The ratatui-specific layer. It owns the terminal and turns keyboard
//! events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! crossterm event ──► Action ──► update() ──► Effects
//!                                   ▲            │
//!                                   │            ├─ RemoveBinary → Filesystem → Removed / RemoveFailed
//!                                   └────────────┼─ PollLogs     → log bridge → Log
//!                                                └─ Quit
//! ```
//!
//! Effects are executed by [`Program::dispatch`], and their outcomes are fed
//! back through the same reducer until nothing is left to do. Only then does
//! the runner draw the next frame.
//!
//! ## Log Capture
//!
//! In verbose mode the global logger is pointed at a bounded channel for the
//! lifetime of the selector (see [`log_bridge`]). Removal logs then show up
//! in the log panel instead of scribbling over the alternate screen.

mod component;
pub mod event;
pub mod log_bridge;
pub mod render;

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use ratatui::DefaultTerminal;
use ratatui::text::Text;
use thiserror::Error;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::log_buffer::{LogMsg, MAX_LOG_LINES};
use crate::core::state::Selector;
use crate::fs::Filesystem;
use crate::logging::LogCapture;
use crate::tui::component::Component;
use crate::tui::log_bridge::LogReceiver;
use crate::tui::render::{SelectorView, Theme};

pub use render::view;

#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("no binaries found in directory: {}", dir.display())]
    NoBinaries { dir: PathBuf },
    #[error("TUI program failed: {0}")]
    Runner(#[source] io::Error),
}

/// Drives a [`Program`] until it terminates.
///
/// The default runner owns a real terminal; tests script their own.
pub trait ProgramRunner {
    fn run(&mut self, program: &mut Program<'_>) -> io::Result<()>;
}

/// The selector state plus everything needed to carry out its effects.
pub struct Program<'a> {
    selector: Selector,
    theme: Theme,
    dir: PathBuf,
    verbose: bool,
    fs: &'a dyn Filesystem,
    logs: Option<LogReceiver>,
}

impl<'a> Program<'a> {
    pub fn new(
        selector: Selector,
        theme: Theme,
        dir: impl Into<PathBuf>,
        verbose: bool,
        fs: &'a dyn Filesystem,
        logs: Option<LogReceiver>,
    ) -> Self {
        Self {
            selector,
            theme,
            dir: dir.into(),
            verbose,
            fs,
            logs,
        }
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn is_terminated(&self) -> bool {
        self.selector.is_terminated()
    }

    /// The frame for the current state.
    pub fn view(&self) -> Text<'static> {
        view(&self.selector, &self.theme)
    }

    pub fn draw(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        SelectorView::new(&self.selector, &self.theme).render(frame, area);
    }

    /// Feeds `action` through the reducer and runs the resulting effects,
    /// including any actions those effects produce.
    pub fn dispatch(&mut self, action: Action) {
        let mut pending = VecDeque::from([action]);
        while let Some(action) = pending.pop_front() {
            for effect in update(&mut self.selector, action) {
                match effect {
                    Effect::Quit => {}
                    Effect::RemoveBinary { name } => pending.push_back(self.remove(name)),
                    Effect::PollLogs => {
                        if let Some(msg) = self.poll_log() {
                            pending.push_back(Action::Log(msg));
                        }
                    }
                }
            }
        }
    }

    fn remove(&self, name: String) -> Action {
        let path = self.fs.adjust_binary_path(&self.dir, &name);
        match self.fs.remove_binary(&path, &name, self.verbose) {
            Ok(()) => Action::Removed {
                remaining: self.fs.list_binaries(&self.dir),
                name,
            },
            Err(e) => {
                debug!("Failed to remove {}: {}", name, e);
                Action::RemoveFailed {
                    name,
                    reason: e.to_string(),
                }
            }
        }
    }

    fn poll_log(&self) -> Option<LogMsg> {
        self.logs.as_ref().and_then(LogReceiver::poll)
    }
}

/// Runs the selector on the real terminal (alternate screen, raw mode).
#[derive(Debug, Default)]
pub struct TerminalRunner;

impl ProgramRunner for TerminalRunner {
    fn run(&mut self, program: &mut Program<'_>) -> io::Result<()> {
        let mut terminal = ratatui::try_init()?;
        let result = drive(&mut terminal, program);
        ratatui::restore();
        result
    }
}

fn drive(terminal: &mut DefaultTerminal, program: &mut Program<'_>) -> io::Result<()> {
    let size = terminal.size()?;
    program.dispatch(Action::Resize {
        width: size.width,
        height: size.height,
    });

    while !program.is_terminated() {
        terminal.draw(|f| program.draw(f))?;
        let action = event::next_action()?;
        program.dispatch(action);
    }
    Ok(())
}

/// Lets the user pick binaries in `dir` to remove until they quit or the
/// directory is empty.
///
/// Fails without starting the runner if `dir` has no binaries.
pub fn run_interactive_selector(
    dir: &Path,
    config: &ResolvedConfig,
    capture: &LogCapture,
    fs: &dyn Filesystem,
    runner: &mut dyn ProgramRunner,
) -> Result<(), SelectorError> {
    let items = fs.list_binaries(dir);
    if items.is_empty() {
        return Err(SelectorError::NoBinaries {
            dir: dir.to_path_buf(),
        });
    }
    debug!("Found {} binaries in {}", items.len(), dir.display());

    // stderr belongs to the frame while the runner is active, so records are
    // either routed to the log panel or dropped
    let mut selector = Selector::new(items, config.sort_ascending);
    let mut logs = None;
    if config.verbose {
        let (tx, rx) = log_bridge::channel(MAX_LOG_LINES);
        capture.set(move |level, msg| {
            tx.send(LogMsg::new(level, msg));
        });
        selector = selector.with_log_capture(config.show_logs);
        logs = Some(rx);
    } else {
        capture.set(|_, _| {});
    }

    let mut program = Program::new(
        selector,
        Theme::from_palette(&config.palette),
        dir,
        config.verbose,
        fs,
        logs,
    );
    let result = runner.run(&mut program).map_err(SelectorError::Runner);
    capture.clear();
    debug!("Selector finished: {:?}", result);
    result
}
