#![cfg(unix)]

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use go_remove::core::action::Action;
use go_remove::core::config::{CliOverrides, GoRemoveConfig, LogLevel, resolve};
use go_remove::fs::RealFs;
use go_remove::logging::{CaptureLogger, LogCapture};
use go_remove::tui::{self, Program, ProgramRunner};
use log::{LevelFilter, Log, Metadata, Record};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Stands in for the stderr logger and keeps every record it is handed.
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
    fn records(&self) -> Vec<String> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Log for Recorder {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.0
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

struct Logging {
    capture: LogCapture,
    stderr: Recorder,
}

/// The global logger can only be installed once per process, so every test
/// shares it and takes the returned guard to run alone.
fn logging() -> (&'static Logging, MutexGuard<'static, ()>) {
    static LOGGING: OnceLock<Logging> = OnceLock::new();
    static SERIAL: Mutex<()> = Mutex::new(());

    let logging = LOGGING.get_or_init(|| {
        let capture = LogCapture::new();
        let stderr = Recorder::default();
        log::set_boxed_logger(CaptureLogger::new(
            LevelFilter::Info,
            Box::new(stderr.clone()),
            capture.clone(),
        ))
        .unwrap();
        log::set_max_level(LevelFilter::Info);
        Logging { capture, stderr }
    });
    let guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    (logging, guard)
}

fn bin_dir(names: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in names {
        std::fs::write(dir.path().join(name), b"").unwrap();
    }
    dir
}

fn plain_lines(program: &Program<'_>) -> Vec<String> {
    program
        .view()
        .lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
        .collect()
}

/// Removes the highlighted binary, optionally deleting it from disk first so
/// the removal fails, and records what the stderr logger saw meanwhile.
struct RemoveOnce<'a> {
    stderr: &'a Recorder,
    delete_first: Option<std::path::PathBuf>,
    stderr_during_run: Vec<String>,
    logs: Vec<String>,
    frame: Vec<String>,
    status: String,
}

impl<'a> RemoveOnce<'a> {
    fn new(stderr: &'a Recorder) -> Self {
        Self {
            stderr,
            delete_first: None,
            stderr_during_run: Vec::new(),
            logs: Vec::new(),
            frame: Vec::new(),
            status: String::new(),
        }
    }
}

impl ProgramRunner for RemoveOnce<'_> {
    fn run(&mut self, program: &mut Program<'_>) -> io::Result<()> {
        let before = self.stderr.records().len();
        program.dispatch(Action::Resize {
            width: 120,
            height: 24,
        });
        if let Some(path) = &self.delete_first {
            std::fs::remove_file(path)?;
        }
        program.dispatch(Action::Remove);
        log::warn!("late warning");

        self.stderr_during_run = self.stderr.records().split_off(before);
        self.logs = program.selector().logs.iter().map(str::to_string).collect();
        self.frame = plain_lines(program);
        self.status = program.selector().status_message.clone();
        Ok(())
    }
}

// ============================================================================
// Quiet Mode
// ============================================================================

#[test]
fn test_quiet_selector_keeps_stderr_clean() {
    let (logging, _guard) = logging();
    let dir = bin_dir(&["age", "vhs"]);
    let mut runner = RemoveOnce::new(&logging.stderr);
    runner.delete_first = Some(dir.path().join("age"));

    let config = resolve(&GoRemoveConfig::default(), &CliOverrides::default());
    tui::run_interactive_selector(dir.path(), &config, &logging.capture, &RealFs, &mut runner)
        .unwrap();

    assert!(runner.status.starts_with("Error removing age"));
    assert!(runner.stderr_during_run.is_empty(), "{:?}", runner.stderr_during_run);
    assert!(runner.logs.is_empty());
    assert!(!logging.capture.is_active());
}

// ============================================================================
// Verbose Mode
// ============================================================================

#[test]
fn test_verbose_selector_shows_removal_logs_in_panel() {
    let (logging, _guard) = logging();
    let dir = bin_dir(&["age", "vhs"]);
    let mut runner = RemoveOnce::new(&logging.stderr);

    let config = resolve(
        &GoRemoveConfig::default(),
        &CliOverrides {
            verbose: true,
            log_level: Some(LogLevel::Info),
            ..Default::default()
        },
    );
    tui::run_interactive_selector(dir.path(), &config, &logging.capture, &RealFs, &mut runner)
        .unwrap();

    let removing = format!("[INF] Removing binary path={}", dir.path().join("age").display());
    assert!(runner.logs.contains(&removing), "{:?}", runner.logs);
    let removed = "[INF] Successfully removed binary name=age";
    assert!(runner.logs.iter().any(|line| line.starts_with(removed)));
    assert!(runner.frame.contains(&removing), "{:?}", runner.frame);
    assert!(runner.frame.iter().any(|line| line == "Removed age"));

    assert!(runner.stderr_during_run.is_empty(), "{:?}", runner.stderr_during_run);
    assert!(!logging.capture.is_active());
}

#[test]
fn test_records_reach_stderr_once_selector_returns() {
    let (logging, _guard) = logging();
    let before = logging.stderr.records().len();

    log::info!("after the selector");

    assert_eq!(logging.stderr.records().split_off(before), vec!["INFO after the selector"]);
}
