//! # Logging
//!
//! `log` is the facade everywhere; `simplelog` does the writing. Records go
//! to stderr and, when configured, to a log file.
//!
//! While the selector owns the terminal, stderr output would tear the
//! frame, so it registers a capture callback through [`LogCapture`]. Records
//! are then handed to the callback instead of stderr until it is cleared.

use std::path::Path;
use std::sync::{Arc, RwLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

type CaptureFn = Box<dyn Fn(&str, &str) + Send + Sync>;

/// Cloneable handle for registering a log capture callback.
///
/// The callback receives a short level tag (`INF`, `DBG`, ...) and the
/// formatted message.
#[derive(Clone, Default)]
pub struct LogCapture {
    inner: Arc<RwLock<Option<CaptureFn>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, capture: impl Fn(&str, &str) + Send + Sync + 'static) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(Box::new(capture));
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = None;
        }
    }

    pub fn is_active(&self) -> bool {
        self.inner.read().map(|slot| slot.is_some()).unwrap_or(false)
    }

    /// Hands the record to the callback. Returns false if none is registered.
    fn forward(&self, level: Level, message: &str) -> bool {
        match self.inner.read() {
            Ok(slot) => match slot.as_ref() {
                Some(capture) => {
                    capture(level_tag(level), message);
                    true
                }
                None => false,
            },
            Err(_) => false,
        }
    }
}

/// Three-letter tag for a level, as shown in the log panel.
pub fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERR",
        Level::Warn => "WRN",
        Level::Info => "INF",
        Level::Debug => "DBG",
        Level::Trace => "TRC",
    }
}

/// Sends records to the capture callback when one is set, to `inner` otherwise.
pub struct CaptureLogger {
    level: LevelFilter,
    inner: Box<dyn Log>,
    capture: LogCapture,
}

impl CaptureLogger {
    pub fn new(level: LevelFilter, inner: Box<dyn Log>, capture: LogCapture) -> Box<Self> {
        Box::new(Self {
            level,
            inner,
            capture,
        })
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if self.capture.forward(record.level(), &record.args().to_string()) {
            return;
        }
        self.inner.log(record);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

impl SharedLogger for CaptureLogger {
    fn level(&self) -> LevelFilter {
        self.level
    }

    fn config(&self) -> Option<&Config> {
        None
    }

    fn as_log(self: Box<Self>) -> Box<dyn Log> {
        Box::new(*self)
    }
}

/// Installs the global logger and returns its capture handle.
///
/// A log file that can't be created is skipped rather than failing startup.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<LogCapture, SetLoggerError> {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let capture = LogCapture::new();

    let stderr = TermLogger::new(level, config.clone(), TerminalMode::Stderr, ColorChoice::Auto);
    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![CaptureLogger::new(level, stderr.as_log(), capture.clone())];

    if let Some(path) = log_file {
        match std::fs::File::create(path) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(e) => eprintln!("Warning: could not open log file {}: {e}", path.display()),
        }
    }

    CombinedLogger::init(loggers)?;
    Ok(capture)
}
