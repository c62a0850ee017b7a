//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `<config dir>/go-remove/config.toml` (for example
//! `~/.config/go-remove/config.toml` on Linux). A missing file simply
//! means defaults; `--config` points at a file that must exist.

use clap::ValueEnum;
use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct GoRemoveConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub tui: TuiConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub verbose: Option<bool>,
    pub goroot: Option<bool>,
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TuiConfig {
    pub sort_ascending: Option<bool>,
    pub show_logs: Option<bool>,
    pub cursor: Option<String>,
    pub title_color: Option<u8>,
    pub cursor_color: Option<u8>,
    pub footer_color: Option<u8>,
    pub status_color: Option<u8>,
    pub log_color: Option<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parses a level name, falling back to `Info` for anything unknown.
    pub fn parse_lossy(level: &str) -> Self {
        match level.to_ascii_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "warn" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }

    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CURSOR: &str = "❯ ";
pub const DEFAULT_TITLE_COLOR: u8 = 39; // bright blue
pub const DEFAULT_CURSOR_COLOR: u8 = 214; // orange
pub const DEFAULT_FOOTER_COLOR: u8 = 245; // light gray
pub const DEFAULT_STATUS_COLOR: u8 = 46; // lime green
pub const DEFAULT_LOG_COLOR: u8 = 240; // dark gray

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// 256-colour palette and cursor symbol for the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub cursor: String,
    pub title_color: u8,
    pub cursor_color: u8,
    pub footer_color: u8,
    pub status_color: u8,
    pub log_color: u8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            cursor: DEFAULT_CURSOR.to_string(),
            title_color: DEFAULT_TITLE_COLOR,
            cursor_color: DEFAULT_CURSOR_COLOR,
            footer_color: DEFAULT_FOOTER_COLOR,
            status_color: DEFAULT_STATUS_COLOR,
            log_color: DEFAULT_LOG_COLOR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub verbose: bool,
    pub goroot: bool,
    /// Effective level: the requested one when verbose, info otherwise.
    pub log_level: LogLevel,
    pub log_file: Option<PathBuf>,
    pub sort_ascending: bool,
    pub show_logs: bool,
    pub palette: Palette,
}

/// Values taken from the command line. `false` / `None` mean "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub verbose: bool,
    pub goroot: bool,
    pub log_level: Option<LogLevel>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `<config dir>/go-remove/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("go-remove").join("config.toml"))
}

/// Load the config file.
///
/// With `explicit = Some(path)` the file must exist. Otherwise the default
/// location is tried and a missing file yields `GoRemoveConfig::default()`.
pub fn load_config(explicit: Option<&Path>) -> Result<GoRemoveConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(GoRemoveConfig::default()),
        },
    };

    let contents = fs::read_to_string(&path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<GoRemoveConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &GoRemoveConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &GoRemoveConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let verbose = cli.verbose || config.general.verbose.unwrap_or(false);
    let goroot = cli.goroot || config.general.goroot.unwrap_or(false);

    // Level: CLI → env → config → default, only honoured in verbose mode
    let requested = cli
        .log_level
        .or_else(|| env("GO_REMOVE_LOG_LEVEL").map(|l| LogLevel::parse_lossy(&l)))
        .or(config.general.log_level)
        .unwrap_or_default();
    let log_level = if verbose { requested } else { LogLevel::Info };

    // Log file: env → config
    let log_file = env("GO_REMOVE_LOG_FILE")
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .or_else(|| config.general.log_file.clone());

    let tui = &config.tui;
    let defaults = Palette::default();
    let palette = Palette {
        cursor: tui.cursor.clone().unwrap_or(defaults.cursor),
        title_color: tui.title_color.unwrap_or(defaults.title_color),
        cursor_color: tui.cursor_color.unwrap_or(defaults.cursor_color),
        footer_color: tui.footer_color.unwrap_or(defaults.footer_color),
        status_color: tui.status_color.unwrap_or(defaults.status_color),
        log_color: tui.log_color.unwrap_or(defaults.log_color),
    };

    ResolvedConfig {
        verbose,
        goroot,
        log_level,
        log_file,
        sort_ascending: tui.sort_ascending.unwrap_or(true),
        show_logs: tui.show_logs.unwrap_or(verbose),
        palette,
    }
}
