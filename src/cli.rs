//! Top-level run: remove one binary by name, or open the selector.

use log::debug;
use thiserror::Error;

use crate::core::config::ResolvedConfig;
use crate::fs::{Filesystem, FsError};
use crate::logging::LogCapture;
use crate::tui::{self, ProgramRunner, SelectorError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to determine bin directory: {0}")]
    BinDir(#[source] FsError),
    #[error("failed to remove binary {name}: {source}")]
    Remove {
        name: String,
        #[source]
        source: FsError,
    },
    #[error(transparent)]
    Tui(#[from] SelectorError),
}

/// Collaborators the run needs from the outside world.
pub struct Dependencies<'a> {
    pub fs: &'a dyn Filesystem,
    pub capture: &'a LogCapture,
}

pub fn run(
    deps: &Dependencies<'_>,
    config: &ResolvedConfig,
    binary: Option<&str>,
    runner: &mut dyn ProgramRunner,
) -> Result<(), RunError> {
    let dir = deps.fs.determine_bin_dir(config.goroot).map_err(RunError::BinDir)?;
    debug!("Using bin directory {}", dir.display());

    let Some(name) = binary else {
        tui::run_interactive_selector(&dir, config, deps.capture, deps.fs, runner)?;
        return Ok(());
    };

    let path = deps.fs.adjust_binary_path(&dir, name);
    deps.fs
        .remove_binary(&path, name, config.verbose)
        .map_err(|source| RunError::Remove {
            name: name.to_string(),
            source,
        })?;

    if !config.verbose {
        println!("Successfully removed {name}");
    }
    Ok(())
}
