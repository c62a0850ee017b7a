//! # Bin Directory Access
//!
//! The selector never touches the filesystem directly; it goes through the
//! `Filesystem` trait so tests can swap in an in-memory directory.
//!
//! Bin directory resolution follows the Go toolchain:
//! `GOROOT/bin` when asked for, otherwise `GOBIN`, then `GOPATH/bin`,
//! then `~/go/bin`.

use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

const WINDOWS_EXT: &str = "exe";

#[derive(Debug, Error)]
pub enum FsError {
    #[error("GOROOT is not set")]
    GorootNotSet,
    #[error("binary not found: {name} at {}", path.display())]
    NotFound { name: String, path: PathBuf },
    #[error("failed to remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub trait Filesystem {
    /// Resolves the directory binaries are installed into.
    fn determine_bin_dir(&self, use_goroot: bool) -> Result<PathBuf, FsError>;
    /// Full path of `binary` inside `dir`, with the platform's executable suffix.
    fn adjust_binary_path(&self, dir: &Path, binary: &str) -> PathBuf;
    fn remove_binary(&self, path: &Path, name: &str, verbose: bool) -> Result<(), FsError>;
    /// Names of the binaries in `dir`. Empty if the directory can't be read.
    fn list_binaries(&self, dir: &Path) -> Vec<String>;
}

/// `Filesystem` backed by the real disk and process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl Filesystem for RealFs {
    fn determine_bin_dir(&self, use_goroot: bool) -> Result<PathBuf, FsError> {
        resolve_bin_dir(
            use_goroot,
            |key| std::env::var(key).ok(),
            dirs::home_dir(),
        )
    }

    fn adjust_binary_path(&self, dir: &Path, binary: &str) -> PathBuf {
        adjust_path(dir, binary, cfg!(windows))
    }

    fn remove_binary(&self, path: &Path, name: &str, verbose: bool) -> Result<(), FsError> {
        if let Err(e) = std::fs::symlink_metadata(path)
            && e.kind() == std::io::ErrorKind::NotFound
        {
            return Err(FsError::NotFound {
                name: name.to_string(),
                path: path.to_path_buf(),
            });
        }

        if verbose {
            info!("Removing binary path={}", path.display());
        }

        std::fs::remove_file(path).map_err(|source| FsError::Remove {
            path: path.to_path_buf(),
            source,
        })?;

        if verbose {
            info!(
                "Successfully removed binary name={} path={}",
                name,
                path.display()
            );
        }
        Ok(())
    }

    fn list_binaries(&self, dir: &Path) -> Vec<String> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| !t.is_dir()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| !cfg!(windows) || has_exe_suffix(name))
            .collect()
    }
}

/// Bin directory resolution over an environment lookup.
pub fn resolve_bin_dir(
    use_goroot: bool,
    env: impl Fn(&str) -> Option<String>,
    home: Option<PathBuf>,
) -> Result<PathBuf, FsError> {
    let non_empty = |key: &str| env(key).filter(|value| !value.is_empty());

    if use_goroot {
        return non_empty("GOROOT")
            .map(|root| PathBuf::from(root).join("bin"))
            .ok_or(FsError::GorootNotSet);
    }

    if let Some(gobin) = non_empty("GOBIN") {
        return Ok(PathBuf::from(gobin));
    }

    let gopath = non_empty("GOPATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| home.unwrap_or_default().join("go"));
    Ok(gopath.join("bin"))
}

fn adjust_path(dir: &Path, binary: &str, windows: bool) -> PathBuf {
    let path = dir.join(binary);
    if windows && !binary.is_empty() && !has_exe_suffix(binary) {
        let mut with_ext = path.into_os_string();
        with_ext.push(".");
        with_ext.push(WINDOWS_EXT);
        return PathBuf::from(with_ext);
    }
    path
}

fn has_exe_suffix(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(WINDOWS_EXT))
}
