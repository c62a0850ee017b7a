//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::action::{Action, update};
use crate::core::state::Selector;
use crate::fs::{Filesystem, FsError};

pub fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// An ascending selector already laid out for a `width` x `height` terminal.
pub fn selector_with_size(items: &[&str], width: u16, height: u16) -> Selector {
    let mut selector = Selector::new(names(items), true);
    update(&mut selector, Action::Resize { width, height });
    selector
}

/// In-memory bin directory that records every call.
#[derive(Default)]
pub struct MockFs {
    pub binaries: RefCell<Vec<String>>,
    /// When set, removals fail with this message.
    pub fail_with: Option<String>,
    pub removed: RefCell<Vec<PathBuf>>,
    pub listed: RefCell<usize>,
}

impl MockFs {
    pub fn with_binaries(items: &[&str]) -> Self {
        Self {
            binaries: RefCell::new(names(items)),
            ..Default::default()
        }
    }

    pub fn failing(items: &[&str], reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::with_binaries(items)
        }
    }
}

impl Filesystem for MockFs {
    fn determine_bin_dir(&self, use_goroot: bool) -> Result<PathBuf, FsError> {
        if use_goroot {
            Err(FsError::GorootNotSet)
        } else {
            Ok(PathBuf::from("/bin"))
        }
    }

    fn adjust_binary_path(&self, dir: &Path, binary: &str) -> PathBuf {
        dir.join(binary)
    }

    fn remove_binary(&self, path: &Path, name: &str, _verbose: bool) -> Result<(), FsError> {
        if let Some(reason) = &self.fail_with {
            return Err(FsError::Remove {
                path: path.to_path_buf(),
                source: io::Error::other(reason.clone()),
            });
        }
        self.binaries.borrow_mut().retain(|b| b != name);
        self.removed.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn list_binaries(&self, _dir: &Path) -> Vec<String> {
        *self.listed.borrow_mut() += 1;
        self.binaries.borrow().clone()
    }
}
