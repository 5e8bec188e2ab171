//! Browser state machine
//!
//! Split into submodules for reduced complexity: navigation and selection
//! live here, extension filtering in `filter_search`, and the confirmation
//! gated rename/delete/open commands in `file_ops`.

mod file_ops;
mod filter_search;

pub use filter_search::matches_extension;

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::error::{BrowseError, Result};
use crate::filesystem::{DirectoryEntry, FileSystemGateway};
use crate::opener::ExternalOpener;

/// Which destructive action is waiting for confirmation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pending {
    Rename,
    Delete,
}

/// One read of a directory.
///
/// Iterate it as many times as needed; it never goes back to the
/// filesystem. Entries keep the order the gateway returned.
#[derive(Clone, Debug, Default)]
pub struct Listing {
    entries: Vec<DirectoryEntry>,
}

impl Listing {
    pub fn iter(&self) -> std::slice::Iter<'_, DirectoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a DirectoryEntry;
    type IntoIter = std::slice::Iter<'a, DirectoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Listing {
    type Item = DirectoryEntry;
    type IntoIter = std::vec::IntoIter<DirectoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Resolve `.` and `..` without touching the filesystem. `..` at a root
/// stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                } else if !out.has_root() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Current directory, selection and confirmation gates for one browsing
/// session.
///
/// Single-threaded: every method runs to completion on the caller's thread,
/// including the filesystem calls it delegates to `F`.
pub struct BrowserState<F, O> {
    fs: F,
    opener: O,
    current_dir: PathBuf,
    selection: Option<PathBuf>,
    rename_pending: bool,
    delete_pending: bool,
}

impl<F: FileSystemGateway, O: ExternalOpener> BrowserState<F, O> {
    /// Start browsing at `dir`, which must be an existing directory
    pub fn new(fs: F, opener: O, dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = normalize(&dir.into());
        if !fs.is_directory(&dir) {
            return Err(Self::classify_missing(&fs, dir));
        }

        debug!(dir = %dir.display(), "browser created");
        Ok(Self {
            fs,
            opener,
            current_dir: dir,
            selection: None,
            rename_pending: false,
            delete_pending: false,
        })
    }

    /// Start browsing at the process working directory
    pub fn in_working_dir(fs: F, opener: O) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| BrowseError::from_io(Path::new("."), e))?;
        Self::new(fs, opener, cwd)
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn selection(&self) -> Option<&Path> {
        self.selection.as_deref()
    }

    pub fn rename_pending(&self) -> bool {
        self.rename_pending
    }

    pub fn delete_pending(&self) -> bool {
        self.delete_pending
    }

    /// The open confirmation, if any. At most one is open at a time.
    pub fn pending(&self) -> Option<Pending> {
        if self.rename_pending {
            Some(Pending::Rename)
        } else if self.delete_pending {
            Some(Pending::Delete)
        } else {
            None
        }
    }

    pub fn gateway(&self) -> &F {
        &self.fs
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    // Navigation

    /// Move to the parent directory. At a filesystem root this does nothing.
    pub fn navigate_up(&mut self) -> bool {
        let Some(parent) = self.current_dir.parent() else {
            debug!(dir = %self.current_dir.display(), "already at root");
            return false;
        };
        // "foo" has parent "" which names nothing
        if parent.as_os_str().is_empty() {
            return false;
        }

        self.current_dir = parent.to_path_buf();
        self.retain_selection_within_current();
        info!(dir = %self.current_dir.display(), "navigated up");
        true
    }

    /// Enter the child directory `name` of the current directory. `name` is
    /// a single path component; `..` and separators are rejected.
    pub fn navigate_into(&mut self, name: &str) -> Result<()> {
        file_ops::validate_name(name)?;
        let target = self.current_dir.join(name);
        if !self.fs.is_directory(&target) {
            return Err(Self::classify_missing(&self.fs, target));
        }

        self.current_dir = target;
        self.retain_selection_within_current();
        info!(dir = %self.current_dir.display(), "navigated into");
        Ok(())
    }

    fn classify_missing(fs: &F, path: PathBuf) -> BrowseError {
        if fs.exists(&path) {
            BrowseError::NotADirectory(path)
        } else {
            BrowseError::NotFound(path)
        }
    }

    fn retain_selection_within_current(&mut self) {
        let outside = self
            .selection
            .as_ref()
            .is_some_and(|sel| !sel.starts_with(&self.current_dir));
        if outside && let Some(sel) = self.selection.take() {
            debug!(selection = %sel.display(), "selection left behind, clearing");
        }
    }

    /// Read the current directory afresh
    pub fn list_current_directory(&self) -> Result<Listing> {
        let entries = self.fs.list(&self.current_dir)?;
        Ok(Listing { entries })
    }

    // Selection

    /// Record `path` as the selection. Relative paths are taken from the
    /// current directory. Nothing is checked until the selection is used.
    pub fn select(&mut self, path: impl AsRef<Path>) -> &Path {
        let path = normalize(&self.current_dir.join(path.as_ref()));
        debug!(selection = %path.display(), "selected");
        self.selection.insert(path).as_path()
    }

    /// Whether the selection currently names a directory
    pub fn selection_is_dir(&self) -> bool {
        self.selection
            .as_deref()
            .is_some_and(|p| self.fs.is_directory(p))
    }
}
