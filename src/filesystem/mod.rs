//! Filesystem access for the browser
//!
//! The browser never touches `std::fs` directly; it goes through a
//! [`FileSystemGateway`] so that front-ends and tests can swap the backing
//! store.

mod local;
mod memory;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use local::LocalFileSystem;
pub use memory::MemoryFileSystem;

/// What a directory entry is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    RegularFile,
    Other,
}

impl EntryKind {
    /// Short tag used when annotating listings
    pub fn tag(self) -> &'static str {
        match self {
            EntryKind::Directory => "[D]",
            EntryKind::RegularFile => "[F]",
            EntryKind::Other => "[?]",
        }
    }
}

/// Filesystem entry as seen at listing time
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, path: PathBuf, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            path,
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::RegularFile
    }

    /// Extension with its leading dot, e.g. `".txt"`
    pub fn dotted_extension(&self) -> Option<String> {
        dotted_extension(&self.path)
    }
}

/// Extension of `path` with the leading dot kept, or `None` when the
/// filename has no extension. `a.tar.gz` yields `".gz"`; `.bashrc` yields
/// `None`.
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}

/// Storage the browser reads and mutates.
///
/// Implementations map their native failures into [`crate::BrowseError`];
/// no platform error type crosses this boundary.
pub trait FileSystemGateway {
    /// Read a directory once. Order is whatever the backing store returns.
    fn list(&self, dir: &Path) -> Result<Vec<DirectoryEntry>>;
    /// Whether `path` exists at all (any kind)
    fn exists(&self, path: &Path) -> bool;
    /// Whether `path` is an existing directory
    fn is_directory(&self, path: &Path) -> bool;
    /// Whether `path` is an existing regular file
    fn is_regular_file(&self, path: &Path) -> bool;
    /// Rename `from` to `to`. Fails if `to` already exists.
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
    /// Remove a file, or a directory with all of its contents
    fn remove(&self, path: &Path) -> Result<()>;
}

impl<T: FileSystemGateway + ?Sized> FileSystemGateway for Box<T> {
    fn list(&self, dir: &Path) -> Result<Vec<DirectoryEntry>> {
        (**self).list(dir)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_directory(&self, path: &Path) -> bool {
        (**self).is_directory(path)
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        (**self).is_regular_file(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        (**self).rename(from, to)
    }

    fn remove(&self, path: &Path) -> Result<()> {
        (**self).remove(path)
    }
}
