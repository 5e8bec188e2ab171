//! In-memory gateway
//!
//! Drives the browser without touching disk. Interior mutability is a plain
//! `RefCell` because the browser is single-threaded.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use super::{DirectoryEntry, EntryKind, FileSystemGateway};
use crate::error::{BrowseError, Result};

#[derive(Debug, Default)]
struct Tree {
    nodes: BTreeMap<PathBuf, EntryKind>,
    unreadable: BTreeSet<PathBuf>,
}

impl Tree {
    fn insert(&mut self, path: &Path, kind: EntryKind) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.nodes
                .entry(ancestor.to_path_buf())
                .or_insert(EntryKind::Directory);
        }
        self.nodes.insert(path.to_path_buf(), kind);
    }

    fn subtree(&self, root: &Path) -> Vec<PathBuf> {
        self.nodes
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect()
    }
}

/// [`FileSystemGateway`] over an in-memory tree of paths
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    tree: RefCell<Tree>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory, creating missing ancestors
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.add(path.as_ref(), EntryKind::Directory);
        self
    }

    /// Add a regular file, creating missing ancestor directories
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.add(path.as_ref(), EntryKind::RegularFile);
        self
    }

    /// Add an entry that is neither a file nor a directory (socket, fifo...)
    pub fn with_other(self, path: impl AsRef<Path>) -> Self {
        self.add(path.as_ref(), EntryKind::Other);
        self
    }

    pub fn add(&self, path: &Path, kind: EntryKind) {
        self.tree.borrow_mut().insert(path, kind);
    }

    /// Make listing `dir` fail with a permission error
    pub fn set_unreadable(&self, dir: &Path, unreadable: bool) {
        let mut tree = self.tree.borrow_mut();
        if unreadable {
            tree.unreadable.insert(dir.to_path_buf());
        } else {
            tree.unreadable.remove(dir);
        }
    }

    fn kind_of(&self, path: &Path) -> Option<EntryKind> {
        self.tree.borrow().nodes.get(path).copied()
    }
}

impl FileSystemGateway for MemoryFileSystem {
    fn list(&self, dir: &Path) -> Result<Vec<DirectoryEntry>> {
        match self.kind_of(dir) {
            None => return Err(BrowseError::NotFound(dir.to_path_buf())),
            Some(EntryKind::Directory) => {}
            Some(_) => return Err(BrowseError::NotADirectory(dir.to_path_buf())),
        }

        let tree = self.tree.borrow();
        if tree.unreadable.contains(dir) {
            return Err(BrowseError::Io {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            });
        }

        let entries = tree
            .nodes
            .iter()
            .filter(|(path, _)| path.parent() == Some(dir))
            .filter_map(|(path, kind)| {
                let name = path.file_name()?.to_string_lossy().into_owned();
                Some(DirectoryEntry::new(name, path.clone(), *kind))
            })
            .collect();
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        self.kind_of(path).is_some()
    }

    fn is_directory(&self, path: &Path) -> bool {
        self.kind_of(path) == Some(EntryKind::Directory)
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        self.kind_of(path) == Some(EntryKind::RegularFile)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        if !self.exists(from) {
            return Err(BrowseError::NotFound(from.to_path_buf()));
        }
        if self.exists(to) {
            return Err(BrowseError::AlreadyExists(to.to_path_buf()));
        }
        match to.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.is_directory(parent) => {
                return Err(BrowseError::NotFound(parent.to_path_buf()));
            }
            _ => {}
        }

        let mut tree = self.tree.borrow_mut();
        for old in tree.subtree(from) {
            if let Some(kind) = tree.nodes.remove(&old) {
                let suffix = old.strip_prefix(from).unwrap_or(Path::new(""));
                let new = if suffix.as_os_str().is_empty() {
                    to.to_path_buf()
                } else {
                    to.join(suffix)
                };
                tree.nodes.insert(new, kind);
            }
        }
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<()> {
        if !self.exists(path) {
            return Err(BrowseError::NotFound(path.to_path_buf()));
        }
        let mut tree = self.tree.borrow_mut();
        for p in tree.subtree(path) {
            tree.nodes.remove(&p);
            tree.unreadable.remove(&p);
        }
        Ok(())
    }
}
