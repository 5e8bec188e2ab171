//! Gateway backed by the real filesystem

use std::fs::{self, DirEntry};
use std::path::Path;

use tracing::{debug, warn};

use super::{DirectoryEntry, EntryKind, FileSystemGateway};
use crate::error::{BrowseError, Result};

/// `std::fs` implementation of [`FileSystemGateway`]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    fn entry_from_dir_entry(entry: DirEntry) -> DirectoryEntry {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        // Symlinks are classified by their target, like `Path::is_dir`
        let kind = match fs::metadata(&path) {
            Ok(md) if md.is_dir() => EntryKind::Directory,
            Ok(md) if md.is_file() => EntryKind::RegularFile,
            _ => EntryKind::Other,
        };
        DirectoryEntry { name, path, kind }
    }
}

impl FileSystemGateway for LocalFileSystem {
    fn list(&self, dir: &Path) -> Result<Vec<DirectoryEntry>> {
        let read_dir = fs::read_dir(dir).map_err(|e| BrowseError::from_io(dir, e))?;

        let entries: Vec<DirectoryEntry> = read_dir
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(dir = %dir.display(), %err, "skipping unreadable entry");
                    None
                }
            })
            .map(Self::entry_from_dir_entry)
            .collect();

        debug!(dir = %dir.display(), count = entries.len(), "listed directory");
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_regular_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        if fs::symlink_metadata(from).is_err() {
            return Err(BrowseError::NotFound(from.to_path_buf()));
        }
        // fs::rename silently replaces an existing file on unix
        if self.exists(to) {
            return Err(BrowseError::AlreadyExists(to.to_path_buf()));
        }
        fs::rename(from, to).map_err(|e| BrowseError::from_io(from, e))
    }

    fn remove(&self, path: &Path) -> Result<()> {
        let md = fs::symlink_metadata(path).map_err(|e| BrowseError::from_io(path, e))?;
        let result = if md.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        result.map_err(|e| BrowseError::from_io(path, e))
    }
}
