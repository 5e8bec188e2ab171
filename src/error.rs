//! Error type shared by the browser core and its collaborators

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, BrowseError>;

/// Errors surfaced by browser operations.
///
/// None of these are fatal: the browser stays usable after any of them and
/// the caller decides how to display or recover.
#[derive(Debug, Error)]
pub enum BrowseError {
    /// Path does not exist
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Path exists but is not a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// Path exists but is not a regular file
    #[error("not a regular file: {}", .0.display())]
    NotARegularFile(PathBuf),
    /// Rename target is already taken
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    /// Permission or transient filesystem failure
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// External opener could not be spawned
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },
    /// User-supplied name cannot be used as a filename
    #[error("invalid name: {0:?}")]
    InvalidName(String),
    /// Target contains the directory being browsed
    #[error("in use as the current directory: {}", .0.display())]
    InUse(PathBuf),
    /// Operation needs a selection and there is none
    #[error("nothing selected")]
    NoSelection,
    /// Confirm was called without a matching request
    #[error("no {0} is awaiting confirmation")]
    NotConfirmed(&'static str),
}

impl BrowseError {
    /// Map a platform error for `path` into a browse error.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::AlreadyExists => Self::AlreadyExists(path.to_path_buf()),
            io::ErrorKind::NotADirectory => Self::NotADirectory(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
