//! Stateful directory browser core.
//!
//! [`BrowserState`] tracks a current directory and a selection, filters by
//! extension, and runs confirmation-gated rename/delete on the selection.
//! Storage goes through a [`FileSystemGateway`] and launching through an
//! [`ExternalOpener`], so the core runs without a display or a disk.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod input;
pub mod navigation;
pub mod opener;
pub mod render;

pub use error::{BrowseError, Result};
pub use filesystem::{
    DirectoryEntry, EntryKind, FileSystemGateway, LocalFileSystem, MemoryFileSystem,
};
pub use navigation::{BrowserState, Listing, Pending};
pub use opener::ExternalOpener;
