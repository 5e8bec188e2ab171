//! Rename, delete and open on the selection
//!
//! Rename and delete are two-step: `request_*` opens a confirmation gate,
//! `confirm_*` executes, `cancel_*` closes it. A failed confirm leaves the
//! gate open so the caller can retry or cancel.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::BrowserState;
use crate::error::{BrowseError, Result};
use crate::filesystem::FileSystemGateway;
use crate::opener::ExternalOpener;

/// Reject anything that is not a single plain path component
pub(super) fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || (cfg!(windows) && name.contains('\\'))
        || name.contains('\0');
    if invalid {
        return Err(BrowseError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl<F: FileSystemGateway, O: ExternalOpener> BrowserState<F, O> {
    // Rename

    /// Open the rename confirmation. Without a selection this does nothing.
    pub fn request_rename(&mut self) -> bool {
        if self.selection.is_none() {
            return false;
        }
        self.delete_pending = false;
        self.rename_pending = true;
        debug!("rename requested");
        true
    }

    /// Rename the selection to `new_name` within its parent directory
    pub fn confirm_rename(&mut self, new_name: &str) -> Result<&Path> {
        if !self.rename_pending {
            return Err(BrowseError::NotConfirmed("rename"));
        }
        let from = self.checked_selection()?;
        validate_name(new_name).inspect_err(|e| warn!(%e, "rename rejected"))?;

        let to = from
            .parent()
            .map(|p| p.join(new_name))
            .unwrap_or_else(|| PathBuf::from(new_name));

        if let Err(e) = self.fs.rename(&from, &to) {
            warn!(from = %from.display(), to = %to.display(), %e, "rename failed");
            return Err(e);
        }

        info!(from = %from.display(), to = %to.display(), "renamed");
        self.rename_pending = false;
        Ok(self.selection.insert(to).as_path())
    }

    pub fn cancel_rename(&mut self) {
        self.rename_pending = false;
    }

    // Delete

    /// Open the delete confirmation. Without a selection this does nothing.
    pub fn request_delete(&mut self) -> bool {
        if self.selection.is_none() {
            return false;
        }
        self.rename_pending = false;
        self.delete_pending = true;
        debug!("delete requested");
        true
    }

    /// Remove the selection from disk and clear it
    pub fn confirm_delete(&mut self) -> Result<PathBuf> {
        if !self.delete_pending {
            return Err(BrowseError::NotConfirmed("delete"));
        }
        let target = self.checked_selection()?;

        if let Err(e) = self.fs.remove(&target) {
            warn!(path = %target.display(), %e, "delete failed");
            return Err(e);
        }

        info!(path = %target.display(), "deleted");
        self.delete_pending = false;
        self.selection = None;
        Ok(target)
    }

    pub fn cancel_delete(&mut self) {
        self.delete_pending = false;
    }

    /// Close whichever confirmation is open
    pub fn cancel_pending(&mut self) {
        self.cancel_rename();
        self.cancel_delete();
    }

    // Open

    /// Hand the selected file to the external opener. Only reports whether
    /// the launch was dispatched.
    pub fn open_selected_externally(&self) -> Result<()> {
        let path = self.selection.as_deref().ok_or(BrowseError::NoSelection)?;
        if !self.fs.is_regular_file(path) {
            return Err(if self.fs.exists(path) {
                BrowseError::NotARegularFile(path.to_path_buf())
            } else {
                BrowseError::NotFound(path.to_path_buf())
            });
        }
        self.opener
            .open(path)
            .inspect_err(|e| warn!(path = %path.display(), %e, "open failed"))
    }

    /// The selection, re-checked against the filesystem and the current
    /// directory. Mutating an ancestor of the current directory would leave
    /// the browser pointing at nothing.
    fn checked_selection(&self) -> Result<PathBuf> {
        let path = self.selection.clone().ok_or(BrowseError::NoSelection)?;
        if !self.fs.exists(&path) {
            warn!(path = %path.display(), "selection no longer exists");
            return Err(BrowseError::NotFound(path));
        }
        if self.current_dir.starts_with(&path) {
            return Err(BrowseError::InUse(path));
        }
        Ok(path)
    }
}
