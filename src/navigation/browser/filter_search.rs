//! Extension filtering for the browser

use super::BrowserState;
use crate::error::Result;
use crate::filesystem::{DirectoryEntry, FileSystemGateway};
use crate::opener::ExternalOpener;

/// Whether `entry` is a regular file whose extension is exactly `extension`.
///
/// `extension` carries its leading dot (`".txt"`) and is compared without
/// case folding or trimming.
pub fn matches_extension(entry: &DirectoryEntry, extension: &str) -> bool {
    entry.is_file() && entry.dotted_extension().as_deref() == Some(extension)
}

impl<F: FileSystemGateway, O: ExternalOpener> BrowserState<F, O> {
    /// Count regular files in the current directory with `extension`.
    ///
    /// An empty filter is inactive and counts nothing, without reading the
    /// directory.
    pub fn filtered_count(&self, extension: &str) -> Result<usize> {
        if extension.is_empty() {
            return Ok(0);
        }
        let listing = self.list_current_directory()?;
        Ok(listing
            .iter()
            .filter(|e| matches_extension(e, extension))
            .count())
    }

    /// Regular files in the current directory with `extension`
    pub fn filtered_entries(&self, extension: &str) -> Result<Vec<DirectoryEntry>> {
        if extension.is_empty() {
            return Ok(Vec::new());
        }
        let listing = self.list_current_directory()?;
        Ok(listing
            .into_iter()
            .filter(|e| matches_extension(e, extension))
            .collect())
    }
}
