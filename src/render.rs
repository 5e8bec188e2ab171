//! Text rendering of browser state

use std::cmp::Ordering;
use std::path::Path;

use crate::filesystem::{DirectoryEntry, EntryKind};
use crate::navigation::{Listing, Pending};

/// Display order: directories first, then case-insensitive by name
pub fn sort_for_display(entries: &mut [&DirectoryEntry]) {
    entries.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    });
}

/// Options controlling which entries are shown
#[derive(Clone, Debug, Default)]
pub struct ListingView<'a> {
    pub show_hidden: bool,
    /// Extension filter; empty shows everything
    pub filter: &'a str,
    pub selection: Option<&'a Path>,
}

impl ListingView<'_> {
    fn shows(&self, entry: &DirectoryEntry) -> bool {
        if !self.show_hidden && entry.name.starts_with('.') {
            return false;
        }
        if self.filter.is_empty() {
            return true;
        }
        // Directories stay visible so the tree can still be walked
        entry.kind == EntryKind::Directory
            || crate::navigation::matches_extension(entry, self.filter)
    }

    /// One line per visible entry, e.g. `> [F] a.txt` for the selection
    pub fn render(&self, listing: &Listing) -> Vec<String> {
        let mut visible: Vec<&DirectoryEntry> = listing.iter().filter(|e| self.shows(e)).collect();
        sort_for_display(&mut visible);

        visible
            .into_iter()
            .map(|e| {
                let marker = if self.selection == Some(e.path.as_path()) {
                    '>'
                } else {
                    ' '
                };
                format!("{} {} {}", marker, e.kind.tag(), e.name)
            })
            .collect()
    }
}

/// Prompt line: `[rename?] /current/dir (sel: a.txt)> `
pub fn prompt(current_dir: &Path, selection: Option<&Path>, pending: Option<Pending>) -> String {
    let mut out = String::new();
    match pending {
        Some(Pending::Rename) => out.push_str("[rename? yes NEW_NAME / no] "),
        Some(Pending::Delete) => out.push_str("[delete? yes / no] "),
        None => {}
    }
    out.push_str(&current_dir.display().to_string());
    if let Some(sel) = selection {
        let shown = match sel.strip_prefix(current_dir) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
            _ => sel.display().to_string(),
        };
        out.push_str(&format!(" (sel: {shown})"));
    }
    out.push_str("> ");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFileSystem;
    use crate::navigation::BrowserState;
    use crate::opener::ExternalOpener;

    struct NoOpener;

    impl ExternalOpener for NoOpener {
        fn open(&self, _path: &Path) -> crate::Result<()> {
            Ok(())
        }
    }

    fn listing() -> Listing {
        let fs = MemoryFileSystem::new()
            .with_file("/r/b.txt")
            .with_file("/r/A.md")
            .with_file("/r/.hidden.txt")
            .with_dir("/r/zdir")
            .with_dir("/r/Adir");
        BrowserState::new(fs, NoOpener, "/r")
            .unwrap()
            .list_current_directory()
            .unwrap()
    }

    #[test]
    fn test_render_sorts_dirs_first_and_hides_dotfiles() {
        let view = ListingView::default();
        assert_eq!(
            view.render(&listing()),
            vec!["  [D] Adir", "  [D] zdir", "  [F] A.md", "  [F] b.txt"]
        );
    }

    #[test]
    fn test_render_filter_and_selection() {
        let view = ListingView {
            show_hidden: true,
            filter: ".txt",
            selection: Some(Path::new("/r/b.txt")),
        };
        assert_eq!(
            view.render(&listing()),
            vec!["  [D] Adir", "  [D] zdir", "  [F] .hidden.txt", "> [F] b.txt"]
        );
    }

    #[test]
    fn test_prompt() {
        assert_eq!(prompt(Path::new("/r"), None, None), "/r> ");
        assert_eq!(
            prompt(Path::new("/r"), Some(Path::new("/r/a.txt")), Some(Pending::Delete)),
            "[delete? yes / no] /r (sel: a.txt)> "
        );
        assert_eq!(
            prompt(Path::new("/r/sub"), Some(Path::new("/r/sub")), None),
            "/r/sub (sel: /r/sub)> "
        );
    }
}
