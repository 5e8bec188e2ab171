//! Navigation, listing and filter handlers

use crate::app::{App, CommandResult};
use crate::filesystem::FileSystemGateway;
use crate::opener::ExternalOpener;
use crate::render::ListingView;

impl<F: FileSystemGateway, O: ExternalOpener> App<F, O> {
    pub fn execute_list(&mut self) -> CommandResult {
        let listing = match self.browser.list_current_directory() {
            Ok(listing) => listing,
            Err(e) => return CommandResult::Error(e),
        };

        let view = ListingView {
            show_hidden: self.show_hidden,
            filter: &self.filter,
            selection: self.browser.selection(),
        };
        let mut lines = view.render(&listing);
        if lines.is_empty() {
            lines.push("(empty)".to_string());
        }
        if !self.filter.is_empty() {
            lines.push(self.count_line(&self.filter));
        }
        CommandResult::Output(lines)
    }

    pub fn execute_parent_directory(&mut self) -> CommandResult {
        if self.browser.navigate_up() {
            self.execute_list()
        } else {
            CommandResult::line("already at the top")
        }
    }

    pub fn execute_enter_directory(&mut self, name: &str) -> CommandResult {
        match self.browser.navigate_into(name) {
            Ok(()) => self.execute_list(),
            Err(e) => CommandResult::Error(e),
        }
    }

    /// Select an entry; selecting a child directory also enters it
    pub fn execute_select(&mut self, name: &str) -> CommandResult {
        let selected = self.browser.select(name).to_path_buf();
        if self.browser.selection_is_dir()
            && selected.parent() == Some(self.browser.current_dir())
            && let Some(child) = selected.file_name().and_then(|n| n.to_str())
        {
            let child = child.to_string();
            return self.execute_enter_directory(&child);
        }
        CommandResult::None
    }

    pub fn execute_filter(&mut self, extension: String) -> CommandResult {
        self.filter = extension;
        self.execute_list()
    }

    pub fn execute_count(&mut self, extension: &str) -> CommandResult {
        CommandResult::line(self.count_line(extension))
    }

    fn count_line(&self, extension: &str) -> String {
        match self.browser.filtered_count(extension) {
            Ok(n) if extension.is_empty() => format!("{n} files (no filter)"),
            Ok(n) => format!("{n} files matching {extension:?}"),
            Err(e) => format!("error: {e}"),
        }
    }
}
