//! File operation handlers

use crate::app::{App, CommandResult};
use crate::filesystem::FileSystemGateway;
use crate::navigation::Pending;
use crate::opener::ExternalOpener;

impl<F: FileSystemGateway, O: ExternalOpener> App<F, O> {
    pub fn execute_request_rename(&mut self) -> CommandResult {
        if self.browser.request_rename() {
            CommandResult::line("rename: type `yes NEW_NAME` or `no`")
        } else {
            CommandResult::line("select something first")
        }
    }

    pub fn execute_request_delete(&mut self) -> CommandResult {
        if !self.browser.request_delete() {
            return CommandResult::line("select something first");
        }
        let target = self
            .browser
            .selection()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        CommandResult::line(format!("delete {target}? type `yes` or `no`"))
    }

    /// Route `yes` to whichever confirmation is open
    pub fn execute_confirm(&mut self, arg: Option<&str>) -> CommandResult {
        match self.browser.pending() {
            Some(Pending::Rename) => {
                let Some(new_name) = arg else {
                    return CommandResult::line("rename needs a name: `yes NEW_NAME`");
                };
                match self.browser.confirm_rename(new_name) {
                    Ok(path) => CommandResult::line(format!("renamed to {}", path.display())),
                    Err(e) => CommandResult::Error(e),
                }
            }
            Some(Pending::Delete) => match self.browser.confirm_delete() {
                Ok(path) => CommandResult::line(format!("deleted {}", path.display())),
                Err(e) => CommandResult::Error(e),
            },
            None => CommandResult::line("nothing to confirm"),
        }
    }

    pub fn execute_cancel(&mut self) -> CommandResult {
        self.browser.cancel_pending();
        CommandResult::None
    }

    pub fn execute_open_file(&mut self) -> CommandResult {
        match self.browser.open_selected_externally() {
            Ok(()) => CommandResult::None,
            Err(e) => CommandResult::Error(e),
        }
    }
}
