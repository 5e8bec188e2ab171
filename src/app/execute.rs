//! Action execution dispatch

use crate::filesystem::FileSystemGateway;
use crate::input::{Action, HELP};
use crate::opener::ExternalOpener;

use super::{App, CommandResult};

impl<F: FileSystemGateway, O: ExternalOpener> App<F, O> {
    /// Execute an action
    pub fn execute(&mut self, action: Action) -> CommandResult {
        match action {
            Action::None => CommandResult::None,

            // Navigation actions
            Action::List => self.execute_list(),
            Action::ParentDirectory => self.execute_parent_directory(),
            Action::EnterDirectory(name) => self.execute_enter_directory(&name),
            Action::Select(name) => self.execute_select(&name),

            // Filter actions
            Action::Filter(ext) => self.execute_filter(ext),
            Action::Count(ext) => self.execute_count(&ext),

            // File operations
            Action::Rename => self.execute_request_rename(),
            Action::Delete => self.execute_request_delete(),
            Action::Confirm(arg) => self.execute_confirm(arg.as_deref()),
            Action::Cancel => self.execute_cancel(),
            Action::Open => self.execute_open_file(),

            // Settings
            Action::SetHidden(show) => {
                self.show_hidden = show;
                self.execute_list()
            }
            Action::Save => CommandResult::Save,

            Action::Help => CommandResult::Output(HELP.lines().map(str::to_string).collect()),
            Action::Quit => CommandResult::Exit,
            Action::Unknown(cmd) => CommandResult::line(format!("unknown command: {cmd} (try `help`)")),
        }
    }
}
