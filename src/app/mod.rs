//! Interactive shell state and loop
//!
//! A thin presentation layer over [`BrowserState`]: it reads one command
//! per line, runs it, and prints listings, prompts and errors.

mod execute;
mod handlers;

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::config::SavedSettings;
use crate::error::BrowseError;
use crate::filesystem::FileSystemGateway;
use crate::input::parse_command;
use crate::navigation::BrowserState;
use crate::opener::ExternalOpener;
use crate::render;

/// Result of executing a command
#[derive(Debug)]
pub enum CommandResult {
    None,
    Output(Vec<String>),
    Error(BrowseError),
    Save,
    Exit,
}

impl CommandResult {
    fn line(line: impl Into<String>) -> Self {
        CommandResult::Output(vec![line.into()])
    }
}

/// Main application state
pub struct App<F, O> {
    pub browser: BrowserState<F, O>,
    pub show_hidden: bool,
    /// Extension filter text as typed; empty means no filter
    pub filter: String,
    pub should_exit: bool,
}

impl<F: FileSystemGateway, O: ExternalOpener> App<F, O> {
    pub fn new(browser: BrowserState<F, O>, show_hidden: bool) -> Self {
        Self {
            browser,
            show_hidden,
            filter: String::new(),
            should_exit: false,
        }
    }

    pub fn prompt(&self) -> String {
        render::prompt(
            self.browser.current_dir(),
            self.browser.selection(),
            self.browser.pending(),
        )
    }

    pub fn current_settings(&self) -> SavedSettings {
        SavedSettings {
            show_hidden: Some(self.show_hidden),
        }
    }

    /// Run one input line and return what to show
    pub fn handle_line(&mut self, line: &str) -> CommandResult {
        let result = self.execute(parse_command(line));
        match result {
            CommandResult::Exit => {
                self.should_exit = true;
                CommandResult::Exit
            }
            CommandResult::Save => match self.current_settings().save() {
                Ok(path) => {
                    info!(path = %path.display(), "settings saved");
                    CommandResult::line(format!("saved {}", path.display()))
                }
                Err(e) => {
                    warn!(%e, "failed to save config");
                    CommandResult::line(format!("error: failed to save config: {e}"))
                }
            },
            other => other,
        }
    }

    /// Read commands from `input` until EOF or `q`, writing to `output`
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        write!(output, "{}", self.prompt())?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                CommandResult::Output(lines) => {
                    for l in lines {
                        writeln!(output, "{l}")?;
                    }
                }
                CommandResult::Error(e) => writeln!(output, "error: {e}")?,
                CommandResult::None | CommandResult::Save | CommandResult::Exit => {}
            }
            if self.should_exit {
                break;
            }
            write!(output, "{}", self.prompt())?;
            output.flush()?;
        }
        Ok(())
    }
}
