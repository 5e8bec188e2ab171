//! Handing files off to external programs

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::info;

use crate::error::{BrowseError, Result};

/// Launches an external viewer/editor for a file.
///
/// Implementations dispatch and return; they never wait for the launched
/// program, and its exit status is not reported.
pub trait ExternalOpener {
    fn open(&self, path: &Path) -> Result<()>;
}

impl<T: ExternalOpener + ?Sized> ExternalOpener for Box<T> {
    fn open(&self, path: &Path) -> Result<()> {
        (**self).open(path)
    }
}

/// Platform default open command
pub fn default_open_template() -> &'static str {
    if cfg!(target_os = "macos") {
        "open {}"
    } else if cfg!(windows) {
        "start \"\" {}"
    } else {
        "xdg-open {}"
    }
}

/// Quote a path for the shell, keeping plain paths untouched
pub fn quote_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    if s.contains(|c: char| c.is_whitespace() || "'\"$`\\;&|<>()*?".contains(c)) {
        if cfg!(windows) {
            format!("\"{}\"", s)
        } else {
            format!("'{}'", s.replace('\'', r"'\''"))
        }
    } else {
        s.into_owned()
    }
}

/// Substitute `{}` in `template` with `args`, appending when absent
pub fn substitute_template(template: &str, args: &str) -> String {
    if template.contains("{}") {
        template.replace("{}", args)
    } else {
        format!("{} {}", template, args)
    }
}

/// Run `command` through the platform shell without waiting for it.
///
/// The child is detached from our stdio; its handle is dropped immediately.
pub fn spawn_detached(command: &str) -> Result<()> {
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_child| {
            info!(%command, "launched external opener");
        })
        .map_err(|source| BrowseError::Launch {
            command: command.to_string(),
            source,
        })
}
