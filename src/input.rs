//! Shell command parsing

/// What a line of input asks the shell to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    List,
    ParentDirectory,
    EnterDirectory(String),
    Select(String),
    Filter(String),
    Count(String),
    Rename,
    Delete,
    Confirm(Option<String>),
    Cancel,
    Open,
    SetHidden(bool),
    Save,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one line of input.
///
/// Arguments are everything after the first space, passed on verbatim so
/// names with inner or trailing spaces survive.
pub fn parse_command(line: &str) -> Action {
    let line = line.trim_end_matches(['\n', '\r']).trim_start();
    let (cmd, arg) = match line.split_once(' ') {
        Some((cmd, arg)) => (cmd, Some(arg)),
        None => (line, None),
    };
    let arg_string = || arg.unwrap_or_default().to_string();

    match (cmd, arg) {
        ("", _) => Action::None,
        ("ls" | "l", _) => Action::List,
        ("up" | ".." | "h" | "-", _) => Action::ParentDirectory,
        ("cd", Some("..")) => Action::ParentDirectory,
        ("cd", Some(name)) if !name.is_empty() => Action::EnterDirectory(name.to_string()),
        ("cd", _) => Action::ParentDirectory,
        ("sel" | "s", Some(name)) if !name.is_empty() => Action::Select(name.to_string()),
        ("filter" | "f", _) => Action::Filter(arg_string()),
        ("count" | "c", _) => Action::Count(arg_string()),
        ("rename" | "mv" | "r", _) => Action::Rename,
        ("delete" | "rm" | "x", _) => Action::Delete,
        ("yes" | "y", arg) => Action::Confirm(arg.filter(|a| !a.is_empty()).map(str::to_string)),
        ("no" | "n", _) => Action::Cancel,
        ("open" | "o" | "=", _) => Action::Open,
        ("set", Some(opt)) => parse_set_option(opt.trim()),
        ("w" | "write", _) => Action::Save,
        ("help" | "?", _) => Action::Help,
        ("q" | "quit" | "exit", _) => Action::Quit,
        (other, _) => Action::Unknown(other.to_string()),
    }
}

fn parse_set_option(arg: &str) -> Action {
    let (negated, option) = match arg.strip_prefix("no") {
        Some(opt) => (true, opt),
        None => (false, arg),
    };
    match option {
        "hidden" | "hid" => Action::SetHidden(!negated),
        _ => Action::Unknown(format!("set {arg}")),
    }
}

pub const HELP: &str = "\
Commands:
  ls                List the current directory
  up, ..            Go to the parent directory
  cd NAME           Enter a child directory
  sel NAME          Select an entry (selecting a directory enters it)
  filter [.EXT]     Only list files with this extension (empty clears)
  count [.EXT]      Count files with this extension
  rename            Ask to rename the selection, then: yes NEW_NAME
  delete            Ask to delete the selection, then: yes
  no                Cancel the pending confirmation
  open              Open the selected file with the configured opener
  set [no]hidden    Show or hide dotfiles
  w                 Save settings
  q                 Quit";
