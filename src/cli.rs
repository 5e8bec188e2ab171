//! Command-line argument parsing

use std::path::PathBuf;

use clap::Parser;

/// Browse a directory, filter by extension, rename and delete entries.
#[derive(Parser, Debug)]
#[command(name = "fsbrowse", version, about)]
pub struct Cli {
    /// Directory to start in (defaults to config, then the working directory)
    pub path: Option<PathBuf>,

    /// Show dotfiles in listings
    #[arg(short = 'a', long)]
    pub show_hidden: bool,

    /// Log filter, e.g. `debug` or `fsbrowse=trace` (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["fsbrowse"]).unwrap();
        assert!(cli.path.is_none());
        assert!(!cli.show_hidden);
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_parse_path_and_flags() {
        let cli =
            Cli::try_parse_from(["fsbrowse", "-a", "--log-level", "debug", "/tmp"]).unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("/tmp")));
        assert!(cli.show_hidden);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
