//! File opener configuration

use std::path::Path;

use toml::map::Map;
use tracing::debug;

use super::saved::SavedSettings;
use crate::error::Result;
use crate::opener::{self, ExternalOpener};

/// Maps MIME type patterns to open commands.
///
/// Configured under `[openers]`:
///
/// ```toml
/// [openers]
/// "image/jpeg" = "feh {}"
/// "video/*" = "mpv {}"
/// ```
///
/// Exact patterns win over wildcards; anything unmatched falls back to the
/// platform open command.
#[derive(Clone, Debug, Default)]
pub struct Openers {
    rules: Vec<(String, String)>,
}

impl Openers {
    /// Load openers from the config file
    pub fn load() -> Self {
        Self::from_table(&SavedSettings::load_existing())
    }

    pub fn from_table(table: &Map<String, toml::Value>) -> Self {
        let mut rules = Vec::new();

        if let Some(toml::Value::Table(openers)) = table.get("openers") {
            for (pattern, value) in openers {
                if let toml::Value::String(cmd) = value {
                    rules.push((pattern.clone(), cmd.clone()));
                }
            }
        }

        Self::sort_rules(&mut rules);
        Self { rules }
    }

    fn sort_rules(rules: &mut [(String, String)]) {
        rules.sort_by(|a, b| {
            let a_wild = a.0.contains('*');
            let b_wild = b.0.contains('*');
            match (a_wild, b_wild) {
                (false, true) => std::cmp::Ordering::Less,
                (true, false) => std::cmp::Ordering::Greater,
                _ => a.0.cmp(&b.0),
            }
        });
    }

    /// Command template for a file path
    pub fn get_opener(&self, path: &Path) -> String {
        let mime = self.detect_mime(path);

        for (pattern, cmd) in &self.rules {
            if self.matches_pattern(&mime, pattern) {
                return cmd.clone();
            }
        }

        opener::default_open_template().to_string()
    }

    fn detect_mime(&self, path: &Path) -> String {
        if path.extension().is_some()
            && let Some(mime) = mime_guess::from_path(path).first()
        {
            return mime.to_string();
        }

        if let Ok(Some(kind)) = infer::get_from_path(path) {
            return kind.mime_type().to_string();
        }

        String::new()
    }

    fn matches_pattern(&self, mime: &str, pattern: &str) -> bool {
        if pattern == mime {
            return true;
        }

        if let Some(prefix) = pattern.strip_suffix("/*")
            && let Some(mime_type) = mime.split('/').next()
        {
            return !mime.is_empty() && mime_type == prefix;
        }

        false
    }

    /// Full shell command line for opening `path`
    pub fn command_for(&self, path: &Path) -> String {
        let template = self.get_opener(path);
        opener::substitute_template(&template, &opener::quote_path(path))
    }
}

impl ExternalOpener for Openers {
    fn open(&self, path: &Path) -> Result<()> {
        let command = self.command_for(path);
        debug!(path = %path.display(), %command, "dispatching opener");
        opener::spawn_detached(&command)
    }
}
