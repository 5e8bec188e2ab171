//! Configuration module
//!
//! Runtime options come from `prefer` (`fsbrowse/config`); the opener table
//! and `:w` persistence go through the TOML file directly.

mod openers;
mod saved;

use std::path::PathBuf;

pub use openers::Openers;
pub use saved::SavedSettings;

use prefer::Config as PreferConfig;

pub struct Config {
    inner: PreferConfig,
}

impl Config {
    pub async fn load() -> prefer::Result<Self> {
        let inner = prefer::load("fsbrowse/config").await?;
        Ok(Self { inner })
    }

    async fn get_bool(&self, key: &str) -> Option<bool> {
        self.inner
            .get(key)
            .await
            .ok()
            .and_then(|v: prefer::ConfigValue| v.as_bool())
    }

    async fn get_str(&self, key: &str) -> Option<String> {
        self.inner
            .get(key)
            .await
            .ok()
            .and_then(|v: prefer::ConfigValue| v.as_str().map(|s| s.to_string()))
    }

    pub async fn show_hidden(&self) -> bool {
        self.get_bool("show_hidden").await.unwrap_or(false)
    }

    pub async fn start_in_cwd(&self) -> bool {
        self.get_bool("start_in_cwd").await.unwrap_or(true)
    }

    /// Directory to start in when `start_in_cwd` is off
    pub async fn start_dir(&self) -> Option<PathBuf> {
        self.get_str("start_dir").await.map(PathBuf::from)
    }

    pub async fn settings(&self) -> Settings {
        Settings {
            show_hidden: self.show_hidden().await,
            start_in_cwd: self.start_in_cwd().await,
            start_dir: self.start_dir().await,
        }
    }
}

/// Resolved configuration values
#[derive(Clone, Debug)]
pub struct Settings {
    pub show_hidden: bool,
    pub start_in_cwd: bool,
    pub start_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_hidden: false,
            start_in_cwd: true,
            start_dir: None,
        }
    }
}

impl Settings {
    /// Pick the initial directory: explicit path, configured start dir,
    /// working directory, home, then `/`.
    pub fn initial_dir(&self, explicit: Option<PathBuf>) -> PathBuf {
        let configured = if self.start_in_cwd {
            None
        } else {
            self.start_dir.clone()
        };

        explicit
            .into_iter()
            .chain(configured)
            .chain(std::env::current_dir().ok())
            .chain(dirs::home_dir())
            .find(|p| p.is_dir())
            .unwrap_or_else(|| PathBuf::from("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(!settings.show_hidden);
        assert!(settings.start_in_cwd);
        assert!(settings.start_dir.is_none());
    }

    #[test]
    fn test_initial_dir_prefers_explicit() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::default();
        assert_eq!(
            settings.initial_dir(Some(dir.path().to_path_buf())),
            dir.path()
        );
    }

    #[test]
    fn test_initial_dir_skips_non_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, b"").unwrap();

        let settings = Settings {
            start_in_cwd: false,
            start_dir: Some(dir.path().to_path_buf()),
            ..Settings::default()
        };
        assert_eq!(settings.initial_dir(Some(file)), dir.path());
    }

    #[test]
    fn test_initial_dir_ignores_start_dir_in_cwd_mode() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            start_dir: Some(dir.path().to_path_buf()),
            ..Settings::default()
        };
        assert_ne!(settings.initial_dir(None), dir.path());
    }
}
