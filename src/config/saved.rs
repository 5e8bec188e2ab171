//! Settings that can be saved to config file

use std::io::Write;
use std::path::{Path, PathBuf};

use toml::map::Map;

#[derive(Clone, Debug, Default)]
pub struct SavedSettings {
    pub show_hidden: Option<bool>,
}

impl SavedSettings {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fsbrowse").join("config.toml"))
    }

    /// Load existing config as a TOML table
    pub fn load_existing() -> Map<String, toml::Value> {
        Self::config_path()
            .map(|p| Self::load_from(&p))
            .unwrap_or_default()
    }

    fn load_from(path: &Path) -> Map<String, toml::Value> {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| s.parse::<toml::Table>().ok())
            .unwrap_or_default()
    }

    /// Save settings to config file, merging with existing config
    pub fn save(&self) -> std::io::Result<PathBuf> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "config dir not found")
        })?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut table = Self::load_from(path);
        self.apply_to_table(&mut table);

        let content = toml::to_string_pretty(&table)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut file = std::fs::File::create(path)?;
        file.write_all(content.as_bytes())?;

        Ok(())
    }

    fn apply_to_table(&self, table: &mut Map<String, toml::Value>) {
        if let Some(v) = self.show_hidden {
            table.insert("show_hidden".to_string(), toml::Value::Boolean(v));
        }
    }
}
