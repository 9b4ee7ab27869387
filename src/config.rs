//! Configuration loader plus strongly typed settings structures.
//!
//! One optional TOML file covering UI preferences. An explicitly passed path
//! must exist and parse; the default location may be absent, in which case
//! built-in defaults apply.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration object.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Title shown in the top bar
    #[serde(default = "default_title")]
    pub title: String,

    /// Drawer width as a percentage of the terminal width
    #[serde(default = "default_drawer_width_percent")]
    pub drawer_width_percent: u16,

    /// How long a selection message stays on screen, in seconds
    #[serde(default = "default_snackbar_secs")]
    pub snackbar_secs: u64,
}

fn default_title() -> String {
    "My Nav Drawer".to_string()
}

fn default_drawer_width_percent() -> u16 {
    33
}

fn default_snackbar_secs() -> u64 {
    3
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            drawer_width_percent: default_drawer_width_percent(),
            snackbar_secs: default_snackbar_secs(),
        }
    }
}

impl Config {
    /// Load configuration. An explicit path is required to parse; without
    /// one, the platform config dir is consulted and a missing file falls
    /// back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nav-drawer").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ui.title, "My Nav Drawer");
        assert_eq!(config.ui.drawer_width_percent, 33);
        assert_eq!(config.ui.snackbar_secs, 3);
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [ui]
            title = "Demo"
            drawer_width_percent = 50
            snackbar_secs = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.title, "Demo");
        assert_eq!(config.ui.drawer_width_percent, 50);
        assert_eq!(config.ui.snackbar_secs, 5);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [ui]
            title = "Demo"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.title, "Demo");
        assert_eq!(config.ui.drawer_width_percent, 33);
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.title, "My Nav Drawer");
    }
}
