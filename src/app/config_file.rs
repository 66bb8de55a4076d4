//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/libview/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::LayoutMetrics;

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// Pixel metrics of the terminal cells
    pub layout: LayoutConfig,
}

/// General application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Initial view type: list16, grid32, grid48 or grid64
    pub view: String,
    /// Show hidden files
    pub show_hidden: bool,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Watch the library for external changes
    pub watch: bool,
    /// Move deleted entries to the system trash
    pub use_trash: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            view: "grid32".to_string(),
            show_hidden: false,
            mouse_enabled: true,
            watch: true,
            use_trash: true,
        }
    }
}

/// Size of one terminal cell in layout pixels
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub cell_width: i32,
    pub cell_height: i32,
    pub scrollbar_width: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let metrics = LayoutMetrics::default();
        Self {
            cell_width: metrics.char_width,
            cell_height: metrics.line_height,
            scrollbar_width: metrics.scrollbar_width,
        }
    }
}

impl LayoutConfig {
    /// Layout metrics, ignoring non-positive sizes
    pub fn metrics(&self) -> LayoutMetrics {
        let defaults = LayoutMetrics::default();
        let positive = |v: i32, fallback: i32| if v > 0 { v } else { fallback };
        LayoutMetrics {
            char_width: positive(self.cell_width, defaults.char_width),
            line_height: positive(self.cell_height, defaults.line_height),
            scrollbar_width: self.scrollbar_width.max(0),
        }
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/libview)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("libview"))
    }

    /// Get the config file path (~/.config/libview/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        let Some(path) = Self::config_path().filter(|p| p.exists()) else {
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring config file: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert_eq!(config.general.view, "grid32");
        assert!(!config.general.show_hidden);
        assert!(config.general.mouse_enabled);
        assert!(config.general.watch);
        assert!(config.general.use_trash);
        assert_eq!(config.layout.metrics(), LayoutMetrics::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[general]
view = "list16"

[layout]
cell_height = 20
"#;
        let config: ConfigFile = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.view, "list16");
        assert!(config.general.watch); // default
        let metrics = config.layout.metrics();
        assert_eq!(metrics.line_height, 20);
        assert_eq!(metrics.char_width, 8); // default
    }

    #[test]
    fn test_non_positive_cell_sizes_fall_back() {
        let config: ConfigFile = toml::from_str("[layout]\ncell_width = 0\n").unwrap();
        assert_eq!(config.layout.metrics().char_width, 8);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[general]
show_hidden = true
use_trash = false
"#
        )
        .unwrap();

        let config = ConfigFile::load_from(file.path()).unwrap();
        assert!(config.general.show_hidden);
        assert!(!config.general.use_trash);
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "invalid toml {{{{").unwrap();

        assert!(ConfigFile::load_from(file.path()).is_err());
    }
}
