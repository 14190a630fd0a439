use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Error, Result};
use crate::geometry::{Size, TRAY_GAP};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tray: TrayConfig,
    pub window: WindowConfig,
    pub save: SaveConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayConfig {
    pub title: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    /// Distance between the tray icon's bottom edge and the window.
    pub gap: f64,
    pub always_on_top: bool,
    pub decorations: bool,
    pub resizable: bool,
    pub skip_taskbar: bool,
    pub hide_on_blur: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    pub default_file_name: String,
    pub filter_name: String,
    pub extensions: Vec<String>,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            title: "⚡".to_string(),
            tooltip: "Prompt Amplifier".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 600.0,
            gap: TRAY_GAP,
            always_on_top: true,
            decorations: false,
            resizable: false,
            skip_taskbar: true,
            hide_on_blur: true,
        }
    }
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            default_file_name: "prompt.txt".to_string(),
            filter_name: "Text".to_string(),
            extensions: vec!["txt".to_string(), "md".to_string()],
        }
    }
}

impl WindowConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Config {
    pub fn load_or_create() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            info!("wrote default config to {:?}", config_path);
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "prompt-amplifier", "prompt-amplifier")
            .ok_or(Error::ConfigDir)?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
