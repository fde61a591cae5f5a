//! Configuration loading for mauseu.
//!
//! An optional `config.toml` in the platform config directory overrides the
//! page's stylesheet constants. Every field has a default, so a missing file
//! or a partial file both work; a file that fails to parse is a startup
//! error.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use mauseu_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// All tunables, defaulting to the values the page ships with.
///
/// Colors are written the way a stylesheet writes them (`"#95C11E"`,
/// `"transparent"`); trigger positions keep their source form and are parsed
/// at bind time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cursor disc diameter in page pixels.
    pub cursor_diameter: f32,
    /// Accent color of the resting cursor.
    pub accent: Color,
    /// Color the nav and main sections fade to while scrolling.
    pub fade: Color,
    /// Height in pixels the nav grows to.
    pub nav_height: f32,
    pub nav_start: String,
    pub nav_scrub: f32,
    pub main_start: String,
    pub main_end: String,
    pub main_scrub: f32,
    /// Labels of the nav headings, left to right.
    pub headings: Vec<String>,
    /// Title rendered in block letters on the hero section.
    pub hero_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cursor_diameter: 25.0,
            accent: Color::rgb(0x95, 0xC1, 0x1E),
            fade: Color::BLACK,
            nav_height: 110.0,
            nav_start: "top -10%".to_string(),
            nav_scrub: 1.0,
            main_start: "top -50%".to_string(),
            main_end: "top -100%".to_string(),
            main_scrub: 2.0,
            headings: ["WORK", "STUDIO", "NEWS", "CONTACT"]
                .map(String::from)
                .to_vec(),
            hero_title: "MAUSEU".to_string(),
        }
    }
}

impl Config {
    /// Load from the platform config dir, falling back to defaults when no
    /// file exists.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and parse a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Where the config file lives for this platform, if a home exists.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "mauseu").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
