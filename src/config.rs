use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub picker: PickerConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Project type rendered when none is given on the command line
    pub default_project_type: String,
    /// Spaces per indentation level in text output
    pub indent_width: usize,
    /// Append checkbox ids to text output rows
    pub show_ids: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Color scheme: auto, dark, light, none
    pub color_scheme: String,
    /// Poll timeout for input events, in milliseconds
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            picker: PickerConfig::default(),
            tui: TuiConfig::default(),
        }
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            default_project_type: "python".to_string(),
            indent_width: 2,
            show_ids: false,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            color_scheme: "auto".to_string(),
            tick_ms: 250,
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, or from the default
    /// location (`~/.config/scaffold-picker/config.toml`) when it exists,
    /// falling back to defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Default config file location under the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("scaffold-picker").join("config.toml"))
    }

    fn read_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.picker.indent_width == 0 {
            return Err(ConfigError::Invalid("indent_width must be at least 1".to_string()).into());
        }
        if self.tui.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be at least 1".to_string()).into());
        }

        let scheme = self.tui.color_scheme.as_str();
        if !matches!(scheme, "auto" | "dark" | "light" | "none") {
            return Err(ConfigError::Invalid(format!(
                "unknown color_scheme '{}'",
                scheme
            ))
            .into());
        }

        Ok(())
    }
}
