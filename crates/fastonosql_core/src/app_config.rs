use crate::{CoreError, ValueType};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DELIMITER: &str = " ";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub workspace: WorkspaceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Separator used when composite elements are rendered for display.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Type preselected in the key dialog for new keys.
    #[serde(default = "default_value_type")]
    pub default_type: ValueType,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            default_type: default_value_type(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// When false, duplicating a tab leaves the new tab's input empty.
    #[serde(default = "default_true")]
    pub duplicate_copies_text: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            duplicate_copies_text: true,
        }
    }
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_value_type() -> ValueType {
    ValueType::String
}

fn default_true() -> bool {
    true
}

pub struct AppConfigStore {
    path: PathBuf,
}

impl AppConfigStore {
    pub fn new() -> Result<Self, CoreError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            CoreError::IoError(std::io::Error::other("Could not find config directory"))
        })?;

        let app_dir = config_dir.join("fastonosql");
        fs::create_dir_all(&app_dir)?;

        Ok(Self {
            path: app_dir.join("config.json"),
        })
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<AppConfig, CoreError> {
        if !self.path.exists() {
            log::debug!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config: AppConfig =
            serde_json::from_str(&content).map_err(|e| CoreError::InvalidConfig(e.to_string()))?;

        Ok(config)
    }

    pub fn save(&self, config: &AppConfig) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(config)
            .map_err(|e| CoreError::InvalidConfig(e.to_string()))?;
        fs::write(&self.path, content)?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
