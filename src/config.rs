use crate::error::{MemosError, Result};
use crate::model::Category;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".memos.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemosConfig {
    #[serde(default)]
    pub memos: MemosSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemosSettings {
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default = "default_id_length")]
    pub id_length: usize,

    #[serde(default = "default_category")]
    pub default_category: String,

    #[serde(default = "default_preview_length")]
    pub preview_length: usize,
}

fn default_path() -> String {
    ".memos".to_string()
}

fn default_storage_key() -> String {
    "memos".to_string()
}

fn default_id_length() -> usize {
    8
}

fn default_category() -> String {
    "personal".to_string()
}

fn default_preview_length() -> usize {
    150
}

impl Default for MemosSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            storage_key: default_storage_key(),
            id_length: default_id_length(),
            default_category: default_category(),
            preview_length: default_preview_length(),
        }
    }
}

impl MemosSettings {
    pub fn default_category(&self) -> Category {
        Category::from(self.default_category.as_str())
    }
}

impl MemosConfig {
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let config = Self::load_from(&config_path)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| MemosError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        let config: MemosConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(MemosError::NotInitialized);
            }
        }
    }

    fn validate(&self) -> Result<()> {
        let key = &self.memos.storage_key;
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(MemosError::Config(format!(
                "storage_key must be a plain file name, got '{}'",
                key
            )));
        }
        if self.memos.id_length == 0 {
            return Err(MemosError::Config(
                "id_length must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.memos.path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
