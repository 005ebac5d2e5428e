use crate::error::{Result, ShoppingError};
use serde::{Deserialize, Serialize};
use shopping_list_common::{ArchivalPolicy, EmptyMonthRule, LoadOptions, SortMode};
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "SHOPPING_LIST_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub seed_example_history: bool,
    pub reject_empty_archive: bool,
    pub default_sort: SortMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed_example_history: true,
            reject_empty_archive: false,
            default_sort: SortMode::Default,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ShoppingError::Config("Diretório home não encontrado".into()))?;
        Ok(home.join(".config").join("shopping-list").join("config.json"))
    }

    /// Where the list blobs live: environment, then config, then the platform data dir
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        dirs::data_dir()
            .map(|dir| dir.join("shopping-list"))
            .ok_or_else(|| ShoppingError::Config("Diretório de dados não encontrado".into()))
    }

    pub fn set_data_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.data_dir = Some(dir);
        self.save()
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            seed_example_history: self.seed_example_history,
        }
    }

    pub fn archival_policy(&self) -> ArchivalPolicy {
        ArchivalPolicy {
            empty_month: if self.reject_empty_archive {
                EmptyMonthRule::Reject
            } else {
                EmptyMonthRule::Allow
            },
        }
    }
}
