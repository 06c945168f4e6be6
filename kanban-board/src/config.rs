//! Board configuration loaded with figment.
//!
//! Sources in precedence order (later sources override earlier ones):
//! 1. Built-in defaults
//! 2. `kanban.toml`, `kanban.yaml` or `kanban.json` in the config directory, if present
//! 3. Environment variables prefixed with `KANBAN_` (e.g. `KANBAN_NEW_COLUMN_TITLE`)

use crate::error::{KanbanError, Result};
use crate::persist::STORAGE_KEY;
use crate::storage::FileStorage;
use crate::types::Column;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "KANBAN_";

/// Base name of config files looked up in the config directory
pub const CONFIG_FILE_STEM: &str = "kanban";

/// Settings for a board store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Key the snapshot is saved under
    pub storage_key: String,
    /// Directory for [`FileStorage`]; unset means the embedder supplies storage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Title given to columns added without one
    pub new_column_title: String,
    /// Whether the default board starts with sample tasks in "To Do"
    pub seed_sample_tasks: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            data_dir: None,
            new_column_title: Column::DEFAULT_TITLE.to_string(),
            seed_sample_tasks: true,
        }
    }
}

impl BoardConfig {
    /// Load configuration from defaults, files in `config_dir`, and the environment
    pub fn load(config_dir: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(config_dir).extract()?;
        config.validate()?;
        debug!(storage_key = %config.storage_key, "Loaded board configuration");
        Ok(config)
    }

    /// Build the figment with all sources in precedence order
    pub fn figment(config_dir: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(dir) = config_dir {
            figment = figment
                .merge(Toml::file(dir.join(format!("{CONFIG_FILE_STEM}.toml"))))
                .merge(Yaml::file(dir.join(format!("{CONFIG_FILE_STEM}.yaml"))))
                .merge(Json::file(dir.join(format!("{CONFIG_FILE_STEM}.json"))));
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Check values that would make storage unusable
    pub fn validate(&self) -> Result<()> {
        let key = self.storage_key.as_str();
        if key.trim().is_empty() {
            return Err(KanbanError::invalid_value("storage_key", "must not be empty"));
        }
        if key.trim() != key {
            return Err(KanbanError::invalid_value(
                "storage_key",
                "must not have leading or trailing whitespace",
            ));
        }
        if key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(KanbanError::invalid_value(
                "storage_key",
                "must be a plain name without path separators",
            ));
        }
        Ok(())
    }

    /// File storage under `data_dir`, when one is configured
    pub fn file_storage(&self) -> Option<FileStorage> {
        self.data_dir.as_ref().map(FileStorage::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_defaults() {
        let config = BoardConfig::load(None).unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.storage_key, "kanban-board-state");
        assert_eq!(config.new_column_title, "New Column");
        assert!(config.seed_sample_tasks);
        assert!(config.file_storage().is_none());
    }

    #[test]
    #[serial]
    fn test_toml_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("kanban.toml"),
            r#"
new_column_title = "Backlog"
seed_sample_tasks = false
data_dir = "/tmp/boards"
"#,
        )
        .unwrap();

        let config = BoardConfig::load(Some(temp.path())).unwrap();
        assert_eq!(config.new_column_title, "Backlog");
        assert!(!config.seed_sample_tasks);
        assert_eq!(config.storage_key, STORAGE_KEY);
        assert_eq!(
            config.file_storage().unwrap().root(),
            Path::new("/tmp/boards")
        );
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("kanban.yaml"), "new_column_title: From file\n").unwrap();

        std::env::set_var("KANBAN_NEW_COLUMN_TITLE", "From env");
        let config = BoardConfig::load(Some(temp.path()));
        std::env::remove_var("KANBAN_NEW_COLUMN_TITLE");

        assert_eq!(config.unwrap().new_column_title, "From env");
    }

    #[test]
    #[serial]
    fn test_invalid_storage_key_rejected() {
        std::env::set_var("KANBAN_STORAGE_KEY", "../escape");
        let result = BoardConfig::load(None);
        std::env::remove_var("KANBAN_STORAGE_KEY");

        assert!(matches!(result, Err(KanbanError::InvalidValue { .. })));
    }

    #[test]
    fn test_validate_padded_key() {
        let config = BoardConfig {
            storage_key: " board ".into(),
            ..BoardConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(KanbanError::InvalidValue { field, .. }) if field == "storage_key"
        ));
    }

    #[test]
    fn test_validate_empty_key() {
        let config = BoardConfig {
            storage_key: "  ".into(),
            ..BoardConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
