use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default = "default_report_dir")]
    pub report_dir: String,
}

fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}

fn default_report_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            report_dir: default_report_dir(),
        }
    }
}

impl Config {
    /// ~/.punchclock (falls back to the working directory without a home)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".punchclock")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchclock.conf")
    }

    /// Return the full path of the default key-value store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("store.json")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Path given with `--store`: absolute as-is, relative to the current
    /// directory otherwise. Used by `init` and by every other command.
    pub fn resolve_store_path(raw: &str) -> PathBuf {
        let path = PathBuf::from(raw);
        if path.is_absolute() {
            return path;
        }
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path,
        }
    }

    /// Initialize configuration and store files.
    ///
    /// In test mode the config file is left alone.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let store_path = match custom_store {
            Some(name) => Self::resolve_store_path(&name),
            None => Self::store_file(),
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            report_dir: default_report_dir(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        }

        // Create empty store if not exists
        if !store_path.exists() {
            if let Some(parent) = store_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&store_path, "{}")?;
        }

        Ok(config)
    }
}
