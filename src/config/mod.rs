use crate::errors::{AppError, AppResult};
use crate::loader::columns::ColumnAliases;
use crate::utils::time::parse_duration_to_minutes;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: String,
    pub weekly_target: String,
    pub name_columns: Vec<String>,
    pub check_in_columns: Vec<String>,
    pub check_out_columns: Vec<String>,
    pub separator_char: String,
}

impl Default for Config {
    fn default() -> Self {
        let aliases = ColumnAliases::default();
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            weekly_target: "16h".to_string(),
            name_columns: aliases.name,
            check_in_columns: aliases.check_in,
            check_out_columns: aliases.check_out,
            separator_char: "-".to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rweekhours")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rweekhours")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rweekhours.conf")
    }

    /// Return the default path of the session store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rweekhours.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Weekly target in minutes, parsed from `weekly_target`.
    pub fn target_minutes(&self) -> AppResult<i64> {
        parse_duration_to_minutes(&self.weekly_target)
    }

    /// First char of `separator_char`, `-` when empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Create the config directory and file (unless `is_test`) and return the
    /// session store path that was configured.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = crate::utils::path::expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(db_path)
    }
}
