use crate::{
    constants::{
        APP_DIRECTORY_NAME, DATABASE_FILE_NAME, DEFAULT_CACHE_EXPIRATION_MS, DEFAULT_CACHE_SIZE,
        LOG_FILE_NAME,
    },
    errors::AppError,
    logging::logger::LogLevelEnum,
};
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_backup_dir")]
    pub backup_dir: PathBuf,
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    /// Defaults to a database file inside `data_dir`.
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default = "default_database_init_tables")]
    pub database_init_tables: bool,
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
    #[serde(default = "default_cache_expiration_ms")]
    pub cache_expiration_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Imported at startup when the store is empty.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

fn app_dir() -> PathBuf {
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIRECTORY_NAME)
}

fn default_data_dir() -> PathBuf {
    app_dir().join("data")
}

fn default_backup_dir() -> PathBuf {
    app_dir().join("backup")
}

fn default_images_dir() -> PathBuf {
    app_dir().join("images")
}

fn default_database_init_tables() -> bool {
    true
}

fn default_cache_size() -> usize {
    DEFAULT_CACHE_SIZE
}

fn default_cache_expiration_ms() -> u64 {
    DEFAULT_CACHE_EXPIRATION_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            backup_dir: default_backup_dir(),
            images_dir: default_images_dir(),
            database_url: None,
            database_init_tables: default_database_init_tables(),
            cache_size: default_cache_size(),
            cache_expiration_ms: default_cache_expiration_ms(),
            log_level: default_log_level(),
            seed_file: None,
        }
    }
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        toml::from_str::<Settings>(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Loads `path` when given, otherwise the default config file if present,
    /// otherwise the built-in defaults. An explicit path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(p) => {
                let content = std::fs::read_to_string(p).map_err(|e| {
                    AppError::Config(format!("cannot read '{}': {}", p.display(), e))
                })?;
                Self::from_toml(&content)
            }
            None => {
                let default_path = get_default_config_path();
                if default_path.is_file() {
                    Self::load(Some(&default_path))
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn database_url(&self) -> String {
        self.database_url.clone().unwrap_or_else(|| {
            format!(
                "sqlite://{}",
                self.data_dir.join(DATABASE_FILE_NAME).display()
            )
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }

    pub fn log_level(&self) -> LogLevelEnum {
        LogLevelEnum::from_str(&self.log_level).unwrap_or(LogLevelEnum::Info)
    }

    /// URLs and absolute paths are kept; other image paths live under `images_dir`.
    pub fn image_location(&self, image: &str) -> String {
        if image.contains("://") || Path::new(image).is_absolute() {
            image.to_string()
        } else {
            self.images_dir.join(image).display().to_string()
        }
    }

    pub fn cache_expiration(&self) -> Duration {
        Duration::from_millis(self.cache_expiration_ms)
    }

    pub fn create_directories(&self) -> Result<(), AppError> {
        for dir in [&self.data_dir, &self.backup_dir, &self.images_dir] {
            create_dir_all(dir).map_err(|e| {
                AppError::Config(format!(
                    "could not create directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

pub fn get_default_config_path() -> PathBuf {
    app_dir().join(crate::constants::CONFIG_FILE_NAME)
}
