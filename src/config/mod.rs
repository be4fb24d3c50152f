use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_images_dir() -> String {
    Config::config_dir()
        .join("images")
        .to_string_lossy()
        .to_string()
}
fn default_date_format() -> String {
    "%d-%m-%Y".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            images_dir: default_images_dir(),
            date_format: default_date_format(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("slvm")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".slvm")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("slvm.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("resultats.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Apply `--db` / `--images` command-line overrides.
    pub fn with_overrides(mut self, db: Option<&str>, images: Option<&str>) -> Self {
        if let Some(db) = db {
            self.database = expand_tilde(db).to_string_lossy().to_string();
        }
        if let Some(images) = images {
            self.images_dir = images.to_string();
        }
        self
    }

    pub fn images_path(&self) -> PathBuf {
        expand_tilde(&self.images_dir)
    }

    /// First character of `separator_char`, used under table headers.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Write the configuration file (skipped in test mode) and return the
    /// configuration that the rest of `init` should use.
    pub fn init_all(db: Option<&str>, images: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let resolve = |name: &str| -> String {
            let p = expand_tilde(name);
            if p.is_absolute() || is_test {
                p.to_string_lossy().to_string()
            } else {
                dir.join(p).to_string_lossy().to_string()
            }
        };

        let mut config = Self::default();
        if let Some(name) = db {
            config.database = resolve(name);
        }
        if let Some(images) = images {
            config.images_dir = images.to_string();
        }

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}
