use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_hours_file")]
    pub hours_file: String,
    #[serde(default = "default_notify_delay")]
    pub notify_delay_secs: u64,
    #[serde(default = "default_notify_title")]
    pub notify_title: String,
    #[serde(default = "default_notify_message")]
    pub notify_message: String,
    #[serde(default = "default_notify_sound")]
    pub notify_sound: String,
}

fn default_hours_file() -> String {
    Config::config_dir()
        .join("hours.csv")
        .to_string_lossy()
        .to_string()
}
fn default_notify_delay() -> u64 {
    4
}
fn default_notify_title() -> String {
    "PUNCH".to_string()
}
fn default_notify_message() -> String {
    "Punch in now".to_string()
}
fn default_notify_sound() -> String {
    "Glass".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hours_file: default_hours_file(),
            notify_delay_secs: default_notify_delay(),
            notify_title: default_notify_title(),
            notify_message: default_notify_message(),
            notify_sound: default_notify_sound(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchclock.conf")
    }

    /// Return the full path of the internal audit log
    pub fn log_file() -> PathBuf {
        Self::config_dir().join("punchclock.log")
    }

    /// Hours file path with `~/` expanded.
    pub fn hours_path(&self) -> PathBuf {
        expand_tilde(&self.hours_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
            Self::from_yaml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file is a valid "all defaults" config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration file unless one already exists.
    /// Returns true when a new file was written.
    pub fn init_file() -> AppResult<bool> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if path.exists() {
            return Ok(false);
        }

        let yaml = Self::default().to_yaml()?;
        fs::write(&path, yaml).map_err(|e| AppError::Config(format!("{:?}: {}", path, e)))?;
        Ok(true)
    }
}
