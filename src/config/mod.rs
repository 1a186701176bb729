use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f64,
    #[serde(default = "default_summary_days")]
    pub summary_days: usize,
    #[serde(default)]
    pub include_today: bool,
}

fn default_log_file() -> String {
    Config::home_dir()
        .join("time_log.csv")
        .to_string_lossy()
        .to_string()
}
fn default_hours_per_day() -> f64 {
    8.0
}
fn default_summary_days() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            hours_per_day: default_hours_per_day(),
            summary_days: default_summary_days(),
            include_today: false,
        }
    }
}

impl Config {
    fn home_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Return the configuration directory (`~/.worktime`)
    pub fn config_dir() -> PathBuf {
        Self::home_dir().join(".worktime")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worktime.conf")
    }

    /// Session log path with `~/` expanded.
    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// Write the config file unless one already exists.
    /// Returns `true` when a new file was written.
    pub fn save_if_missing(&self) -> AppResult<bool> {
        let path = Self::config_file();
        if path.exists() {
            return Ok(false);
        }

        fs::create_dir_all(Self::config_dir())
            .map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(&path, self.to_yaml()?).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        Ok(true)
    }

    /// Apply the global `--log-file` / `--hours-per-day` overrides.
    pub fn with_overrides(mut self, log_file: Option<&str>, hours_per_day: Option<f64>) -> Self {
        if let Some(f) = log_file {
            self.log_file = f.to_string();
        }
        if let Some(h) = hours_per_day {
            self.hours_per_day = h;
        }
        self
    }
}
