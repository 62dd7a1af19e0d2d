//! Configuration management for studylog.
//!
//! Settings live in `config.json` inside the platform data directory
//! resolved by [`DataStorage`]:
//!
//! - **Windows**: `%LOCALAPPDATA%\studylog\studylog\config.json`
//! - **macOS**: `~/Library/Application Support/studylog/studylog/config.json`
//! - **Linux**: `~/.local/share/studylog/studylog/config.json`
//!
//! A missing file is not an error: every field has a default, so the tracker
//! works before `studylog init` has ever been run.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studylog::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.tick_interval_ms = 500;
//! config.save()?;
//! # Ok::<(), studylog::libs::error::StudyError>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::error::{Result, StudyError};
use crate::libs::language::Language;
use crate::libs::messages::Message;
use crate::libs::store::keys;
use chrono::Weekday;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

fn default_first_day() -> Weekday {
    Weekday::Mon
}

fn default_tick_interval_ms() -> u64 {
    1000
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Language of report labels, weekday names and chart captions.
    #[serde(default)]
    pub language: Language,

    /// Day on which the weekly totals roll over.
    #[serde(default = "default_first_day")]
    pub first_day_of_week: Weekday,

    /// Default directory for exported reports.
    ///
    /// When unset, exports go next to the last saved or loaded report, or
    /// to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports_dir: Option<PathBuf>,

    /// Period of the live elapsed-time display, in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            language: Language::default(),
            first_day_of_week: default_first_day(),
            reports_dir: None,
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new()
            .get_path(CONFIG_FILE_NAME)
            .map_err(|e| StudyError::io(DataStorage::new().base_path(), e))
    }

    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).map_err(|e| StudyError::io(path, e))?;
        serde_json::from_str(&config_str).map_err(|e| StudyError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path).map_err(|e| StudyError::io(path, e))?;
        serde_json::to_writer_pretty(&config_file, &self).map_err(|e| StudyError::Config(e.to_string()))
    }

    /// Removes the configuration file. Returns whether one existed.
    pub fn delete() -> Result<bool> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).map_err(|e| StudyError::io(&path, e))?;
        Ok(true)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    /// Directory an export without an explicit path is written to.
    ///
    /// `saved_data_path` is the last report path recorded in the store.
    pub fn export_dir(&self, saved_data_path: &str) -> PathBuf {
        if let Some(dir) = &self.reports_dir {
            return dir.clone();
        }
        Path::new(saved_data_path)
            .parent()
            .filter(|dir| !saved_data_path.is_empty() && dir.is_dir())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Interactive setup, starting from the current values.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        let theme = ColorfulTheme::default();

        let language_index = Language::ALL.iter().position(|l| *l == config.language).unwrap_or(0);
        let language_items: Vec<String> = Language::ALL.iter().map(|l| l.to_string()).collect();
        let selected = Select::with_theme(&theme)
            .with_prompt(Message::PromptLanguage.to_string())
            .items(&language_items)
            .default(language_index)
            .interact()
            .map_err(|e| StudyError::Config(e.to_string()))?;
        config.language = Language::ALL[selected];

        let day_items: Vec<&str> = keys::WEEKDAYS.iter().map(|day| config.language.weekday(*day)).collect();
        let selected = Select::with_theme(&theme)
            .with_prompt(Message::PromptFirstDayOfWeek.to_string())
            .items(&day_items)
            .default(config.first_day_of_week.num_days_from_monday() as usize)
            .interact()
            .map_err(|e| StudyError::Config(e.to_string()))?;
        config.first_day_of_week = keys::WEEKDAYS[selected];

        let reports_dir: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptReportsDir.to_string())
            .with_initial_text(
                config
                    .reports_dir
                    .as_ref()
                    .map(|dir| dir.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()
            .map_err(|e| StudyError::Config(e.to_string()))?;
        config.reports_dir = match reports_dir.trim() {
            "" => None,
            dir => Some(PathBuf::from(dir)),
        };

        Ok(config)
    }
}
