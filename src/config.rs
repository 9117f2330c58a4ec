//! Configuration handling for the form

use crate::submission::{DEFAULT_FILE_NAME, DEFAULT_TOAST_DURATION};
use anyhow::Result;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// User configuration, every key optional
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Directory the spreadsheet is written to
    pub export_dir: Option<PathBuf>,
    /// Base name of the spreadsheet, without extension
    pub export_file_name: Option<String>,
    /// How long the success toast stays visible
    pub notification_ms: Option<u64>,
    /// Clear the form after a successful submission
    pub reset_on_submit: Option<bool>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "registration-form", "registration-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Export directory: configured, else the download dir, else the working dir
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(|| UserDirs::new().and_then(|d| d.download_dir().map(PathBuf::from)))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn export_file_name(&self) -> &str {
        self.export_file_name
            .as_deref()
            .unwrap_or(DEFAULT_FILE_NAME)
    }

    pub fn notification_duration(&self) -> Duration {
        self.notification_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TOAST_DURATION)
    }

    pub fn reset_on_submit(&self) -> bool {
        self.reset_on_submit.unwrap_or(false)
    }
}
