// src/config.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::models::SubjectKind;
use crate::logging::project_directory;

pub const SETTINGS_FILE: &str = "settings.json";

/// User settings, read from `settings.json` in the config directory.
/// Every field is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub locale: String,
    pub url_scan_delay_ms: u64,
    pub file_scan_delay_ms: u64,
    pub image_scan_delay_ms: u64,
    pub flash_ttl_secs: u64,
    pub tip_rotation_secs: u64,
    /// Below this terminal width the nav bar collapses.
    pub compact_width: u16,
    pub show_disclaimer: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            url_scan_delay_ms: 1500,
            file_scan_delay_ms: 2000,
            image_scan_delay_ms: 2000,
            flash_ttl_secs: 5,
            tip_rotation_secs: 5,
            compact_width: 80,
            show_disclaimer: true,
        }
    }
}

impl Settings {
    /// Artificial delay before a scan of `kind` resolves.
    pub fn scan_delay(&self, kind: SubjectKind) -> Duration {
        let ms = match kind {
            SubjectKind::Url => self.url_scan_delay_ms,
            SubjectKind::File => self.file_scan_delay_ms,
            SubjectKind::Image => self.image_scan_delay_ms,
        };
        Duration::from_millis(ms)
    }

    pub fn flash_ttl(&self) -> Duration {
        Duration::from_secs(self.flash_ttl_secs)
    }

    pub fn tip_rotation(&self) -> Duration {
        Duration::from_secs(self.tip_rotation_secs)
    }

    /// Settings with every delay set to zero, for tests.
    #[cfg(test)]
    pub fn instant() -> Self {
        Self {
            url_scan_delay_ms: 0,
            file_scan_delay_ms: 0,
            image_scan_delay_ms: 0,
            show_disclaimer: false,
            ..Self::default()
        }
    }

    /// Loads settings from the default location, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults.");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Could not read settings from {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("Invalid settings file {}", path.display()))?;
        info!(path = %path.display(), locale = %settings.locale, "Loaded settings.");
        Ok(settings)
    }
}

pub fn config_path() -> PathBuf {
    if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_dir().join(SETTINGS_FILE)
    } else {
        PathBuf::from(".").join(".config").join(SETTINGS_FILE)
    }
}
