use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const APP_FOLDER_NAME: &str = "Assessment-Pro";
pub const SETTINGS_VERSION: &str = "0.2.0";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UiSettings {
    #[serde(default)]
    pub last_theme: Option<String>,
    #[serde(default)]
    pub window_size: Option<(f32, f32)>,
    #[serde(default)]
    pub last_page: Option<String>,
}

/// Shell configuration only. Domain data (categories, exams, drafts) never
/// lands here; it lives in page state and is dropped on navigation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    pub version: String,
    pub base_path: String,
    pub mode: String,
    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    pub fn new(base: &Path) -> Self {
        Self {
            version: SETTINGS_VERSION.to_string(),
            base_path: base.to_string_lossy().to_string(),
            mode: "gui".to_string(),
            ui: UiSettings::default(),
        }
    }
}

pub fn default_base_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));

    if let Some(dir) = exe_dir {
        return dir.join("data");
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_FOLDER_NAME)
}

pub fn ensure_base_folders(base: &Path) -> ConfigResult<()> {
    let dirs = [
        base.to_path_buf(),
        base.join("config"),
        base.join("themes"),
        base.join("logs"),
    ];

    for d in dirs {
        if !d.exists() {
            fs::create_dir_all(&d)?;
        }
    }

    Ok(())
}

pub fn settings_path(base: &Path) -> PathBuf {
    base.join("config").join("settings.json")
}

pub fn load_or_init_settings(base: &Path) -> ConfigResult<Settings> {
    let config_path = settings_path(base);

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        let mut settings: Settings = serde_json::from_str(&contents)?;

        // Keep base_path in sync with wherever we were launched from.
        if settings.base_path != base.to_string_lossy() {
            settings.base_path = base.to_string_lossy().to_string();
        }
        log::debug!("Loaded settings from {}", config_path.display());
        return Ok(settings);
    }

    let settings = Settings::new(base);
    save_settings(&settings, base)?;
    log::info!("Wrote default settings to {}", config_path.display());
    Ok(settings)
}

pub fn save_settings(settings: &Settings, base: &Path) -> ConfigResult<()> {
    let config_path = settings_path(base);
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(&config_path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        ensure_base_folders(dir.path()).unwrap();

        let settings = load_or_init_settings(dir.path()).unwrap();
        assert_eq!(settings.version, SETTINGS_VERSION);
        assert_eq!(settings.mode, "gui");
        assert!(settings_path(dir.path()).exists());
    }

    #[test]
    fn test_round_trip_keeps_ui_settings() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::new(dir.path());
        settings.ui.last_theme = Some("slate_dark".to_string());
        settings.ui.window_size = Some((1280.0, 800.0));
        save_settings(&settings, dir.path()).unwrap();

        let loaded = load_or_init_settings(dir.path()).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_base_path_resynced_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::new(dir.path());
        settings.base_path = "/somewhere/else".to_string();
        save_settings(&settings, dir.path()).unwrap();

        let loaded = load_or_init_settings(dir.path()).unwrap();
        assert_eq!(loaded.base_path, dir.path().to_string_lossy());
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        ensure_base_folders(dir.path()).unwrap();
        fs::write(settings_path(dir.path()), "{ not json").unwrap();

        let err = load_or_init_settings(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
