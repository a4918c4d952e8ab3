// Settings service
// Reads and writes selector settings as TOML on disk

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
#[cfg(not(debug_assertions))]
use directories::ProjectDirs;

use crate::models::settings::SelectorSettings;

const SETTINGS_FILE: &str = "settings.toml";

/// Loads and stores [`SelectorSettings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service rooted at the platform config directory, or the working
    /// directory when no home directory can be resolved.
    pub fn with_default_path() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        #[cfg(debug_assertions)]
        {
            PathBuf::from(SETTINGS_FILE)
        }

        #[cfg(not(debug_assertions))]
        {
            if let Some(proj_dirs) = ProjectDirs::from("com", "WeekdaySelector", "WeekdaySelector") {
                proj_dirs.config_dir().join(SETTINGS_FILE)
            } else {
                PathBuf::from(SETTINGS_FILE)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the stored settings, or defaults when nothing has been saved yet
    pub fn load(&self) -> Result<SelectorSettings> {
        if !self.path.exists() {
            log::info!("No settings at {:?}, using defaults", self.path);
            return Ok(SelectorSettings::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {:?}", self.path))?;
        let settings: SelectorSettings =
            toml::from_str(&contents).context("Failed to parse settings")?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        log::info!("Loaded settings from {:?}", self.path);
        Ok(settings)
    }

    /// Update settings
    pub fn save(&self, settings: &SelectorSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings to {:?}", self.path))?;

        log::info!("Saved settings to {:?}", self.path);
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.save(&SelectorSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::LabelStyle;
    use tempfile::TempDir;

    fn setup_service() -> (TempDir, SettingsService) {
        let dir = tempfile::tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(SETTINGS_FILE));
        (dir, service)
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let (_dir, service) = setup_service();
        let settings = service.load().unwrap();
        assert_eq!(settings, SelectorSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, service) = setup_service();

        let settings = SelectorSettings {
            locale: Some("fr_FR".to_string()),
            first_day_of_week: 1,
            label_style: LabelStyle::Narrow,
            selected_color: "#1e90ff".to_string(),
            selected_days: vec![0, 4],
            ..Default::default()
        };
        service.save(&settings).unwrap();

        let loaded = service.load().unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_save_rejects_invalid_settings() {
        let (_dir, service) = setup_service();

        let settings = SelectorSettings {
            background_color: "not a color".to_string(),
            ..Default::default()
        };
        assert!(service.save(&settings).is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let (_dir, service) = setup_service();
        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), "selected_days = [3, 9]\n").unwrap();

        assert!(service.load().is_err());
    }

    #[test]
    fn test_reset_settings() {
        let (_dir, service) = setup_service();
        let settings = SelectorSettings {
            first_day_of_week: 3,
            ..Default::default()
        };
        service.save(&settings).unwrap();

        service.reset().unwrap();
        assert_eq!(service.load().unwrap(), SelectorSettings::default());
    }
}
