use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the settings file location
pub const CONFIG_ENV_VAR: &str = "SESSION_SCHEDULER_CONFIG";

const SETTINGS_FILE_NAME: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file from `SESSION_SCHEDULER_CONFIG`, falling back to the
    /// platform config directory.
    pub fn default_location() -> Option<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(Self::new(path));
        }

        ProjectDirs::from("com", "SessionScheduler", "SessionScheduler")
            .map(|dirs| Self::new(dirs.config_dir().join(SETTINGS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings; a missing file yields the defaults
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Write settings, creating the parent directory if needed
    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::ThemePreference;
    use crate::models::ui::ViewMode;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("settings.toml"));

        assert_eq!(service.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join("settings.toml"));

        let settings = Settings {
            default_view: ViewMode::Month,
            toast_duration_ms: 5000,
            theme: ThemePreference::Dark,
            exclude_active_from_conflicts: true,
        };
        service.save(&settings).unwrap();

        assert_eq!(service.load().unwrap(), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "default_view = \"day\"\n").unwrap();

        let settings = SettingsService::new(&path).load().unwrap();
        assert_eq!(settings.default_view, ViewMode::Day);
        assert_eq!(settings.toast_duration_ms, 3000);
        assert!(!settings.exclude_active_from_conflicts);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "toast_duration_ms = 1\n").unwrap();

        assert!(SettingsService::new(&path).load().is_err());
    }

    #[test]
    fn test_malformed_file_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "default_view = [").unwrap();

        assert!(SettingsService::new(&path).load().is_err());
    }

    #[test]
    fn test_save_rejects_invalid_settings() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("settings.toml"));
        let settings = Settings {
            toast_duration_ms: 0,
            ..Settings::default()
        };

        assert!(service.save(&settings).is_err());
        assert!(!service.path().exists());
    }
}
