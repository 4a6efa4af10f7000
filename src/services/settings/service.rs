use crate::models::settings::PickerSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "picker.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the per-user config file, or `picker.toml` in the
    /// current directory when no config directory can be resolved.
    pub fn user_default() -> Self {
        match Self::default_config_path() {
            Some(path) => Self::new(path),
            None => {
                log::warn!("Unable to resolve config directory; using current dir for settings");
                Self::new(CONFIG_FILE_NAME)
            }
        }
    }

    /// `<config dir>/month-range-picker/picker.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "Ken24T", "month-range-picker")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the settings file.
    pub fn load(&self) -> Result<PickerSettings> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file {:?}", self.path))?;

        let settings: PickerSettings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {:?}", self.path))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Load the settings file, falling back to defaults when it is missing
    /// or unusable.
    pub fn load_or_default(&self) -> PickerSettings {
        if !self.path.exists() {
            log::info!("No settings file at {:?}; using defaults", self.path);
            return PickerSettings::default();
        }

        self.load().unwrap_or_else(|err| {
            log::warn!("Failed to load settings, using defaults: {:#}", err);
            PickerSettings::default()
        })
    }

    /// Validate and write the settings file, creating its directory.
    pub fn save(&self, settings: &PickerSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create settings directory {:?}", dir))?;
        }

        let contents = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings file {:?}", self.path))?;

        log::info!("Saved settings to {:?}", self.path);
        Ok(())
    }
}
