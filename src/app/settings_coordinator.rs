//! Settings persistence coordination.
//!
//! Loader preferences are stored in eframe's persistent storage as JSON
//! strings, one key per setting.

use anyhow::{Context, Result};
use loadbutton::LoaderSettings;
use serde::Serialize;

pub const LOADER_SETTINGS_KEY: &str = "loader_settings";

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Saves a setting to persistent storage.
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }

    /// Loads and validates the loader settings.
    ///
    /// Missing settings yield the defaults; stored settings that do not parse
    /// or carry an invalid color are an error.
    pub fn load_loader_settings(storage: Option<&dyn eframe::Storage>) -> Result<LoaderSettings> {
        let Some(json_str) = storage.and_then(|s| s.get_string(LOADER_SETTINGS_KEY)) else {
            return Ok(LoaderSettings::default());
        };

        let settings: LoaderSettings = serde_json::from_str(&json_str)
            .with_context(|| format!("malformed '{}' entry", LOADER_SETTINGS_KEY))?;
        settings
            .indicator_kind()
            .with_context(|| format!("invalid '{}' entry", LOADER_SETTINGS_KEY))?;
        Ok(settings)
    }
}
