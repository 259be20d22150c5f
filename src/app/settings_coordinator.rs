//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting application settings to storage,
//! plus resolution of the timeline config at startup. Settings are stored as
//! JSON strings in eframe's persistent storage.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use timeline_nav::TimelineConfig;

/// Storage key of the last used timeline config
pub const CONFIG_KEY: &str = "timeline_config";
/// Storage key of the last committed view
pub const VIEW_KEY: &str = "timeline_view";

/// The committed view, restored on the next launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedView {
    pub center_date: NaiveDateTime,
    pub days_visible: u32,
}

/// Where the startup config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given on the command line
    CommandLine(PathBuf),
    /// `<config dir>/timeline-nav/config.json`
    UserConfigFile(PathBuf),
    /// A config saved by a previous session
    Storage,
    Default,
}

impl ConfigSource {
    /// Human-readable origin for logs.
    pub fn describe(&self) -> String {
        match self {
            ConfigSource::CommandLine(path) | ConfigSource::UserConfigFile(path) => path.display().to_string(),
            ConfigSource::Storage => "saved settings".to_string(),
            ConfigSource::Default => "defaults".to_string(),
        }
    }
}

/// Result of startup config resolution.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: TimelineConfig,
    pub source: ConfigSource,
    /// Load error to surface in the UI (the config then falls back to defaults)
    pub error: Option<String>,
}

/// Coordinates generic settings persistence.
///
/// This coordinator provides type-safe loading and saving of any serializable
/// settings to eframe's persistent storage.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Saves a setting to persistent storage.
    ///
    /// # Type Parameters
    /// * `T` - The type to serialize, must implement Serialize
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    ///
    /// # Examples
    /// ```ignore
    /// SettingsCoordinator::save_setting(storage, VIEW_KEY, &view);
    /// ```
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => log::warn!("failed to serialize setting {key}: {err}"),
        }
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    ///
    /// # Type Parameters
    /// * `T` - The type to deserialize, must implement Deserialize
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    ///
    /// # Returns
    /// Some(value) if found and valid, None otherwise
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("ignoring stored setting {key}: {err}");
                None
            }
        }
    }

    /// Default location of the user config file.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("timeline-nav").join("config.json"))
    }

    /// Resolves the startup config.
    ///
    /// Precedence: command-line path, user config file (when it exists),
    /// stored config, defaults. The last stored view then overrides the
    /// initial center and zoom.
    pub fn resolve_config(
        cli_path: Option<&Path>,
        user_config_path: Option<&Path>,
        storage: Option<&dyn eframe::Storage>,
    ) -> ResolvedConfig {
        let mut error = None;
        let file = match cli_path {
            Some(path) => Some((path.to_path_buf(), ConfigSource::CommandLine(path.to_path_buf()))),
            None => user_config_path
                .filter(|path| path.exists())
                .map(|path| (path.to_path_buf(), ConfigSource::UserConfigFile(path.to_path_buf()))),
        };

        let loaded = file.and_then(|(path, source)| match TimelineConfig::load(&path) {
            Ok(config) => Some((config, source)),
            Err(err) => {
                log::error!("{err:#}");
                error = Some(format!("Config not loaded: {err:#}"));
                None
            }
        });

        let (mut config, source) = loaded
            .or_else(|| {
                Self::try_load_setting::<TimelineConfig>(storage, CONFIG_KEY).map(|c| (c, ConfigSource::Storage))
            })
            .unwrap_or_else(|| (TimelineConfig::default(), ConfigSource::Default));

        if let Some(view) = Self::try_load_setting::<PersistedView>(storage, VIEW_KEY) {
            config.initial_center_date = Some(view.center_date);
            config.initial_days = view.days_visible;
        }

        ResolvedConfig { config, source, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use eframe::Storage;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    fn view() -> PersistedView {
        PersistedView {
            center_date: NaiveDate::from_ymd_opt(2025, 5, 4).unwrap().and_hms_opt(10, 0, 0).unwrap(),
            days_visible: 90,
        }
    }

    #[test]
    fn test_save_and_load_simple() {
        let mut storage = MockStorage::new();

        SettingsCoordinator::save_setting(&mut storage, "test_key", &42i32);

        let loaded: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "test_key");
        assert_eq!(loaded, Some(42));
    }

    #[test]
    fn test_load_without_storage() {
        let loaded: Option<i32> = SettingsCoordinator::try_load_setting(None, "missing_key");
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_try_load_setting() {
        let mut storage = MockStorage::new();

        // Non-existent key
        let result: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "missing");
        assert_eq!(result, None);

        // Corrupt value
        storage.set_string("bad", "{not json".to_string());
        let result: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "bad");
        assert_eq!(result, None);

        // Save and load
        SettingsCoordinator::save_setting(&mut storage, "test", &123i32);
        let result: Option<i32> = SettingsCoordinator::try_load_setting(Some(&storage), "test");
        assert_eq!(result, Some(123));
    }

    #[test]
    fn test_resolve_defaults_without_anything() {
        let resolved = SettingsCoordinator::resolve_config(None, None, None);
        assert_eq!(resolved.source, ConfigSource::Default);
        assert_eq!(resolved.config, TimelineConfig::default());
        assert!(resolved.error.is_none());
    }

    #[test]
    fn test_resolve_stored_config_and_view() {
        let mut storage = MockStorage::new();
        let stored = TimelineConfig {
            max_days: 180,
            ..TimelineConfig::default()
        };
        SettingsCoordinator::save_setting(&mut storage, CONFIG_KEY, &stored);
        SettingsCoordinator::save_setting(&mut storage, VIEW_KEY, &view());

        let resolved = SettingsCoordinator::resolve_config(None, None, Some(&storage));
        assert_eq!(resolved.source, ConfigSource::Storage);
        assert_eq!(resolved.config.max_days, 180);
        assert_eq!(resolved.config.initial_days, 90);
        assert_eq!(resolved.config.initial_center_date, Some(view().center_date));
    }

    #[test]
    fn test_missing_user_config_file_is_skipped() {
        let path = std::env::temp_dir().join("timeline_nav_no_user_config.json");
        let resolved = SettingsCoordinator::resolve_config(None, Some(&path), None);
        assert_eq!(resolved.source, ConfigSource::Default);
        assert!(resolved.error.is_none());
    }

    #[test]
    fn test_broken_cli_config_reports_error_and_falls_back() {
        let path = std::env::temp_dir().join("timeline_nav_broken_cli_config.json");
        std::fs::write(&path, r#"{"min_days": 50, "max_days": 10}"#).unwrap();

        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, CONFIG_KEY, &TimelineConfig::default());

        let resolved = SettingsCoordinator::resolve_config(Some(&path), None, Some(&storage));
        assert_eq!(resolved.source, ConfigSource::Storage);
        assert!(resolved.error.is_some());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_cli_config_wins() {
        let path = std::env::temp_dir().join("timeline_nav_cli_config.json");
        std::fs::write(&path, r#"{"min_days": 2, "initial_days": 10}"#).unwrap();

        let resolved = SettingsCoordinator::resolve_config(Some(&path), None, None);
        assert_eq!(resolved.source, ConfigSource::CommandLine(path.clone()));
        assert_eq!(resolved.config.min_days, 2);
        assert_eq!(resolved.config.initial_days, 10);

        let _ = std::fs::remove_file(&path);
    }
}
