//! Controller configuration and gesture tuning.
//!
//! Both structs are serializable so hosts can persist them next to their own
//! settings. Every field has a default, so partial JSON documents are valid.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_DAYS: u32 = 7;
pub const DEFAULT_MAX_DAYS: u32 = 365;
pub const DEFAULT_INITIAL_DAYS: u32 = 30;

/// Construction options for a [`TimelineController`](crate::TimelineController).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Lower zoom clamp in days
    pub min_days: u32,
    /// Upper zoom clamp in days
    pub max_days: u32,
    /// Starting zoom in days
    pub initial_days: u32,
    /// Starting position; `None` means "now" at construction time
    pub initial_center_date: Option<NaiveDateTime>,
    /// Empirical gesture constants
    pub tuning: GestureTuning,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            min_days: DEFAULT_MIN_DAYS,
            max_days: DEFAULT_MAX_DAYS,
            initial_days: DEFAULT_INITIAL_DAYS,
            initial_center_date: None,
            tuning: GestureTuning::default(),
        }
    }
}

/// Tuning constants for gesture feel.
///
/// Velocities are in pixels per millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureTuning {
    /// Release speed above which a touch pan continues with momentum
    pub touch_momentum_threshold: f32,
    /// Release speed above which a horizontal mouse drag continues with momentum
    pub mouse_momentum_threshold: f32,
    /// Per-frame velocity multiplier during momentum
    pub momentum_friction: f32,
    /// Momentum stops once speed drops below this
    pub momentum_stop_velocity: f32,
    /// Assumed duration of one animation frame
    pub frame_interval_ms: f32,
    /// Movement needed before a mouse drag locks its direction
    pub drag_lock_threshold_px: f32,
    /// Zoom change per wheel delta unit when ctrl/meta is held
    pub wheel_zoom_sensitivity: f32,
    /// Multiplier applied by `zoom_in`
    pub zoom_in_factor: f64,
    /// Multiplier applied by `zoom_out`
    pub zoom_out_factor: f64,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            touch_momentum_threshold: 0.5,
            mouse_momentum_threshold: 0.3,
            momentum_friction: 0.95,
            momentum_stop_velocity: 0.1,
            frame_interval_ms: 16.0,
            drag_lock_threshold_px: 5.0,
            wheel_zoom_sensitivity: 0.01,
            zoom_in_factor: 0.7,
            zoom_out_factor: 1.4,
        }
    }
}

impl GestureTuning {
    fn validate(&self) -> Result<()> {
        let positive = [
            ("touch_momentum_threshold", self.touch_momentum_threshold),
            ("mouse_momentum_threshold", self.mouse_momentum_threshold),
            ("momentum_stop_velocity", self.momentum_stop_velocity),
            ("frame_interval_ms", self.frame_interval_ms),
            ("drag_lock_threshold_px", self.drag_lock_threshold_px),
            ("wheel_zoom_sensitivity", self.wheel_zoom_sensitivity),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                bail!("tuning.{name} must be a positive number, got {value}");
            }
        }
        // Friction of 1.0 or more would never let momentum stop.
        if !(self.momentum_friction > 0.0 && self.momentum_friction < 1.0) {
            bail!("tuning.momentum_friction must be in (0, 1), got {}", self.momentum_friction);
        }
        if !(self.zoom_in_factor > 0.0 && self.zoom_in_factor < 1.0) {
            bail!("tuning.zoom_in_factor must be in (0, 1), got {}", self.zoom_in_factor);
        }
        if !(self.zoom_out_factor.is_finite() && self.zoom_out_factor > 1.0) {
            bail!("tuning.zoom_out_factor must be greater than 1, got {}", self.zoom_out_factor);
        }
        Ok(())
    }
}

impl TimelineConfig {
    /// Parses a config from a JSON document and validates it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("invalid timeline config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read timeline config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Writes the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write timeline config {}", path.display()))
    }

    /// Checks bounds and tuning values.
    pub fn validate(&self) -> Result<()> {
        if self.min_days == 0 {
            bail!("min_days must be at least 1");
        }
        if self.min_days > self.max_days {
            bail!("min_days ({}) is greater than max_days ({})", self.min_days, self.max_days);
        }
        self.tuning.validate()
    }

    /// Returns a copy that is always usable: bounds ordered, `min_days >= 1`,
    /// `initial_days` inside the bounds, invalid tuning replaced by defaults.
    pub fn normalized(&self) -> Self {
        let mut config = self.clone();

        if config.min_days == 0 {
            log::warn!("min_days of 0 raised to 1");
            config.min_days = 1;
        }
        if config.max_days == 0 {
            log::warn!("max_days of 0 raised to 1");
            config.max_days = 1;
        }
        if config.min_days > config.max_days {
            log::warn!(
                "min_days ({}) > max_days ({}), swapping bounds",
                config.min_days,
                config.max_days
            );
            std::mem::swap(&mut config.min_days, &mut config.max_days);
        }

        let clamped = config.initial_days.clamp(config.min_days, config.max_days);
        if clamped != config.initial_days {
            log::warn!("initial_days {} clamped to {}", config.initial_days, clamped);
            config.initial_days = clamped;
        }

        if let Err(err) = config.tuning.validate() {
            log::warn!("{err:#}; using default gesture tuning");
            config.tuning = GestureTuning::default();
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = TimelineConfig::from_json_str(r#"{ "max_days": 120 }"#).unwrap();
        assert_eq!(config.min_days, 7);
        assert_eq!(config.max_days, 120);
        assert_eq!(config.initial_days, 30);
        assert_eq!(config.tuning, GestureTuning::default());
    }

    #[test]
    fn test_center_date_parses() {
        let config =
            TimelineConfig::from_json_str(r#"{ "initial_center_date": "2024-03-15T12:00:00" }"#)
                .unwrap();
        let expected = chrono::NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(config.initial_center_date, Some(expected));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let err = TimelineConfig::from_json_str(r#"{ "min_days": 40, "max_days": 10 }"#)
            .unwrap_err();
        assert!(format!("{err:#}").contains("greater than max_days"));
    }

    #[test]
    fn test_validate_rejects_bad_friction() {
        let mut config = TimelineConfig::default();
        config.tuning.momentum_friction = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_normalized_fixes_everything() {
        let config = TimelineConfig {
            min_days: 90,
            max_days: 0,
            initial_days: 500,
            tuning: GestureTuning {
                frame_interval_ms: -1.0,
                ..GestureTuning::default()
            },
            ..TimelineConfig::default()
        };
        let fixed = config.normalized();
        assert_eq!((fixed.min_days, fixed.max_days), (1, 90));
        assert_eq!(fixed.initial_days, 90);
        assert_eq!(fixed.tuning, GestureTuning::default());
        assert!(fixed.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join("timeline_nav_config_test.json");
        let _ = fs::remove_file(&path);

        let config = TimelineConfig {
            min_days: 3,
            initial_days: 14,
            ..TimelineConfig::default()
        };
        config.save(&path).unwrap();
        let loaded = TimelineConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_mentions_path() {
        let path = std::env::temp_dir().join("timeline_nav_does_not_exist.json");
        let err = TimelineConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("timeline_nav_does_not_exist.json"));
    }
}
