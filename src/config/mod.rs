// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use fluid_nav::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Veto the post-processing layer
//! config.render_effects = Some(false);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "FluidNav";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Whether the blurred "goo" layer is rendered behind the FAB cluster.
    /// `None` means "use the capability detection result as-is".
    #[serde(default)]
    pub render_effects: Option<bool>,
    /// Window scale multiplier applied to the base phone-shaped size.
    #[serde(default)]
    pub window_scale: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render_effects: Some(DEFAULT_RENDER_EFFECTS),
            window_scale: Some(DEFAULT_WINDOW_SCALE),
        }
    }
}

/// Ensures persisted window scales stay inside the supported range so a
/// hand-edited config cannot request a degenerate window.
pub fn clamp_window_scale(scale: f32) -> f32 {
    scale.clamp(MIN_WINDOW_SCALE, MAX_WINDOW_SCALE)
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            render_effects: Some(false),
            window_scale: Some(1.5),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.render_effects, config.render_effects);
        assert_eq!(loaded.window_scale, config.window_scale);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.render_effects, Some(DEFAULT_RENDER_EFFECTS));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config::default();

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_enables_effects_at_base_scale() {
        let config = Config::default();
        assert_eq!(config.render_effects, Some(true));
        assert_eq!(config.window_scale, Some(DEFAULT_WINDOW_SCALE));
    }

    #[test]
    fn clamp_window_scale_bounds_extremes() {
        assert_eq!(clamp_window_scale(0.0), MIN_WINDOW_SCALE);
        assert_eq!(clamp_window_scale(100.0), MAX_WINDOW_SCALE);
        assert_eq!(clamp_window_scale(1.25), 1.25);
    }
}
