// SPDX-License-Identifier: MPL-2.0
//! Engine configuration, including loading and saving the caller's
//! preferred interaction feel to a `settings.toml` file.
//!
//! All fields are optional so a partially written file still loads; missing
//! values fall back to the constants in [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use preview_kit::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // A finer zoom step for trackpad-heavy hosts
//! config.zoom_step_factor = Some(1.1);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::{
    DEFAULT_CLAMP_PAN, DEFAULT_SCALE, DEFAULT_ZOOM_STEP_FACTOR, MAX_SCALE, MAX_ZOOM_STEP_FACTOR,
    MIN_SCALE, MIN_ZOOM_STEP_FACTOR,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PreviewKit";

/// Persistable engine tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Multiplicative zoom step applied by zoom in/out.
    #[serde(default)]
    pub zoom_step_factor: Option<f32>,
    /// Lower scale bound.
    #[serde(default)]
    pub min_scale: Option<f32>,
    /// Upper scale bound.
    #[serde(default)]
    pub max_scale: Option<f32>,
    /// Whether pan offsets are clamped to keep the image covering the
    /// viewport center.
    #[serde(default)]
    pub clamp_pan: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zoom_step_factor: Some(DEFAULT_ZOOM_STEP_FACTOR),
            min_scale: Some(MIN_SCALE),
            max_scale: Some(MAX_SCALE),
            clamp_pan: Some(DEFAULT_CLAMP_PAN),
        }
    }
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
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
