//! Shared application settings (dataset path, image URL defaults).
//!
//! The settings file lives at `~/.config/osrs-items/settings.toml`:
//! ```toml
//! [dataset]
//! path = "/home/me/osrs/items.json"
//!
//! [image]
//! width = 120
//! thumb = true
//! variant_mode = "discard"
//! ```
//! Every field is optional; missing ones take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::image::{DEFAULT_THUMB_WIDTH, ImageOptions, VariantMode};

/// Dataset file used when neither the CLI nor the settings file names one.
pub const DEFAULT_DATASET_FILE: &str = "items.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dataset: DatasetSettings,
    pub image: ImageSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub width: u32,
    pub thumb: bool,
    pub variant_mode: VariantMode,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_THUMB_WIDTH,
            thumb: true,
            variant_mode: VariantMode::Discard,
        }
    }
}

impl ImageSettings {
    pub fn to_options(&self) -> ImageOptions {
        ImageOptions::new()
            .with_width(self.width)
            .with_thumb(self.thumb)
            .with_variant_mode(self.variant_mode)
    }
}

/// Canonical path to the settings file: `~/.config/osrs-items/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("osrs-items").join("settings.toml")
}

/// Read settings from `path`. A missing file yields the defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&contents).map_err(|e| SettingsError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Read settings from the canonical path, falling back to defaults (with a
/// warning) if the file is unreadable.
pub fn load_settings() -> Settings {
    let path = settings_path();
    load_settings_from(&path).unwrap_or_else(|e| {
        log::warn!("Ignoring settings file {}: {e}", path.display());
        Settings::default()
    })
}

/// Write settings to `path` atomically via a temporary sibling file.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(settings)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Write settings to the canonical path.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    save_settings_to(&settings_path(), settings)
}

/// Resolve the dataset path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `dataset.path` in `settings.toml`
/// 3. `items.json` in the current directory
pub fn resolve_dataset_path(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    cli_override
        .or_else(|| settings.dataset.path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_FILE))
}
