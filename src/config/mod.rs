// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading
//! user preferences from a `settings.toml` file.
//!
//! All fields are optional in the file; missing values fall back to the
//! defaults in [`defaults`]. A malformed file is not fatal: `load()` returns
//! the default configuration together with a warning for the log.

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedMarquee";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowSection,
    #[serde(default)]
    pub audio: AudioSection,
    #[serde(default)]
    pub assets: AssetsSection,
}

/// Window geometry overrides.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WindowSection {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AudioSection {
    /// Soundtrack volume, 0.0 to 1.0. Clamped on use.
    pub volume: Option<f32>,
    /// Whether to attempt unsolicited playback at startup.
    pub autoplay: Option<bool>,
    /// Track label shown in the player overlay.
    pub track_title: Option<String>,
    /// Artist label shown in the player overlay.
    pub track_artist: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AssetsSection {
    /// Directory holding `clips/` and the soundtrack file.
    pub dir: Option<PathBuf>,
    /// Soundtrack file name inside the asset directory.
    pub soundtrack: Option<String>,
}

impl Config {
    pub fn volume(&self) -> f32 {
        self.audio
            .volume
            .unwrap_or(defaults::DEFAULT_VOLUME)
            .clamp(0.0, 1.0)
    }

    pub fn autoplay(&self) -> bool {
        self.audio.autoplay.unwrap_or(true)
    }

    pub fn window_size(&self) -> (u32, u32) {
        (
            self.window.width.unwrap_or(defaults::WINDOW_DEFAULT_WIDTH),
            self.window.height.unwrap_or(defaults::WINDOW_DEFAULT_HEIGHT),
        )
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.assets
            .dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::DEFAULT_ASSETS_DIR))
    }

    pub fn soundtrack_path(&self) -> PathBuf {
        let file = self
            .assets
            .soundtrack
            .clone()
            .unwrap_or_else(|| defaults::DEFAULT_SOUNDTRACK.to_string());
        self.assets_dir().join(file)
    }

    pub fn track_title(&self) -> String {
        self.audio
            .track_title
            .clone()
            .unwrap_or_else(|| defaults::DEFAULT_TRACK_TITLE.to_string())
    }

    pub fn track_artist(&self) -> String {
        self.audio
            .track_artist
            .clone()
            .unwrap_or_else(|| defaults::DEFAULT_TRACK_ARTIST.to_string())
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults when the file is missing
/// or unreadable. The second element carries a warning message for the log
/// when the file existed but could not be used.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = get_default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(e) => (
            Config::default(),
            Some(format!("ignoring unreadable settings file: {}", e)),
        ),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
