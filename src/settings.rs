//! Persisted add-on settings.
//!
//! The on-disk format is a flat JSON object with camelCase keys, the same
//! record the host editor keeps in the add-on's data file. Keys missing from
//! the file fall back to their defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Turn pasted video links into players.
    pub enhance_default_paste: bool,
    /// Start playback as soon as the player loads.
    pub enable_auto_play: bool,
    /// Show the danmaku comment overlay.
    pub enable_danmaku: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enhance_default_paste: true,
            enable_auto_play: false,
            enable_danmaku: true,
        }
    }
}

/// Identifies one boolean setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    EnhanceDefaultPaste,
    EnableAutoPlay,
    EnableDanmaku,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::EnhanceDefaultPaste,
        SettingKey::EnableDanmaku,
        SettingKey::EnableAutoPlay,
    ];

    /// The key as stored in the data file.
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::EnhanceDefaultPaste => "enhanceDefaultPaste",
            SettingKey::EnableAutoPlay => "enableAutoPlay",
            SettingKey::EnableDanmaku => "enableDanmaku",
        }
    }

    /// Accepts the stored camelCase name or its kebab-case spelling.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "enhanceDefaultPaste" | "enhance-default-paste" => Ok(SettingKey::EnhanceDefaultPaste),
            "enableAutoPlay" | "enable-auto-play" => Ok(SettingKey::EnableAutoPlay),
            "enableDanmaku" | "enable-danmaku" => Ok(SettingKey::EnableDanmaku),
            other => Err(Error::UnknownSetting(other.to_string())),
        }
    }
}

/// A toggle as presented in the host's settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingToggle {
    pub key: SettingKey,
    pub name: &'static str,
    pub description: &'static str,
}

/// The settings panel, in display order.
pub const SETTING_TOGGLES: [SettingToggle; 3] = [
    SettingToggle {
        key: SettingKey::EnhanceDefaultPaste,
        name: "开启粘贴强化",
        description: "支持将复制的视频链接转换为嵌入式播放器",
    },
    SettingToggle {
        key: SettingKey::EnableDanmaku,
        name: "开启弹幕",
        description: "开启嵌入式播放器的弹幕功能",
    },
    SettingToggle {
        key: SettingKey::EnableAutoPlay,
        name: "开启自动播放",
        description: "开启嵌入式播放器的自动播放功能",
    },
];

impl Settings {
    /// Loads settings from `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // an empty data file is what the host writes before the first save.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(&text).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        // prettify JSON so it's easy to inspect / diff.
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::SettingsEncode {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, json).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "settings saved");
        Ok(())
    }

    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::EnhanceDefaultPaste => self.enhance_default_paste,
            SettingKey::EnableAutoPlay => self.enable_auto_play,
            SettingKey::EnableDanmaku => self.enable_danmaku,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: bool) {
        let slot = match key {
            SettingKey::EnhanceDefaultPaste => &mut self.enhance_default_paste,
            SettingKey::EnableAutoPlay => &mut self.enable_auto_play,
            SettingKey::EnableDanmaku => &mut self.enable_danmaku,
        };
        *slot = value;
    }

    /// Applies a toggle change and persists the result right away.
    pub fn toggle(&mut self, key: SettingKey, value: bool, path: &Path) -> Result<()> {
        debug!(key = key.as_str(), value, "setting changed");
        self.set(key, value);
        self.save(path)
    }
}
