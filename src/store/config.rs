//! Player configuration (config.json)

use super::paths::StorePaths;
use crate::error::{BgmusicError, Result};
use serde::Deserialize;
use std::fs;

/// Executable launched by `play`
pub const DEFAULT_PLAYER: &str = "/usr/bin/mpv";

/// Shuffled, quiet, audio-only, resumes where it left off
pub const DEFAULT_ARGS: &str =
    "--volume=40 -vo=null  --save-position-on-quit -shuffle --playlist={playlist}";

/// Placeholder replaced by the playlist file path
pub const PLAYLIST_PLACEHOLDER: &str = "{playlist}";

/// External player settings
///
/// Keys missing from config.json keep their defaults; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Player executable path
    pub player: String,

    /// Argument template containing `{playlist}`
    pub args: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            player: DEFAULT_PLAYER.to_string(),
            args: DEFAULT_ARGS.to_string(),
        }
    }
}

impl PlayerConfig {
    /// Load config.json from the store, falling back to defaults
    pub fn load(paths: &StorePaths) -> Result<Self> {
        let path = paths.config_file();

        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_json(&content).map_err(|source| BgmusicError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Loaded config from {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Parse a JSON object, merging its keys over the defaults
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom(
                "config must be a JSON object with \"player\" and \"args\" keys",
            ));
        }
        serde_json::from_value(value)
    }

    /// Player path with a leading `~` expanded
    pub fn player_path(&self) -> String {
        shellexpand::tilde(&self.player).into_owned()
    }
}
