//! Config root layout

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Default config root, relative to the user's home
pub const DEFAULT_ROOT: &str = "~/.config/bgmusic";

/// Manages the bgmusic config directory
#[derive(Debug, Clone)]
pub struct StorePaths {
    /// Root directory (~/.config/bgmusic)
    root: PathBuf,

    /// Optional config.json
    config_file: PathBuf,

    /// playlist.m3u, one absolute path per line
    playlist_file: PathBuf,
}

impl StorePaths {
    /// Lay out the store under an arbitrary root
    pub fn new(root: PathBuf) -> Self {
        let config_file = root.join("config.json");
        let playlist_file = root.join("playlist.m3u");

        Self {
            root,
            config_file,
            playlist_file,
        }
    }

    /// The fixed location under the user's home directory
    pub fn from_home() -> Self {
        let root = shellexpand::tilde(DEFAULT_ROOT);
        Self::new(PathBuf::from(root.as_ref()))
    }

    /// Create the root directory and an empty playlist file if missing
    pub fn init(&self) -> Result<()> {
        if !self.root.exists() {
            log::debug!("Creating config root at {:?}", self.root);
        }
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create config directory {:?}", self.root))?;

        // Open in append mode so an existing playlist is never truncated
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.playlist_file)
            .with_context(|| format!("Failed to create playlist {:?}", self.playlist_file))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn playlist_file(&self) -> &Path {
        &self.playlist_file
    }
}
