//! bgmusic - background music playlist manager
//!
//! Keeps a deduplicated list of local audio files in
//! `~/.config/bgmusic/playlist.m3u` and hands it to an external player.

pub mod commands;
pub mod error;
pub mod model;
pub mod player;
pub mod store;

pub use commands::{AppContext, Command, Dispatcher};
pub use error::BgmusicError;
pub use store::{PlayerConfig, PlaylistStore, StorePaths};
