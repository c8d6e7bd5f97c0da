//! On-disk state under the config root
//!
//! Holds the optional player config and the playlist file. Nothing here
//! locks; a single running instance is assumed.

pub mod config;
pub mod paths;
pub mod playlist;

pub use config::PlayerConfig;
pub use paths::StorePaths;
pub use playlist::PlaylistStore;
