//! Playlist data model, independent of the on-disk format

mod playlist;

pub use playlist::Playlist;
