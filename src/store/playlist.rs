//! playlist.m3u reader/writer

use crate::error::{BgmusicError, Result};
use crate::model::Playlist;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Persists a [`Playlist`] as one absolute path per line
#[derive(Debug, Clone)]
pub struct PlaylistStore {
    path: PathBuf,
}

impl PlaylistStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the playlist file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every line, trimmed; duplicates and blank lines collapse
    pub fn load_all(&self) -> Result<Playlist> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Playlist::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect())
    }

    /// Truncate the file and write every entry on its own line
    pub fn save_all(&self, playlist: &Playlist) -> Result<()> {
        let mut content = String::new();
        for entry in playlist.iter() {
            content.push_str(entry.to_string_lossy().trim());
            content.push('\n');
        }

        fs::write(&self.path, content)?;
        log::debug!("Wrote {} entries to {:?}", playlist.len(), self.path);
        Ok(())
    }

    /// Resolve `music` (following symlinks) and add it; returns the resolved path
    pub fn add(&self, music: &Path) -> Result<PathBuf> {
        let resolved = fs::canonicalize(music).map_err(|source| BgmusicError::PathResolution {
            path: music.to_path_buf(),
            source,
        })?;

        // The playlist is UTF-8 text; a lossy write would store a different path
        if resolved.to_str().is_none() {
            return Err(BgmusicError::PathResolution {
                path: music.to_path_buf(),
                source: io::Error::new(ErrorKind::InvalidData, "path is not valid UTF-8"),
            });
        }

        let mut playlist = self.load_all()?;
        if playlist.contains(&resolved) {
            log::debug!("{:?} already in playlist", resolved);
        } else {
            playlist.insert(resolved.clone());
        }
        self.save_all(&playlist)?;

        log::info!("Added {:?}", resolved);
        Ok(resolved)
    }

    /// Remove the entry at a 1-based index; returns the removed path
    ///
    /// The file is left untouched when the index is out of range.
    pub fn remove(&self, index: i64) -> Result<PathBuf> {
        let mut playlist = self.load_all()?;
        let removed = playlist
            .remove_at(index)
            .ok_or(BgmusicError::InvalidMusic)?;
        self.save_all(&playlist)?;

        log::info!("Removed [{}] {:?}", index, removed);
        Ok(removed)
    }

    /// Replace the playlist with an empty file
    pub fn remove_all(&self) -> Result<()> {
        fs::write(&self.path, "")?;
        log::info!("Cleared playlist {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> PlaylistStore {
        PlaylistStore::new(temp_dir.path().join("playlist.m3u"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(store_in(&temp_dir).load_all().unwrap().is_empty());
    }

    #[test]
    fn test_load_trims_and_deduplicates() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(
            store.path(),
            "  /music/a.mp3\n/music/b.mp3  \n\n/music/a.mp3\n",
        )
        .unwrap();

        let playlist = store.load_all().unwrap();
        assert_eq!(playlist.len(), 2);
        assert!(playlist.contains(Path::new("/music/a.mp3")));
        assert!(playlist.contains(Path::new("/music/b.mp3")));
    }

    #[test]
    fn test_save_all_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "/old/1.mp3\n/old/2.mp3\n/old/3.mp3\n").unwrap();

        let playlist: Playlist = [PathBuf::from("/music/a.mp3")].into_iter().collect();
        store.save_all(&playlist).unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "/music/a.mp3\n");
    }

    #[test]
    fn test_save_load_fixed_point() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "/music/b.mp3\n/music/a.mp3\n/music/b.mp3\n").unwrap();

        let first = store.load_all().unwrap();
        store.save_all(&first).unwrap();
        let written = fs::read_to_string(store.path()).unwrap();

        store.save_all(&store.load_all().unwrap()).unwrap();
        assert_eq!(store.load_all().unwrap(), first);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), written);
    }

    #[test]
    fn test_add_canonicalizes() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let music_dir = temp_dir.path().join("music");
        fs::create_dir(&music_dir).unwrap();
        fs::write(music_dir.join("song.mp3"), b"dummy").unwrap();

        let indirect = music_dir.join("..").join("music").join("song.mp3");
        let resolved = store.add(&indirect).unwrap();

        assert_eq!(resolved, fs::canonicalize(music_dir.join("song.mp3")).unwrap());
        assert!(store.load_all().unwrap().contains(&resolved));
    }

    #[test]
    fn test_add_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let song = temp_dir.path().join("song.mp3");
        fs::write(&song, b"dummy").unwrap();

        store.add(&song).unwrap();
        store.add(&song).unwrap();

        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_add_follows_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let song = temp_dir.path().join("song.mp3");
        let link = temp_dir.path().join("link.mp3");
        fs::write(&song, b"dummy").unwrap();
        std::os::unix::fs::symlink(&song, &link).unwrap();

        store.add(&link).unwrap();
        store.add(&song).unwrap();

        let playlist = store.load_all().unwrap();
        assert_eq!(playlist.len(), 1);
        assert!(playlist.contains(&fs::canonicalize(&song).unwrap()));
    }

    #[test]
    fn test_add_missing_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "/music/a.mp3\n").unwrap();

        let result = store.add(&temp_dir.path().join("nope.mp3"));

        assert!(matches!(result, Err(BgmusicError::PathResolution { .. })));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "/music/a.mp3\n");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_add_non_utf8_path_fails() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let song = temp_dir.path().join(OsStr::from_bytes(b"caf\xE9.mp3"));
        fs::write(&song, b"dummy").unwrap();

        let result = store.add(&song);

        assert!(matches!(result, Err(BgmusicError::PathResolution { .. })));
        assert_eq!(fs::read_to_string(store.path()).unwrap_or_default(), "");
    }

    #[test]
    fn test_remove_out_of_range_leaves_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let original = "/music/b.mp3\n/music/a.mp3\n";
        fs::write(store.path(), original).unwrap();

        for index in [0, 3, -2] {
            assert!(matches!(
                store.remove(index),
                Err(BgmusicError::InvalidMusic)
            ));
        }
        assert_eq!(fs::read_to_string(store.path()).unwrap(), original);
    }

    #[test]
    fn test_remove_all() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "/music/a.mp3\n").unwrap();

        store.remove_all().unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
    }
}
