use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Deduplicated set of track paths
///
/// Entries iterate in lexicographic order, so the 1-based numbering shown by
/// `list` is the same one `remove --index` consumes on the next run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    entries: BTreeSet<PathBuf>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track path; returns false if it was already present
    pub fn insert(&mut self, path: PathBuf) -> bool {
        self.entries.insert(path)
    }

    /// Remove the entry at a 1-based position
    pub fn remove_at(&mut self, index: i64) -> Option<PathBuf> {
        let position = self.position(index)?;
        let path = self.entries.iter().nth(position)?.clone();
        self.entries.remove(&path);
        Some(path)
    }

    /// Translate a 1-based index into a 0-based position, if in range
    pub fn position(&self, index: i64) -> Option<usize> {
        let index = usize::try_from(index).ok()?;
        (1..=self.entries.len()).contains(&index).then(|| index - 1)
    }

    /// Check if a track path is already listed
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains(path)
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter()
    }

    /// Entries paired with their 1-based index
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &PathBuf)> {
        self.entries.iter().enumerate().map(|(i, path)| (i + 1, path))
    }

    /// Number of tracks in this playlist
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<PathBuf> for Playlist {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
