use std::path::PathBuf;
use thiserror::Error;

/// Failures the command layer classifies for the user
#[derive(Debug, Error)]
pub enum BgmusicError {
    /// config.json exists but is not valid JSON for a player config
    #[error("Failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `add` was given a path that does not exist or cannot be canonicalized
    #[error("Cannot resolve path {path:?}: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Index outside 1..=N, or a non-numeric answer at the prompt
    #[error("Invalid music")]
    InvalidMusic,

    /// Argument template could not be split into words (unbalanced quotes)
    #[error("Cannot split player arguments: {template}")]
    PlayerArgs { template: String },

    /// The player executable could not be started
    #[error("Failed to launch player {player:?}: {source}")]
    PlayerLaunch {
        player: String,
        #[source]
        source: std::io::Error,
    },

    /// Input closed while waiting for an answer
    #[error("Aborted!")]
    Aborted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BgmusicError {
    /// Usage errors exit with status 2, everything else with 1
    pub fn exit_code(&self) -> u8 {
        match self {
            BgmusicError::InvalidMusic => 2,
            _ => 1,
        }
    }
}

/// Result type for playlist and player operations
pub type Result<T> = std::result::Result<T, BgmusicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_music_is_usage_error() {
        assert_eq!(BgmusicError::InvalidMusic.exit_code(), 2);
        assert_eq!(BgmusicError::InvalidMusic.to_string(), "Invalid music");
        assert_eq!(BgmusicError::Aborted.exit_code(), 1);
    }
}
