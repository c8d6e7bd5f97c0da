//! Player launcher trait and command line building

use crate::error::{BgmusicError, Result};
use crate::store::config::{PlayerConfig, PLAYLIST_PLACEHOLDER};
use std::path::Path;

/// Player launcher trait - allows swapping the real process spawner for a stub
pub trait PlayerLauncher {
    /// Run the player and block until it exits
    fn launch(&self, command: &PlayerCommand) -> Result<()>;
}

impl<T: PlayerLauncher + ?Sized> PlayerLauncher for &T {
    fn launch(&self, command: &PlayerCommand) -> Result<()> {
        (**self).launch(command)
    }
}

/// Fully resolved player command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    /// Executable to spawn
    pub program: String,

    /// Arguments after `{playlist}` substitution and word splitting
    pub args: Vec<String>,
}

impl PlayerCommand {
    /// Build the command line for `config` playing `playlist`
    ///
    /// The playlist path is substituted literally before splitting, so a
    /// template that needs to survive spaces in the path must quote it
    /// (e.g. `--playlist='{playlist}'`).
    pub fn build(config: &PlayerConfig, playlist: &Path) -> Result<Self> {
        let template = config
            .args
            .replace(PLAYLIST_PLACEHOLDER, &playlist.to_string_lossy());

        let args = shlex::split(&escape_comments(&template))
            .ok_or(BgmusicError::PlayerArgs { template })?;

        Ok(Self {
            program: config.player_path(),
            args,
        })
    }
}

/// Backslash-escape `#` at the start of unquoted words
///
/// `shlex` drops the rest of the line after such a `#`; player arguments have
/// no comments, so the character must stay part of the word.
fn escape_comments(template: &str) -> String {
    let mut escaped = String::with_capacity(template.len());
    let mut in_single = false;
    let mut in_double = false;
    let mut after_backslash = false;
    let mut word_start = true;

    for ch in template.chars() {
        if after_backslash {
            after_backslash = false;
            escaped.push(ch);
            continue;
        }

        match ch {
            '\\' if !in_single => after_backslash = true,
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '#' if word_start && !in_single && !in_double => escaped.push('\\'),
            _ => {}
        }

        word_start = !in_single && !in_double && ch.is_whitespace();
        escaped.push(ch);
    }

    escaped
}
