//! Subcommand dispatch
//!
//! Each subcommand works on state set up once by [`AppContext::init`] and
//! writes user-facing text to an injected writer.

mod prompt;

pub use prompt::{Prompt, TerminalPrompt};

use crate::error::{BgmusicError, Result};
use crate::model::Playlist;
use crate::player::{PlayerCommand, PlayerLauncher};
use crate::store::{PlayerConfig, PlaylistStore, StorePaths};
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Printed instead of a listing when there is nothing to show
pub const EMPTY_MESSAGE: &str = "Empty music list.";

/// A parsed subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play,
    List,
    Add { music: PathBuf },
    Remove { index: Option<i64>, all: bool },
}

/// Startup state shared by every subcommand
#[derive(Debug, Clone)]
pub struct AppContext {
    pub paths: StorePaths,
    pub config: PlayerConfig,
}

impl AppContext {
    /// Ensure the config root and playlist exist, then load the config
    pub fn init(paths: StorePaths) -> anyhow::Result<Self> {
        paths.init()?;
        let config = PlayerConfig::load(&paths)
            .with_context(|| format!("Cannot start with config {:?}", paths.config_file()))?;

        Ok(Self { paths, config })
    }
}

/// Runs subcommands against the playlist store
pub struct Dispatcher<L, P, W> {
    store: PlaylistStore,
    config: PlayerConfig,
    launcher: L,
    prompt: P,
    out: W,
}

impl<L: PlayerLauncher, P: Prompt, W: Write> Dispatcher<L, P, W> {
    pub fn new(context: AppContext, launcher: L, prompt: P, out: W) -> Self {
        Self {
            store: PlaylistStore::new(context.paths.playlist_file().to_path_buf()),
            config: context.config,
            launcher,
            prompt,
            out,
        }
    }

    pub fn run(&mut self, command: Command) -> Result<()> {
        log::debug!("Running {:?}", command);

        match command {
            Command::Play => self.play(),
            Command::List => self.list(),
            Command::Add { music } => self.add(&music),
            Command::Remove { index, all } => self.remove(index, all),
        }
    }

    /// Launch the player over the playlist file
    pub fn play(&mut self) -> Result<()> {
        if self.store.load_all()?.is_empty() {
            return self.print_empty();
        }

        let command = PlayerCommand::build(&self.config, self.store.path())?;
        self.launcher.launch(&command)
    }

    /// Print `[n] path` for every entry
    pub fn list(&mut self) -> Result<()> {
        let playlist = self.store.load_all()?;
        if playlist.is_empty() {
            return self.print_empty();
        }
        self.print_numbered(&playlist)
    }

    pub fn add(&mut self, music: &Path) -> Result<()> {
        self.store.add(music)?;
        writeln!(self.out, "\"{}\" added to playlist", music.display())?;
        Ok(())
    }

    /// Remove one entry by index (asked for when absent), or all after confirmation
    pub fn remove(&mut self, index: Option<i64>, all: bool) -> Result<()> {
        if all {
            if self.prompt.confirm("Remove ALL musics?")? {
                self.store.remove_all()?;
            } else {
                log::debug!("Clearing declined");
            }
            return Ok(());
        }

        let playlist = self.store.load_all()?;
        if playlist.is_empty() {
            return self.print_empty();
        }

        let index = match index {
            Some(index) => index,
            None => {
                self.print_numbered(&playlist)?;
                let answer = self.prompt.ask("Index")?;
                answer.parse::<i64>().map_err(|_| BgmusicError::InvalidMusic)?
            }
        };

        let removed = self.store.remove(index)?;
        writeln!(self.out, "\"{}\" removed from playlist", removed.display())?;
        Ok(())
    }

    fn print_numbered(&mut self, playlist: &Playlist) -> Result<()> {
        for (index, path) in playlist.numbered() {
            writeln!(self.out, "[{}] {}", index, path.display())?;
        }
        Ok(())
    }

    fn print_empty(&mut self) -> Result<()> {
        writeln!(self.out, "{}", EMPTY_MESSAGE)?;
        Ok(())
    }
}
