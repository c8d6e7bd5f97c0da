//! Child process launcher

use super::traits::{PlayerCommand, PlayerLauncher};
use crate::error::{BgmusicError, Result};
use std::process::Command;

/// Spawns the player with inherited stdio and waits for it
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerLauncher for ProcessLauncher {
    fn launch(&self, command: &PlayerCommand) -> Result<()> {
        log::debug!("Spawning {:?} {:?}", command.program, command.args);

        let status = Command::new(&command.program)
            .args(&command.args)
            .status()
            .map_err(|source| BgmusicError::PlayerLaunch {
                player: command.program.clone(),
                source,
            })?;

        // The player's own exit code is not our concern
        log::debug!("Player exited with {}", status);
        Ok(())
    }
}
