//! External player invocation

mod process;
mod traits;

pub use process::ProcessLauncher;
pub use traits::{PlayerCommand, PlayerLauncher};
