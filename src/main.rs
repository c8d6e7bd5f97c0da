use anyhow::Result;
use bgmusic::commands::TerminalPrompt;
use bgmusic::player::ProcessLauncher;
use bgmusic::{AppContext, BgmusicError, Command, Dispatcher, StorePaths};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "bgmusic")]
#[command(about = "Manage a background music playlist and play it", long_about = None)]
struct Args {
    /// Verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play the playlist with the configured player
    Play,

    /// Show the numbered playlist
    List,

    /// Add a music file to the playlist
    Add {
        /// Path to the music file
        music: PathBuf,
    },

    /// Remove a music file from the playlist
    Remove {
        /// 1-based index as shown by `list` (asked for when omitted)
        #[arg(long, allow_negative_numbers = true)]
        index: Option<i64>,

        /// Remove every entry
        #[arg(long)]
        all: bool,
    },
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Play => Command::Play,
            Commands::List => Command::List,
            Commands::Add { music } => Command::Add { music },
            Commands::Remove { index, all } => Command::Remove { index, all },
        }
    }
}

fn run(args: Args) -> Result<()> {
    let context = AppContext::init(StorePaths::from_home())?;
    log::debug!("Config root: {:?}", context.paths.root());

    let mut dispatcher = Dispatcher::new(
        context,
        ProcessLauncher::new(),
        TerminalPrompt::stdio(),
        io::stdout(),
    );
    dispatcher.run(args.command.into())?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<BgmusicError>()
                .map_or(1, BgmusicError::exit_code);
            ExitCode::from(code)
        }
    }
}
