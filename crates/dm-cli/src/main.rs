//! CLI frontend for DungeonMini, a small text adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use dm_core::bootstrap::DEFAULT_HERO;
use dm_save::store::{DEFAULT_SAVE_FILE, DEFAULT_SCORES_FILE};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dungeon",
    about = "DungeonMini: explore rooms, collect items, fight monsters",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log engine activity to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive game (the default)
    Play(PlayArgs),

    /// Print the leaderboard
    Scores {
        /// Score history file
        #[arg(long, default_value = DEFAULT_SCORES_FILE)]
        scores_file: PathBuf,

        /// Number of entries to show
        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=100))]
        limit: u16,
    },
}

#[derive(Args)]
struct PlayArgs {
    /// Saved game file used by `save` and `load`
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// Score history file
    #[arg(long, default_value = DEFAULT_SCORES_FILE)]
    scores_file: PathBuf,

    /// Name of your hero
    #[arg(short, long, default_value = DEFAULT_HERO)]
    player: String,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            save_file: PathBuf::from(DEFAULT_SAVE_FILE),
            scores_file: PathBuf::from(DEFAULT_SCORES_FILE),
            player: DEFAULT_HERO.to_string(),
        }
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        None => commands::play::run(&PlayArgs::default()),
        Some(Commands::Play(args)) => commands::play::run(&args),
        Some(Commands::Scores { scores_file, limit }) => {
            commands::scores::run(&scores_file, usize::from(limit))
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
