use std::io;

use colored::Colorize;
use tracing::warn;

use dm_core::ScoreEntry;
use dm_core::bootstrap::starter_world;
use dm_engine::{Engine, GameConfig, Repl, SessionEnd};
use dm_save::FileStore;

use crate::PlayArgs;

pub fn run(args: &PlayArgs) -> Result<(), String> {
    let mut state =
        starter_world(&args.player).map_err(|e| format!("failed to build world: {e}"))?;
    let store = FileStore::new(&args.save_file, &args.scores_file);
    let engine = Engine::standard(Box::new(store), GameConfig::default());

    println!("  {} DungeonMini", "Starting".bold());
    println!("  Type 'help' for commands, 'exit' to leave.\n");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = Repl::new(&engine, stdin.lock(), stdout.lock())
        .run(&mut state)
        .map_err(|e| e.to_string())?;

    if end == SessionEnd::EndOfInput {
        println!();
    }

    let entry = ScoreEntry::now(&state.player.name, state.score);
    if let Err(e) = engine.store().record_score(entry) {
        warn!(error = %e, "could not record final score");
    }

    println!("  Final score: {}", state.score.to_string().bold());
    Ok(())
}
