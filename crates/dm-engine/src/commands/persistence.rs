use dm_core::ScoreEntry;
use tracing::info;

use crate::error::EngineResult;
use crate::registry::{CommandContext, Reply};

/// `save`: store the session and log its score on the leaderboard.
pub fn save(ctx: &mut CommandContext<'_>, _args: &[String]) -> EngineResult<Reply> {
    let snapshot = ctx.state.snapshot();
    ctx.store.save(&snapshot)?;
    ctx.store
        .record_score(ScoreEntry::now(&snapshot.player.name, snapshot.score))?;
    info!(room = %snapshot.room, score = snapshot.score, "game saved");
    Ok(Reply::text(format!("Game saved (score {}).", snapshot.score)))
}

/// `load`: replace the player, position and score with the last save.
pub fn load(ctx: &mut CommandContext<'_>, _args: &[String]) -> EngineResult<Reply> {
    let snapshot = ctx.store.load()?;
    ctx.state.restore(snapshot)?;
    info!(room = %ctx.state.current_room().name, "game loaded");
    Ok(Reply::text(format!(
        "Game loaded.\n{}",
        ctx.state.current_room().describe()
    )))
}

/// `scores`: show the best recorded scores.
pub fn scores(ctx: &mut CommandContext<'_>, _args: &[String]) -> EngineResult<Reply> {
    let entries = ScoreEntry::leaderboard(ctx.store.scores()?, ctx.config.leaderboard_size);
    if entries.is_empty() {
        return Ok(Reply::text("No scores yet."));
    }

    let lines: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            format!(
                "{}. {} - {} ({})",
                i + 1,
                e.player,
                e.score,
                e.recorded_at.format("%Y-%m-%d %H:%M")
            )
        })
        .collect();
    Ok(Reply::text(format!("Top scores:\n{}", lines.join("\n"))))
}
