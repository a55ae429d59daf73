use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use dm_core::ScoreEntry;

pub fn run(scores_file: &Path, limit: usize) -> Result<(), String> {
    let scores = dm_save::read_scores(scores_file).map_err(|e| e.to_string())?;
    let top = ScoreEntry::leaderboard(scores, limit);

    if top.is_empty() {
        println!("  No scores yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Player", "Score", "Recorded"]);

    for (i, entry) in top.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            entry.player.clone(),
            entry.score.to_string(),
            entry.recorded_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
