use std::cell::RefCell;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::player::Player;

/// The saved part of a session: who the player is, where they stand, and
/// how many points they have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Player name, hit points, attack and inventory.
    pub player: Player,
    /// Name of the room the player was in.
    pub room: String,
    /// Session score at save time.
    pub score: i64,
}

/// One line of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Player name.
    pub player: String,
    /// Final or saved score.
    pub score: i64,
    /// When the score was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl ScoreEntry {
    /// Create an entry stamped with the current time.
    pub fn now(player: impl Into<String>, score: i64) -> Self {
        Self {
            player: player.into(),
            score,
            recorded_at: Utc::now(),
        }
    }

    /// Best scores first, ties broken by who got there first, at most
    /// `limit` entries.
    pub fn leaderboard(mut entries: Vec<ScoreEntry>, limit: usize) -> Vec<ScoreEntry> {
        entries.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.recorded_at.cmp(&b.recorded_at))
        });
        entries.truncate(limit);
        entries
    }
}

/// Where saved games and scores go.
pub trait SaveStore {
    /// Persist a snapshot, replacing any previous save.
    fn save(&self, snapshot: &Snapshot) -> StoreResult<()>;

    /// Read back the last saved snapshot.
    fn load(&self) -> StoreResult<Snapshot>;

    /// Append an entry to the score history.
    fn record_score(&self, entry: ScoreEntry) -> StoreResult<()>;

    /// Every recorded score, in recording order.
    fn scores(&self) -> StoreResult<Vec<ScoreEntry>>;
}

/// A store that keeps everything in memory for the life of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: RefCell<Option<Snapshot>>,
    scores: RefCell<Vec<ScoreEntry>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        *self.saved.borrow_mut() = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> StoreResult<Snapshot> {
        self.saved.borrow().clone().ok_or(StoreError::NoSave)
    }

    fn record_score(&self, entry: ScoreEntry) -> StoreResult<()> {
        self.scores.borrow_mut().push(entry);
        Ok(())
    }

    fn scores(&self) -> StoreResult<Vec<ScoreEntry>> {
        Ok(self.scores.borrow().clone())
    }
}
