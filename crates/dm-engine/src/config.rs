//! Configuration for a game session.

use dm_core::Item;

/// Tunables for a session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Points added for each recognized command.
    pub points_per_command: i64,
    /// How many entries `scores` shows.
    pub leaderboard_size: usize,
    /// Item dropped where a monster falls.
    pub reward: Item,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            points_per_command: 1,
            leaderboard_size: 10,
            reward: Item::potion("Большое зелье", 10),
        }
    }
}

impl GameConfig {
    /// Set the points per command (negative values become 0).
    pub fn with_points_per_command(mut self, points: i64) -> Self {
        self.points_per_command = points.max(0);
        self
    }

    /// Set the leaderboard size (clamped to 1-100).
    pub fn with_leaderboard_size(mut self, size: usize) -> Self {
        self.leaderboard_size = size.clamp(1, 100);
        self
    }

    /// Set the item monsters drop.
    pub fn with_reward(mut self, reward: Item) -> Self {
        self.reward = reward;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.points_per_command, 1);
        assert_eq!(cfg.leaderboard_size, 10);
        assert_eq!(cfg.reward.value, 10);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_points_per_command(3)
            .with_leaderboard_size(5)
            .with_reward(Item::key("Bone key"));
        assert_eq!(cfg.points_per_command, 3);
        assert_eq!(cfg.leaderboard_size, 5);
        assert_eq!(cfg.reward.name, "Bone key");
    }

    #[test]
    fn values_clamped() {
        let cfg = GameConfig::default()
            .with_points_per_command(-4)
            .with_leaderboard_size(0);
        assert_eq!(cfg.points_per_command, 0);
        assert_eq!(cfg.leaderboard_size, 1);
        let cfg = GameConfig::default().with_leaderboard_size(500);
        assert_eq!(cfg.leaderboard_size, 100);
    }
}
