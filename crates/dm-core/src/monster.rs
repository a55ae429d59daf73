use serde::{Deserialize, Serialize};

/// A hostile creature guarding a room.
///
/// Its level doubles as its attack power. A monster whose hit points reach
/// zero is removed from its room rather than kept around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    /// Display name.
    pub name: String,
    /// Difficulty and damage dealt per blow.
    pub level: i32,
    /// Remaining hit points.
    pub hp: i32,
}

impl Monster {
    /// Create a monster.
    pub fn new(name: impl Into<String>, level: i32, hp: i32) -> Self {
        Self {
            name: name.into(),
            level,
            hp,
        }
    }

    /// Whether the monster still stands.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}
