use std::fmt;

use serde::{Deserialize, Serialize};

use crate::player::Player;

/// The kind of an item, which decides what using it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Restores the player's hit points by the item's value.
    Potion,
    /// Raises the player's attack power by the item's value.
    Weapon,
    /// Opens something elsewhere; using it on its own does nothing.
    Key,
}

impl ItemKind {
    /// Lowercase label used when listing items.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Potion => "potion",
            Self::Weapon => "weapon",
            Self::Key => "key",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An object that lives either in a room or in the player's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name. Not unique: two potions may share a name.
    pub name: String,
    /// What the item does when used.
    pub kind: ItemKind,
    /// Potency of the effect (hit points healed, attack gained).
    pub value: i32,
}

impl Item {
    /// Create an item of any kind.
    pub fn new(kind: ItemKind, name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            kind,
            value,
        }
    }

    /// A potion that heals `heal` hit points.
    pub fn potion(name: impl Into<String>, heal: i32) -> Self {
        Self::new(ItemKind::Potion, name, heal)
    }

    /// A weapon that adds `bonus` to the player's attack power.
    pub fn weapon(name: impl Into<String>, bonus: i32) -> Self {
        Self::new(ItemKind::Weapon, name, bonus)
    }

    /// A key.
    pub fn key(name: impl Into<String>) -> Self {
        Self::new(ItemKind::Key, name, 0)
    }

    /// Case-insensitive comparison against a player-typed name.
    pub fn is_named(&self, query: &str) -> bool {
        self.name.to_lowercase() == query.to_lowercase()
    }

    /// Apply this item's effect to the player and describe what happened.
    pub fn apply(&self, player: &mut Player) -> String {
        match self.kind {
            ItemKind::Potion => {
                player.hp = player.hp.saturating_add(self.value);
                format!(
                    "You drink {}. HP +{} (now {}).",
                    self.name, self.value, player.hp
                )
            }
            ItemKind::Weapon => {
                player.attack = player.attack.saturating_add(self.value);
                format!(
                    "You wield {}. Attack +{} (now {}).",
                    self.name, self.value, player.attack
                )
            }
            ItemKind::Key => format!(
                "You turn {} over in your hands. Nothing to open here.",
                self.name
            ),
        }
    }
}
