use serde::{Deserialize, Serialize};

use crate::item::Item;

/// The player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Current hit points. Zero or below means the player has fallen.
    pub hp: i32,
    /// Damage dealt per blow in combat.
    pub attack: i32,
    /// Items carried, in pickup order.
    pub inventory: Vec<Item>,
}

impl Player {
    /// Create a player with an empty inventory.
    pub fn new(name: impl Into<String>, hp: i32, attack: i32) -> Self {
        Self {
            name: name.into(),
            hp,
            attack,
            inventory: Vec::new(),
        }
    }

    /// Hit points as shown to the player, never below zero.
    pub fn display_hp(&self) -> i32 {
        self.hp.max(0)
    }

    /// Whether the player has been defeated.
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Add an item to the inventory.
    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// First carried item whose name matches, ignoring case.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|item| item.is_named(name))
    }
}
