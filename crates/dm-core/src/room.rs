use std::collections::BTreeMap;
use std::fmt;

use crate::direction::Direction;
use crate::item::Item;
use crate::monster::Monster;

/// Index of a room inside its [`World`](crate::World).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the world graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Unique display name.
    pub name: String,
    /// Flavor text shown by `look`.
    pub description: String,
    /// One-way exits. The way back is a separate exit on the other room.
    pub exits: BTreeMap<Direction, RoomId>,
    /// Items lying here, in drop order.
    pub items: Vec<Item>,
    /// The monster guarding the room, if one is still alive.
    pub monster: Option<Monster>,
}

impl Room {
    /// Create an empty room without exits.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
            monster: None,
        }
    }

    /// Builder-style: place an item in the room.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Builder-style: put a monster in the room. A monster with no hit
    /// points left is not placed.
    pub fn with_monster(mut self, monster: Monster) -> Self {
        self.monster = monster.is_alive().then_some(monster);
        self
    }

    /// The room an exit leads to.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }

    /// Remove and return the first item matching `name`, ignoring case.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.is_named(name))?;
        Some(self.items.remove(pos))
    }

    /// Render the room for `look`.
    pub fn describe(&self) -> String {
        let mut output = format!("**{}**\n", self.name);

        if !self.description.is_empty() {
            output.push_str(&self.description);
            output.push('\n');
        }

        if !self.items.is_empty() {
            let names: Vec<&str> = self.items.iter().map(|i| i.name.as_str()).collect();
            output.push_str(&format!("\nItems: {}\n", names.join(", ")));
        }

        if let Some(monster) = &self.monster {
            output.push_str(&format!(
                "\n{} (level {}, HP {}) is here.\n",
                monster.name, monster.level, monster.hp
            ));
        }

        if self.exits.is_empty() {
            output.push_str("\nThere are no exits.");
        } else {
            let exits: Vec<&str> = self.exits.keys().map(|d| d.name()).collect();
            output.push_str(&format!("\nExits: {}", exits.join(", ")));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_lists_contents_and_exits() {
        let mut room = Room::new("Forest", "Leaves rustle.")
            .with_item(Item::potion("Small potion", 5))
            .with_monster(Monster::new("Wolf", 1, 8));
        room.exits.insert(Direction::South, RoomId(0));
        room.exits.insert(Direction::East, RoomId(2));

        let output = room.describe();
        assert!(output.contains("Forest"));
        assert!(output.contains("Leaves rustle."));
        assert!(output.contains("Small potion"));
        assert!(output.contains("Wolf"));
        assert!(output.contains("Exits: south, east"));
    }

    #[test]
    fn dead_monster_is_not_placed() {
        let room = Room::new("Forest", "").with_monster(Monster::new("Wolf", 1, 0));
        assert!(room.monster.is_none());
        assert!(!room.describe().contains("Wolf"));
    }

    #[test]
    fn describe_without_exits() {
        let room = Room::new("Cell", "");
        assert!(room.describe().contains("no exits"));
    }

    #[test]
    fn take_item_removes_first_match_only() {
        let mut room = Room::new("Store", "")
            .with_item(Item::potion("Potion", 5))
            .with_item(Item::potion("potion", 7));

        let taken = room.take_item("POTION").unwrap();
        assert_eq!(taken.value, 5);
        assert_eq!(room.items.len(), 1);
        assert_eq!(room.items[0].value, 7);
    }

    #[test]
    fn take_missing_item_leaves_room_alone() {
        let mut room = Room::new("Store", "").with_item(Item::key("Key"));
        assert!(room.take_item("sword").is_none());
        assert_eq!(room.items.len(), 1);
    }
}
