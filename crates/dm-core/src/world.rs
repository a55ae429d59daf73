use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::room::{Room, RoomId};

/// Owns every room. Rooms are added once and never removed, so a
/// [`RoomId`] handed out by [`World::add_room`] stays valid for the life of
/// the world.
#[derive(Debug, Clone, Default)]
pub struct World {
    rooms: Vec<Room>,

    // Index
    by_name_lower: HashMap<String, RoomId>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room. Names must be unique, ignoring case.
    pub fn add_room(&mut self, room: Room) -> WorldResult<RoomId> {
        let name_lower = room.name.to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(WorldError::DuplicateRoom(room.name));
        }

        let id = RoomId(self.rooms.len());
        self.by_name_lower.insert(name_lower, id);
        self.rooms.push(room);
        Ok(id)
    }

    /// Add a one-way exit from `from` to `to`, replacing any exit already
    /// leading in that direction.
    pub fn connect(&mut self, from: RoomId, direction: Direction, to: RoomId) -> WorldResult<()> {
        if self.room(to).is_none() {
            return Err(WorldError::RoomNotFound(to));
        }
        let room = self.room_mut(from).ok_or(WorldError::RoomNotFound(from))?;
        room.exits.insert(direction, to);
        Ok(())
    }

    /// Get a room by ID.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Get a mutable room by ID.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    /// Find a room ID by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<RoomId> {
        self.by_name_lower.get(&name.to_lowercase()).copied()
    }

    /// Iterate over all rooms with their IDs.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

impl Index<RoomId> for World {
    type Output = Room;

    /// # Panics
    ///
    /// Panics if `id` was not handed out by this world.
    fn index(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }
}

impl IndexMut<RoomId> for World {
    fn index_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }
}
