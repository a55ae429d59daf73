use crate::error::{WorldError, WorldResult};
use crate::player::Player;
use crate::room::{Room, RoomId};
use crate::snapshot::Snapshot;
use crate::world::World;

/// Everything a running session mutates.
///
/// The current room is a [`RoomId`] into the owned [`World`]; it can only
/// be changed to a room that exists in that world.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The room graph.
    pub world: World,
    /// The player character.
    pub player: Player,
    /// Points earned this session.
    pub score: i64,
    current: RoomId,
}

impl GameState {
    /// Start a session with the player standing in `start`.
    pub fn new(world: World, player: Player, start: RoomId) -> WorldResult<Self> {
        if world.room(start).is_none() {
            return Err(WorldError::RoomNotFound(start));
        }
        Ok(Self {
            world,
            player,
            score: 0,
            current: start,
        })
    }

    /// ID of the room the player is in.
    pub fn current(&self) -> RoomId {
        self.current
    }

    /// The room the player is in.
    pub fn current_room(&self) -> &Room {
        &self.world[self.current]
    }

    /// Mutable access to the room the player is in.
    pub fn current_room_mut(&mut self) -> &mut Room {
        &mut self.world[self.current]
    }

    /// Put the player in another room.
    pub fn enter(&mut self, room: RoomId) -> WorldResult<()> {
        if self.world.room(room).is_none() {
            return Err(WorldError::RoomNotFound(room));
        }
        self.current = room;
        Ok(())
    }

    /// Add points to the session score, saturating at the numeric bounds.
    pub fn add_score(&mut self, points: i64) {
        self.score = self.score.saturating_add(points);
    }

    /// Capture what a saved game needs.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player.clone(),
            room: self.current_room().name.clone(),
            score: self.score,
        }
    }

    /// Overwrite the player, position and score from a saved game.
    ///
    /// Rooms keep their current contents. Nothing changes if the saved
    /// room does not exist in this world.
    pub fn restore(&mut self, snapshot: Snapshot) -> WorldResult<()> {
        let room = self
            .world
            .find_by_name(&snapshot.room)
            .ok_or_else(|| WorldError::UnknownRoom(snapshot.room.clone()))?;
        self.current = room;
        self.player = snapshot.player;
        self.score = snapshot.score;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    fn test_state() -> GameState {
        let mut world = World::new();
        let square = world.add_room(Room::new("Square", "")).unwrap();
        world.add_room(Room::new("Forest", "")).unwrap();
        GameState::new(world, Player::new("Hero", 20, 5), square).unwrap()
    }

    #[test]
    fn new_rejects_unknown_start() {
        let world = World::new();
        let result = GameState::new(world, Player::new("Hero", 20, 5), RoomId(0));
        assert!(result.is_err());
    }

    #[test]
    fn enter_changes_current_room() {
        let mut state = test_state();
        let forest = state.world.find_by_name("Forest").unwrap();
        state.enter(forest).unwrap();
        assert_eq!(state.current(), forest);
        assert_eq!(state.current_room().name, "Forest");
    }

    #[test]
    fn enter_unknown_room_keeps_position() {
        let mut state = test_state();
        let before = state.current();
        assert!(state.enter(RoomId(42)).is_err());
        assert_eq!(state.current(), before);
    }

    #[test]
    fn add_score_saturates() {
        let mut state = test_state();
        state.score = i64::MAX - 1;
        state.add_score(5);
        assert_eq!(state.score, i64::MAX);
    }

    #[test]
    fn snapshot_captures_player_room_and_score() {
        let mut state = test_state();
        state.player.add_item(Item::potion("Potion", 5));
        state.add_score(3);

        let snap = state.snapshot();
        assert_eq!(snap.room, "Square");
        assert_eq!(snap.score, 3);
        assert_eq!(snap.player.inventory.len(), 1);
    }

    #[test]
    fn restore_overwrites_state() {
        let mut state = test_state();
        let mut snap = state.snapshot();
        snap.room = "Forest".to_string();
        snap.score = 11;
        snap.player.hp = 4;

        state.restore(snap).unwrap();
        assert_eq!(state.current_room().name, "Forest");
        assert_eq!(state.score, 11);
        assert_eq!(state.player.hp, 4);
    }

    #[test]
    fn restore_with_unknown_room_changes_nothing() {
        let mut state = test_state();
        let mut snap = state.snapshot();
        snap.room = "Moon".to_string();
        snap.score = 99;

        let result = state.restore(snap);
        assert!(matches!(result, Err(WorldError::UnknownRoom(_))));
        assert_eq!(state.score, 0);
        assert_eq!(state.current_room().name, "Square");
    }
}
