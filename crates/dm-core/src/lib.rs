//! Core types for DungeonMini: rooms, items, monsters, the player, and the
//! mutable game state a session works on.
//!
//! This crate holds no command logic. The room graph lives in a [`World`]
//! arena addressed by [`RoomId`], and [`GameState`] ties the world to the
//! player, the current room and the score. Persistence is reached only
//! through the [`SaveStore`] trait.

/// The starter world the game ships with.
pub mod bootstrap;
/// Movement directions.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Items and their effects.
pub mod item;
/// Monsters that guard rooms.
pub mod monster;
/// The player character.
pub mod player;
/// Rooms and their exits.
pub mod room;
/// Saved-game snapshots and the persistence seam.
pub mod snapshot;
/// The session root: world, player, current room, score.
pub mod state;
/// The room arena.
pub mod world;

pub use direction::Direction;
pub use error::{StoreError, StoreResult, WorldError, WorldResult};
pub use item::{Item, ItemKind};
pub use monster::Monster;
pub use player::Player;
pub use room::{Room, RoomId};
pub use snapshot::{MemoryStore, SaveStore, ScoreEntry, Snapshot};
pub use state::GameState;
pub use world::World;
