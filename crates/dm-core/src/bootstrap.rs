use crate::direction::Direction;
use crate::error::WorldResult;
use crate::item::Item;
use crate::monster::Monster;
use crate::player::Player;
use crate::room::Room;
use crate::state::GameState;
use crate::world::World;

/// Default name of the player character.
pub const DEFAULT_HERO: &str = "Герой";

/// The three-room world a new game starts in.
///
/// ```text
/// Площадь --north--> Лес --east--> Пещера
///         <--south--     <--west--
/// ```
///
/// A small potion and a wolf wait in the forest.
pub fn starter_world(hero: &str) -> WorldResult<GameState> {
    let mut world = World::new();

    let square = world.add_room(Room::new("Площадь", "Каменная площадь с фонтаном."))?;
    let forest = world.add_room(
        Room::new("Лес", "Шелест листвы и птичий щебет.")
            .with_item(Item::potion("Малое зелье", 5))
            .with_monster(Monster::new("Волк", 1, 8)),
    )?;
    let cave = world.add_room(Room::new("Пещера", "Темно и сыро."))?;

    world.connect(square, Direction::North, forest)?;
    world.connect(forest, Direction::South, square)?;
    world.connect(forest, Direction::East, cave)?;
    world.connect(cave, Direction::West, forest)?;

    GameState::new(world, Player::new(hero, 20, 5), square)
}
