use dm_core::Direction;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::registry::{CommandContext, Reply};

/// `move <direction>`: walk through an exit of the current room.
pub fn move_to(ctx: &mut CommandContext<'_>, args: &[String]) -> EngineResult<Reply> {
    let [way] = args else {
        return Err(EngineError::InvalidArgument(
            "usage: move <direction>; 'look' shows the exits".to_string(),
        ));
    };
    let way = way.to_lowercase();

    let destination = Direction::parse(&way)
        .and_then(|dir| ctx.state.current_room().exit(dir))
        .ok_or_else(|| EngineError::NoSuchExit(way.clone()))?;

    ctx.state.enter(destination)?;
    let room = ctx.state.current_room();
    info!(room = %room.name, "player moved");

    Ok(Reply::text(format!(
        "You enter {}.\n{}",
        room.name,
        room.describe()
    )))
}
