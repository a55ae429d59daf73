use crate::error::EngineResult;
use crate::registry::{CommandContext, Reply};

/// `help`: list every registered command.
pub fn help(ctx: &mut CommandContext<'_>, _args: &[String]) -> EngineResult<Reply> {
    let names: Vec<&str> = ctx.registry.names().collect();
    Ok(Reply::text(format!("Commands: {}", names.join(", "))))
}

/// `look`: describe the current room.
pub fn look(ctx: &mut CommandContext<'_>, _args: &[String]) -> EngineResult<Reply> {
    Ok(Reply::text(ctx.state.current_room().describe()))
}
