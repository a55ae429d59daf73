use dm_core::{Item, ItemKind};
use tracing::debug;

use super::joined_name;
use crate::error::{EngineError, EngineResult};
use crate::registry::{CommandContext, Reply};

/// `take <item>`: pick an item up from the current room.
pub fn take(ctx: &mut CommandContext<'_>, args: &[String]) -> EngineResult<Reply> {
    let name = joined_name(args, "take")?;
    let item = ctx
        .state
        .current_room_mut()
        .take_item(&name)
        .ok_or(EngineError::NoSuchItem(name))?;

    let output = format!("Taken: {}", item.name);
    ctx.state.player.add_item(item);
    Ok(Reply::text(output))
}

/// `inventory`: list carried items grouped by kind.
pub fn inventory(ctx: &mut CommandContext<'_>, _args: &[String]) -> EngineResult<Reply> {
    Ok(Reply::text(render_inventory(&ctx.state.player.inventory)))
}

/// `use <item>`: apply a carried item's effect.
///
/// The item stays in the inventory afterwards, so a potion can be drunk
/// again.
pub fn use_item(ctx: &mut CommandContext<'_>, args: &[String]) -> EngineResult<Reply> {
    let name = joined_name(args, "use")?;
    let item = ctx
        .state
        .player
        .find_item(&name)
        .cloned()
        .ok_or(EngineError::NoSuchItem(name))?;

    debug!(item = %item.name, kind = %item.kind, "using item");
    Ok(Reply::text(item.apply(&mut ctx.state.player)))
}

/// One line per kind, kinds in the order first carried, names sorted
/// within each kind: `potion (2): A, B`.
fn render_inventory(items: &[Item]) -> String {
    if items.is_empty() {
        return "Inventory is empty.".to_string();
    }

    let mut groups: Vec<(ItemKind, Vec<&str>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(kind, _)| *kind == item.kind) {
            Some((_, names)) => names.push(item.name.as_str()),
            None => groups.push((item.kind, vec![item.name.as_str()])),
        }
    }

    groups
        .into_iter()
        .map(|(kind, mut names)| {
            names.sort_unstable();
            format!("{kind} ({}): {}", names.len(), names.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
