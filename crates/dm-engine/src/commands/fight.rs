use tracing::info;

use crate::combat::{self, CombatState};
use crate::error::{EngineError, EngineResult};
use crate::registry::{CommandContext, Reply};

/// `fight`: battle the monster in the current room to the end.
///
/// A slain monster leaves the room and drops the configured reward. A
/// defeated player ends the session.
pub fn fight(ctx: &mut CommandContext<'_>, _args: &[String]) -> EngineResult<Reply> {
    let mut monster = ctx
        .state
        .current_room_mut()
        .monster
        .take()
        .ok_or(EngineError::NoMonsterHere)?;

    let report = match combat::resolve(&mut ctx.state.player, &mut monster) {
        Ok(report) => report,
        Err(err) => {
            ctx.state.current_room_mut().monster = Some(monster);
            return Err(err);
        }
    };

    let mut lines: Vec<String> = report.blows.iter().map(ToString::to_string).collect();

    if report.outcome == CombatState::PlayerWins {
        let reward = ctx.config.reward.clone();
        lines.push(format!("{} is defeated and drops {}.", monster.name, reward.name));
        info!(monster = %monster.name, reward = %reward.name, "monster slain");
        ctx.state.current_room_mut().items.push(reward);
        Ok(Reply::text(lines.join("\n")))
    } else {
        lines.push(format!("{} has defeated you. Game over.", monster.name));
        info!(monster = %monster.name, "player defeated");
        ctx.state.current_room_mut().monster = Some(monster);
        Ok(Reply::game_over(lines.join("\n")))
    }
}
