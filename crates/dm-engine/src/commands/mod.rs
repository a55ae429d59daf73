//! Built-in command handlers.

mod fight;
mod info;
mod items;
mod movement;
mod persistence;

use crate::error::{EngineError, EngineResult};
use crate::registry::{CommandContext, CommandRegistry, Reply};

pub use fight::fight;
pub use info::{help, look};
pub use items::{inventory, take, use_item};
pub use movement::move_to;
pub use persistence::{load, save, scores};

/// A registry with every built-in command, in the order `help` lists them.
pub fn standard() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register("help", help);
    registry.register("look", look);
    registry.register("move", move_to);
    registry.register("take", take);
    registry.register("inventory", inventory);
    registry.register("use", use_item);
    registry.register("fight", fight);
    registry.register("save", save);
    registry.register("load", load);
    registry.register("scores", scores);
    registry.register("exit", exit);
    registry
}

/// `exit`: leave the game.
pub fn exit(_ctx: &mut CommandContext<'_>, _args: &[String]) -> EngineResult<Reply> {
    Ok(Reply::exit("Goodbye!"))
}

/// Join all arguments into a single name, or complain if there are none.
fn joined_name(args: &[String], what: &str) -> EngineResult<String> {
    if args.is_empty() {
        return Err(EngineError::InvalidArgument(format!("{what} what?")));
    }
    Ok(args.join(" "))
}


#[cfg(test)]
mod tests {
    use super::test_support::{engine, state};
    use crate::registry::SessionOutcome;

    #[test]
    fn standard_registration_order() {
        let registry = super::standard();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(
            names,
            vec![
                "help",
                "look",
                "move",
                "take",
                "inventory",
                "use",
                "fight",
                "save",
                "load",
                "scores",
                "exit"
            ]
        );
    }

    #[test]
    fn exit_ends_session() {
        let engine = engine();
        let mut state = state();
        let reply = engine.dispatch(&mut state, "exit").unwrap();
        assert_eq!(reply.outcome, SessionOutcome::Exit);
        assert!(reply.text.contains("Goodbye"));
    }

    #[test]
    fn exit_ignores_case() {
        let engine = engine();
        let mut state = state();
        let reply = engine.dispatch(&mut state, "EXIT").unwrap();
        assert_eq!(reply.outcome, SessionOutcome::Exit);
    }
}
