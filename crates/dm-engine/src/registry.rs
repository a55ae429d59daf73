//! Command registry and dispatcher.

use dm_core::{GameState, SaveStore};
use tracing::{debug, warn};

use crate::commands;
use crate::config::GameConfig;
use crate::error::{EngineError, EngineResult};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Read the next line.
    Continue,
    /// The player asked to leave.
    Exit,
    /// The player was defeated.
    GameOver,
}

/// Text produced by a command, plus whether the session goes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Output for the player. May span several lines.
    pub text: String,
    /// Whether to keep reading commands.
    pub outcome: SessionOutcome,
}

impl Reply {
    /// A reply that keeps the session going.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome: SessionOutcome::Continue,
        }
    }

    /// A reply that ends the session at the player's request.
    pub fn exit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome: SessionOutcome::Exit,
        }
    }

    /// A reply that ends the session in defeat.
    pub fn game_over(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome: SessionOutcome::GameOver,
        }
    }
}

/// Everything a handler may read or touch.
pub struct CommandContext<'a> {
    /// The session being played.
    pub state: &'a mut GameState,
    /// Where `save`, `load` and `scores` go.
    pub store: &'a dyn SaveStore,
    /// Session tunables.
    pub config: &'a GameConfig,
    /// The registry the command was found in.
    pub registry: &'a CommandRegistry,
}

/// The behavior bound to a command word.
pub type Handler = fn(&mut CommandContext<'_>, &[String]) -> EngineResult<Reply>;

/// Command words mapped to handlers, in registration order.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    entries: Vec<(String, Handler)>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` (case-insensitive) to `handler`. Registering a name
    /// twice replaces the handler but keeps the original position.
    pub fn register(&mut self, name: &str, handler: Handler) {
        let name = name.to_lowercase();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = handler,
            None => self.entries.push((name, handler)),
        }
    }

    /// Look up a handler by command word, ignoring case.
    pub fn get(&self, name: &str) -> Option<Handler> {
        let name = name.to_lowercase();
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, handler)| *handler)
    }

    /// Registered command words, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split a line into a case-folded command word and the remaining
/// whitespace-separated arguments. Blank lines yield `None`.
pub fn tokenize(line: &str) -> Option<(String, Vec<String>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_lowercase();
    let args = words.map(str::to_string).collect();
    Some((command, args))
}

/// Runs commands against a game state.
pub struct Engine {
    registry: CommandRegistry,
    store: Box<dyn SaveStore>,
    config: GameConfig,
}

impl Engine {
    /// Create an engine from an explicit registry.
    pub fn new(registry: CommandRegistry, store: Box<dyn SaveStore>, config: GameConfig) -> Self {
        Self {
            registry,
            store,
            config,
        }
    }

    /// An engine with every built-in command registered.
    pub fn standard(store: Box<dyn SaveStore>, config: GameConfig) -> Self {
        Self::new(commands::standard(), store, config)
    }

    /// The command registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// The persistence backend.
    pub fn store(&self) -> &dyn SaveStore {
        self.store.as_ref()
    }

    /// Session tunables.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Tokenize a raw input line and run it. Blank input does nothing.
    pub fn dispatch(&self, state: &mut GameState, line: &str) -> EngineResult<Reply> {
        match tokenize(line) {
            Some((command, args)) => self.execute(state, &command, &args),
            None => Ok(Reply::text("")),
        }
    }

    /// Run one command.
    ///
    /// A recognized command scores whether it succeeds or is refused with a
    /// domain error. Unknown commands and unexpected failures score
    /// nothing.
    pub fn execute(
        &self,
        state: &mut GameState,
        command: &str,
        args: &[String],
    ) -> EngineResult<Reply> {
        let handler = self
            .registry
            .get(command)
            .ok_or_else(|| EngineError::UnknownCommand(command.to_lowercase()))?;

        debug!(command, args = args.len(), "dispatching command");

        let result = {
            let mut ctx = CommandContext {
                state: &mut *state,
                store: self.store.as_ref(),
                config: &self.config,
                registry: &self.registry,
            };
            handler(&mut ctx, args)
        };

        match &result {
            Err(err) if !err.is_domain() => {
                warn!(command, error = %err, "command failed unexpectedly");
            }
            _ => state.add_score(self.config.points_per_command),
        }

        result
    }
}
