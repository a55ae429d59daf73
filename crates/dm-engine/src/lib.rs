//! Command dispatch and game-state engine for DungeonMini.
//!
//! Input lines are split into a command word and its arguments, looked up
//! in a [`CommandRegistry`] built once at startup, and run against an
//! exclusively owned [`GameState`](dm_core::GameState). Handlers either
//! mutate the state and return a [`Reply`], or fail with an
//! [`EngineError`]. Ending the session is a [`SessionOutcome`], never a
//! process exit.

pub mod combat;
pub mod commands;
pub mod config;
pub mod error;
pub mod registry;
pub mod repl;

pub use combat::{Blow, Combat, CombatReport, CombatState};
pub use config::GameConfig;
pub use error::{EngineError, EngineResult};
pub use registry::{CommandContext, CommandRegistry, Engine, Handler, Reply, SessionOutcome};
pub use repl::{Repl, SessionEnd};
