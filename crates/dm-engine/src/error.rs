//! Error types for the engine.

use dm_core::{StoreError, WorldError};
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Why a command could not be carried out.
///
/// Every variant except [`EngineError::Unexpected`] is a domain error: an
/// anticipated refusal the player can fix by typing something else.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The command word is not registered.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Wrong number or shape of arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The current room has no exit that way.
    #[error("no exit {0} from here")]
    NoSuchExit(String),

    /// No item by that name where it was looked for.
    #[error("no such item: {0}")]
    NoSuchItem(String),

    /// `fight` in a room without a monster.
    #[error("there is no monster here")]
    NoMonsterHere,

    /// Anything else, such as a failing save file.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl EngineError {
    /// Whether this is an anticipated, player-facing refusal.
    pub fn is_domain(&self) -> bool {
        !matches!(self, Self::Unexpected(_))
    }
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        Self::Unexpected(err.to_string())
    }
}

impl From<WorldError> for EngineError {
    fn from(err: WorldError) -> Self {
        Self::Unexpected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unexpected_is_not_domain() {
        assert!(EngineError::UnknownCommand("dance".into()).is_domain());
        assert!(EngineError::InvalidArgument("x".into()).is_domain());
        assert!(EngineError::NoSuchExit("up".into()).is_domain());
        assert!(EngineError::NoSuchItem("sword".into()).is_domain());
        assert!(EngineError::NoMonsterHere.is_domain());
        assert!(!EngineError::Unexpected("disk full".into()).is_domain());
    }

    #[test]
    fn store_errors_become_unexpected() {
        let err = EngineError::from(StoreError::NoSave);
        assert!(matches!(err, EngineError::Unexpected(_)));
        assert!(err.to_string().contains("no saved game"));
    }
}
