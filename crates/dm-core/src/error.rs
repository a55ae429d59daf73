use crate::room::RoomId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur while building or navigating the room graph.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A room with the same name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(String),

    /// The requested room ID does not exist in the world.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// No room carries the given name.
    #[error("no room named \"{0}\"")]
    UnknownRoom(String),
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a persistence backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded.
    #[error("malformed save data: {0}")]
    Format(#[from] serde_json::Error),

    /// There is no saved game to load.
    #[error("no saved game found")]
    NoSave,
}
