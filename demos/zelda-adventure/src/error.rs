//! Error type for the adventure driver.

use roomgraph::RoomError;

/// Everything that can stop the adventure from being built or printed.
///
/// The `#[from]` variants let `?` convert library, I/O and JSON errors.
#[derive(Debug, thiserror::Error)]
pub enum AdventureError {
    /// A room graph operation failed.
    #[error(transparent)]
    Room(#[from] RoomError),

    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for an adventure.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    /// A connection names a room that the config never declares.
    #[error("no room named {0:?}")]
    UnknownRoomName(String),
}
