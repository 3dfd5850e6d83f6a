//! Error types for the room graph.

use crate::RoomId;

/// Errors that can occur during room graph operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomError {
    /// The id does not name a room in this graph.
    #[error("room {0} not found")]
    UnknownRoom(RoomId),

    /// A room cannot be connected to itself.
    #[error("room {0} cannot connect to itself")]
    SelfConnection(RoomId),

    /// The room already uses every connection slot.
    #[error("room {0} has no connection available")]
    NoConnectionAvailable(RoomId),

    /// The numeric code is outside the known room types.
    #[error("unknown room type code {0}")]
    UnknownRoomType(u8),
}
