//! Rooms, their identifiers and type tags.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RoomError;

/// The maximum number of rooms a single room can be connected to.
pub const MAX_CONNECTIONS: usize = 6;

// ---------------------------------------------------------------------------
// RoomId
// ---------------------------------------------------------------------------

/// A non-owning reference to a room inside a [`RoomGraph`](crate::RoomGraph).
///
/// Two ids are equal exactly when they name the same room, so identity
/// checks (such as refusing self-connections) compare ids, never names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u64);

impl RoomId {
    pub(crate) fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ROOM-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// RoomType
// ---------------------------------------------------------------------------

/// The role a room plays in an adventure.
///
/// Each variant has a stable numeric code (0, 1, 2) used by
/// [`type_label`] and `TryFrom<u8>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum RoomType {
    Start = 0,
    Mid = 1,
    End = 2,
}

impl RoomType {
    /// Returns the numeric code of this type.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Returns the report label, e.g. `START_ROOM`.
    pub fn label(self) -> &'static str {
        type_label(self.code())
    }
}

/// Maps a room type code to its report label.
///
/// Codes outside the known set render as `UNKNOWN` rather than failing.
pub fn type_label(code: u8) -> &'static str {
    match code {
        0 => "START_ROOM",
        1 => "MID_ROOM",
        2 => "END_ROOM",
        _ => "UNKNOWN",
    }
}

impl TryFrom<u8> for RoomType {
    type Error = RoomError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Start),
            1 => Ok(Self::Mid),
            2 => Ok(Self::End),
            other => Err(RoomError::UnknownRoomType(other)),
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// A named node with up to [`MAX_CONNECTIONS`] undirected connections.
///
/// Connections are stored in insertion order as [`RoomId`]s; the room does
/// not own the rooms it points at. Connections are only ever added through
/// [`RoomGraph::connect`](crate::RoomGraph::connect), which keeps both
/// endpoints in sync.
#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    room_type: RoomType,
    connections: Vec<RoomId>,
}

impl Room {
    /// Creates a room with its own copy of `name` and no connections.
    pub fn new(name: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            name: name.into(),
            room_type,
            connections: Vec::with_capacity(MAX_CONNECTIONS),
        }
    }

    /// Returns the room's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the room's type.
    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// Returns the connected rooms in the order they were connected.
    pub fn connections(&self) -> &[RoomId] {
        &self.connections
    }

    /// Returns how many connection slots are in use.
    pub fn num_connections(&self) -> usize {
        self.connections.len()
    }

    /// Returns the connection capacity, always [`MAX_CONNECTIONS`].
    pub fn capacity(&self) -> usize {
        MAX_CONNECTIONS
    }

    /// Returns `true` if another connection can be added.
    pub fn has_connection_available(&self) -> bool {
        self.num_connections() < MAX_CONNECTIONS
    }

    /// Appends `other` to the connection sequence.
    ///
    /// Callers must check [`has_connection_available`](Self::has_connection_available)
    /// first and must update the other endpoint as well.
    pub(crate) fn push_connection(&mut self, other: RoomId) {
        debug_assert!(self.has_connection_available());
        self.connections.push(other);
    }
}
