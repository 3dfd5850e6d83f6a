//! Human-readable room reports.

use std::fmt;

use crate::{Room, RoomGraph};

/// A printable view of one room and the names of its connections.
///
/// Obtained from [`RoomGraph::report`]. The rendered text is:
///
/// ```text
/// ROOM NAME: Eastern Palace
/// CONNECTION 1: House of Gales
/// ROOM TYPE: START_ROOM
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoomReport<'g> {
    graph: &'g RoomGraph,
    room: &'g Room,
}

impl<'g> RoomReport<'g> {
    pub(crate) fn new(graph: &'g RoomGraph, room: &'g Room) -> Self {
        Self { graph, room }
    }

    /// Returns the room being reported.
    pub fn room(&self) -> &'g Room {
        self.room
    }
}

impl fmt::Display for RoomReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ROOM NAME: {}", self.room.name())?;

        for (i, id) in self.room.connections().iter().enumerate() {
            match self.graph.room(*id) {
                Ok(other) => writeln!(f, "CONNECTION {}: {}", i + 1, other.name())?,
                // connect() validates both ids, so this is a fallback only.
                Err(_) => writeln!(f, "CONNECTION {}: {}", i + 1, id)?,
            }
        }

        writeln!(f, "ROOM TYPE: {}", self.room.room_type().label())
    }
}
