//! Room graph: owns rooms and links them with bounded, symmetric connections.

use crate::{Room, RoomError, RoomId, RoomList, RoomReport, RoomType};

/// Owns every room created through it and hands out [`RoomId`]s.
///
/// Rooms are stored in creation order and never removed individually;
/// dropping the graph drops each room exactly once. Connections between
/// rooms are plain ids, so dropping a room never reaches through to the
/// rooms it is connected to.
///
/// # Concurrency note
///
/// `connect` mutates two rooms through `&mut self`. Sharing a graph
/// between threads needs an outer lock (for example `Mutex<RoomGraph>`).
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,
}

impl RoomGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a room with no connections and returns its id.
    pub fn add_room(&mut self, name: impl Into<String>, room_type: RoomType) -> RoomId {
        let room_id = RoomId(self.rooms.len() as u64);
        let room = Room::new(name, room_type);
        tracing::debug!(%room_id, name = room.name(), %room_type, "room created");
        self.rooms.push(room);
        room_id
    }

    /// Returns the room named by `id`.
    pub fn room(&self, id: RoomId) -> Result<&Room, RoomError> {
        id.index()
            .and_then(|idx| self.rooms.get(idx))
            .ok_or(RoomError::UnknownRoom(id))
    }

    /// Returns the number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if no room has been created.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterates over every room id in creation order.
    pub fn ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.rooms.len()).map(|idx| RoomId(idx as u64))
    }

    /// Collects every room, in creation order, into a [`RoomList`].
    pub fn room_list(&self) -> RoomList {
        self.ids().collect()
    }

    /// Finds the first room in the graph whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<RoomId> {
        self.rooms
            .iter()
            .position(|room| room.name() == name)
            .map(|idx| RoomId(idx as u64))
    }

    /// Returns `true` if the room can take another connection.
    ///
    /// An id that is not in this graph has nothing available.
    pub fn has_connection_available(&self, id: RoomId) -> bool {
        self.room(id).is_ok_and(Room::has_connection_available)
    }

    /// Connects two distinct rooms, reporting why a connection was refused.
    ///
    /// On success `b` is appended to `a`'s connections and `a` to `b`'s.
    /// On any error neither room changes. Repeating a call for the same
    /// pair adds the connection again.
    pub fn try_connect(&mut self, a: RoomId, b: RoomId) -> Result<(), RoomError> {
        if a == b {
            return Err(RoomError::SelfConnection(a));
        }
        if !self.room(a)?.has_connection_available() {
            return Err(RoomError::NoConnectionAvailable(a));
        }
        if !self.room(b)?.has_connection_available() {
            return Err(RoomError::NoConnectionAvailable(b));
        }

        // Both ids were resolved above.
        let (ia, ib) = (a.0 as usize, b.0 as usize);
        self.rooms[ia].push_connection(b);
        self.rooms[ib].push_connection(a);

        tracing::debug!(
            room_a = %a,
            room_b = %b,
            connections_a = self.rooms[ia].num_connections(),
            connections_b = self.rooms[ib].num_connections(),
            "rooms connected"
        );
        Ok(())
    }

    /// Connects two distinct rooms if both have a free slot.
    ///
    /// Returns `false` without changing anything when `a` and `b` are the
    /// same room, when either is full, or when either is unknown.
    pub fn connect(&mut self, a: RoomId, b: RoomId) -> bool {
        match self.try_connect(a, b) {
            Ok(()) => true,
            Err(reason) => {
                tracing::debug!(room_a = %a, room_b = %b, %reason, "connection refused");
                false
            }
        }
    }

    /// Returns the first room connected to `id` whose name equals `name`.
    ///
    /// Names compare byte for byte. Returns `None` when nothing matches or
    /// `id` is not in this graph.
    pub fn find_connection_by_name(&self, id: RoomId, name: &str) -> Option<RoomId> {
        let room = self.room(id).ok()?;
        room.connections().iter().copied().find(|other| {
            self.room(*other)
                .is_ok_and(|candidate| candidate.name() == name)
        })
    }

    /// Returns a printable report of the room named by `id`.
    pub fn report(&self, id: RoomId) -> Result<RoomReport<'_>, RoomError> {
        let room = self.room(id)?;
        Ok(RoomReport::new(self, room))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_CONNECTIONS;

    fn graph_with(n: usize) -> (RoomGraph, Vec<RoomId>) {
        let mut graph = RoomGraph::new();
        let ids = (0..n)
            .map(|i| graph.add_room(format!("room{i}"), RoomType::Mid))
            .collect();
        (graph, ids)
    }

    #[test]
    fn test_add_room_assigns_sequential_ids() {
        let (graph, ids) = graph_with(3);
        assert_eq!(ids, vec![RoomId(0), RoomId(1), RoomId(2)]);
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.ids().collect::<Vec<_>>(), ids);
    }

    #[test]
    fn test_connect_self_is_rejected() {
        let (mut graph, ids) = graph_with(1);
        assert_eq!(
            graph.try_connect(ids[0], ids[0]),
            Err(RoomError::SelfConnection(ids[0]))
        );
        assert!(!graph.connect(ids[0], ids[0]));
        assert_eq!(graph.room(ids[0]).unwrap().num_connections(), 0);
    }

    #[test]
    fn test_connect_is_symmetric() {
        let (mut graph, ids) = graph_with(2);
        assert!(graph.connect(ids[0], ids[1]));

        let a = graph.room(ids[0]).unwrap();
        let b = graph.room(ids[1]).unwrap();
        assert_eq!(a.connections(), &[ids[1]]);
        assert_eq!(b.connections(), &[ids[0]]);
    }

    #[test]
    fn test_connect_refused_when_first_is_full() {
        let (mut graph, ids) = graph_with(MAX_CONNECTIONS + 2);
        let hub = ids[0];
        for other in &ids[1..=MAX_CONNECTIONS] {
            assert!(graph.connect(hub, *other));
        }

        let late = ids[MAX_CONNECTIONS + 1];
        assert_eq!(
            graph.try_connect(hub, late),
            Err(RoomError::NoConnectionAvailable(hub))
        );
        assert_eq!(graph.room(hub).unwrap().num_connections(), MAX_CONNECTIONS);
        assert_eq!(graph.room(late).unwrap().num_connections(), 0);
    }

    #[test]
    fn test_connect_refused_when_second_is_full() {
        let (mut graph, ids) = graph_with(MAX_CONNECTIONS + 2);
        let hub = ids[0];
        for other in &ids[1..=MAX_CONNECTIONS] {
            assert!(graph.connect(*other, hub));
        }

        let late = ids[MAX_CONNECTIONS + 1];
        assert!(!graph.connect(late, hub));
        assert_eq!(graph.room(hub).unwrap().num_connections(), MAX_CONNECTIONS);
        assert_eq!(graph.room(late).unwrap().num_connections(), 0);
    }

    #[test]
    fn test_connect_unknown_room() {
        let (mut graph, ids) = graph_with(1);
        let stray = RoomId(42);
        assert_eq!(
            graph.try_connect(ids[0], stray),
            Err(RoomError::UnknownRoom(stray))
        );
        assert_eq!(graph.room(ids[0]).unwrap().num_connections(), 0);
        assert!(!graph.has_connection_available(stray));
    }

    #[test]
    fn test_repeated_connect_is_not_deduplicated() {
        let (mut graph, ids) = graph_with(2);
        for _ in 0..MAX_CONNECTIONS {
            assert!(graph.connect(ids[0], ids[1]));
        }
        assert!(!graph.connect(ids[0], ids[1]));
        assert_eq!(graph.room(ids[0]).unwrap().connections(), &[ids[1]; MAX_CONNECTIONS]);
    }

    #[test]
    fn test_find_connection_by_name() {
        let (mut graph, ids) = graph_with(3);
        graph.connect(ids[0], ids[1]);
        graph.connect(ids[0], ids[2]);

        assert_eq!(graph.find_connection_by_name(ids[0], "room2"), Some(ids[2]));
        assert_eq!(graph.find_connection_by_name(ids[0], "Room2"), None);
        assert_eq!(graph.find_connection_by_name(ids[0], "room0"), None);
        assert_eq!(graph.find_connection_by_name(ids[2], "room0"), Some(ids[0]));
        assert_eq!(graph.find_connection_by_name(RoomId(9), "room0"), None);
    }

    #[test]
    fn test_find_connection_returns_first_match() {
        let mut graph = RoomGraph::new();
        let hall = graph.add_room("hall", RoomType::Start);
        let first = graph.add_room("twin", RoomType::Mid);
        let second = graph.add_room("twin", RoomType::End);
        graph.connect(hall, first);
        graph.connect(hall, second);

        assert_eq!(graph.find_connection_by_name(hall, "twin"), Some(first));
        assert_eq!(graph.find_by_name("twin"), Some(first));
    }
}
