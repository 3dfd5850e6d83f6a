//! An append-only, singly-linked list of room references.
//!
//! Links live in a `Vec` owned by the list and point at their successor by
//! position, so appending is O(1) and dropping the list releases every link
//! without recursion. The rooms themselves are never owned here: each link
//! only holds a [`RoomId`].
//!
//! ```text
//! head ─→ [R-a] ─→ [R-b] ─→ [R-c] ←─ tail
//!                             │
//!                             ▼
//!                            None
//! ```

use crate::RoomId;

/// One link of a [`RoomList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomLink {
    room: RoomId,
    next: Option<usize>,
}

impl RoomLink {
    fn new(room: RoomId) -> Self {
        Self { room, next: None }
    }

    /// Returns the room this link refers to.
    pub fn room(&self) -> RoomId {
        self.room
    }

    /// Returns `true` if this link is the last one in its list.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// An ordered collection of room references with O(1) append.
///
/// There is no removal and no de-duplication: appending the same room twice
/// stores it twice.
#[derive(Debug, Clone, Default)]
pub struct RoomList {
    links: Vec<RoomLink>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl RoomList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the first link, if any.
    pub fn head(&self) -> Option<&RoomLink> {
        self.head.map(|pos| &self.links[pos])
    }

    /// Returns the last link, if any.
    pub fn tail(&self) -> Option<&RoomLink> {
        self.tail.map(|pos| &self.links[pos])
    }

    /// Returns the link following `link`.
    pub fn next(&self, link: &RoomLink) -> Option<&RoomLink> {
        link.next.and_then(|pos| self.links.get(pos))
    }

    /// Appends a reference to `room` at the end of the list.
    pub fn append(&mut self, room: RoomId) {
        let pos = self.links.len();
        self.links.push(RoomLink::new(room));

        match self.tail {
            None => {
                self.head = Some(pos);
            }
            Some(tail) => {
                self.links[tail].next = Some(pos);
            }
        }
        self.tail = Some(pos);

        tracing::trace!(room_id = %room, size = self.len(), "room appended to list");
    }

    /// Returns `true` if `room` appears anywhere in the list.
    pub fn contains(&self, room: RoomId) -> bool {
        self.iter().any(|id| id == room)
    }

    /// Walks the chain from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head(),
        }
    }
}

/// Forward iterator over a [`RoomList`], yielding each link's [`RoomId`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    list: &'a RoomList,
    cursor: Option<&'a RoomLink>,
}

impl Iterator for Iter<'_> {
    type Item = RoomId;

    fn next(&mut self) -> Option<RoomId> {
        let link = self.cursor?;
        self.cursor = self.list.next(link);
        Some(link.room())
    }
}

impl<'a> IntoIterator for &'a RoomList {
    type Item = RoomId;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Extend<RoomId> for RoomList {
    fn extend<I: IntoIterator<Item = RoomId>>(&mut self, iter: I) {
        for room in iter {
            self.append(room);
        }
    }
}

impl FromIterator<RoomId> for RoomList {
    fn from_iter<I: IntoIterator<Item = RoomId>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
