//! Named rooms with bounded fan-out connections.
//!
//! A [`RoomGraph`] owns rooms and links pairs of them with symmetric
//! connections, at most [`MAX_CONNECTIONS`] per room. A [`RoomList`] keeps
//! an ordered, append-only chain of room references for traversal.
//!
//! # Key types
//!
//! - [`RoomGraph`] — creates rooms, connects them, looks them up, prints them
//! - [`Room`] — name, [`RoomType`], and connections in insertion order
//! - [`RoomId`] — non-owning reference to a room in its graph
//! - [`RoomList`] — singly-linked list of room references with O(1) append
//! - [`RoomReport`] — the `ROOM NAME` / `CONNECTION` / `ROOM TYPE` text
//!
//! ```
//! use roomgraph::{RoomGraph, RoomType};
//!
//! let mut graph = RoomGraph::new();
//! let palace = graph.add_room("Eastern Palace", RoomType::Start);
//! let gales = graph.add_room("House of Gales", RoomType::End);
//! assert!(graph.connect(palace, gales));
//! assert_eq!(graph.find_connection_by_name(palace, "House of Gales"), Some(gales));
//! ```

mod error;
mod graph;
mod list;
mod report;
mod room;

pub use error::RoomError;
pub use graph::RoomGraph;
pub use list::{Iter, RoomLink, RoomList};
pub use report::RoomReport;
pub use room::{MAX_CONNECTIONS, Room, RoomId, RoomType, type_label};
