//! Adventure layout: which rooms exist and which pairs are connected.

use std::path::Path;

use roomgraph::RoomType;
use serde::{Deserialize, Serialize};

use crate::AdventureError;

// ---------------------------------------------------------------------------
// RoomSpec
// ---------------------------------------------------------------------------

/// One room to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    pub room_type: RoomType,
}

impl RoomSpec {
    pub fn new(name: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            name: name.into(),
            room_type,
        }
    }
}

// ---------------------------------------------------------------------------
// AdventureConfig
// ---------------------------------------------------------------------------

/// The rooms of an adventure and the connections between them.
///
/// Connections name rooms by their `name`; when several rooms share a name
/// the first one declared wins. Loaded from JSON, for example:
///
/// ```json
/// {
///   "rooms": [
///     { "name": "Eastern Palace", "room_type": "start" },
///     { "name": "House of Gales", "room_type": "end" }
///   ],
///   "connections": [["Eastern Palace", "House of Gales"]]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdventureConfig {
    /// Rooms in creation order.
    pub rooms: Vec<RoomSpec>,

    /// Pairs of room names to connect, in order.
    #[serde(default)]
    pub connections: Vec<(String, String)>,
}

impl AdventureConfig {
    /// Reads a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AdventureError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parses a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, AdventureError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl Default for AdventureConfig {
    fn default() -> Self {
        Self {
            rooms: vec![
                RoomSpec::new("Eastern Palace", RoomType::Start),
                RoomSpec::new("House of Gales", RoomType::End),
            ],
            connections: vec![("Eastern Palace".into(), "House of Gales".into())],
        }
    }
}
