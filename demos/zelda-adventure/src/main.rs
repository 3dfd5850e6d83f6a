//! Builds a small adventure out of rooms and prints every room.
//!
//! Usage: `zelda-adventure [CONFIG.json]`. Without a path the built-in
//! two-room adventure is used. Reports go to stdout, logs to stderr
//! (filtered by `RUST_LOG`, default `info`).

mod config;
mod error;

use roomgraph::RoomGraph;
use tracing_subscriber::EnvFilter;

use config::AdventureConfig;
use error::AdventureError;

/// Creates every configured room, then connects the configured pairs.
///
/// A connection that the graph refuses (self-connection or a full room) is
/// logged and skipped. A connection naming an undeclared room is an error.
fn build_graph(config: &AdventureConfig) -> Result<RoomGraph, AdventureError> {
    let mut graph = RoomGraph::new();
    for spec in &config.rooms {
        graph.add_room(spec.name.as_str(), spec.room_type);
    }

    for (from, to) in &config.connections {
        let a = graph
            .find_by_name(from)
            .ok_or_else(|| AdventureError::UnknownRoomName(from.clone()))?;
        let b = graph
            .find_by_name(to)
            .ok_or_else(|| AdventureError::UnknownRoomName(to.clone()))?;

        if let Err(reason) = graph.try_connect(a, b) {
            tracing::warn!(%from, %to, %reason, "skipping connection");
        }
    }

    tracing::info!(rooms = graph.len(), "adventure built");
    Ok(graph)
}

/// Renders the report of every room, in creation order.
fn render(graph: &RoomGraph) -> Result<String, AdventureError> {
    let mut out = String::new();
    for id in &graph.room_list() {
        out.push_str(&graph.report(id)?.to_string());
    }
    Ok(out)
}

fn main() -> Result<(), AdventureError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(%path, "loading adventure");
            AdventureConfig::load(&path)?
        }
        None => AdventureConfig::default(),
    };

    let graph = build_graph(&config)?;
    print!("{}", render(&graph)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoomSpec;
    use roomgraph::{MAX_CONNECTIONS, RoomType};

    #[test]
    fn test_default_adventure_output() {
        let graph = build_graph(&AdventureConfig::default()).unwrap();
        assert_eq!(
            render(&graph).unwrap(),
            "ROOM NAME: Eastern Palace\n\
             CONNECTION 1: House of Gales\n\
             ROOM TYPE: START_ROOM\n\
             ROOM NAME: House of Gales\n\
             CONNECTION 1: Eastern Palace\n\
             ROOM TYPE: END_ROOM\n"
        );
    }

    #[test]
    fn test_unknown_room_name_in_connection() {
        let config = AdventureConfig {
            rooms: vec![RoomSpec::new("Eastern Palace", RoomType::Start)],
            connections: vec![("Eastern Palace".into(), "Skull Woods".into())],
        };
        let err = build_graph(&config).unwrap_err();
        assert!(matches!(err, AdventureError::UnknownRoomName(name) if name == "Skull Woods"));
    }

    #[test]
    fn test_refused_connections_are_skipped() {
        let mut rooms = vec![RoomSpec::new("hub", RoomType::Start)];
        let mut connections = vec![("hub".to_string(), "hub".to_string())];
        for i in 0..=MAX_CONNECTIONS {
            let name = format!("cell{i}");
            rooms.push(RoomSpec::new(name.as_str(), RoomType::Mid));
            connections.push(("hub".to_string(), name));
        }

        let graph = build_graph(&AdventureConfig { rooms, connections }).unwrap();
        let hub = graph.find_by_name("hub").unwrap();
        assert_eq!(graph.room(hub).unwrap().num_connections(), MAX_CONNECTIONS);

        let last = graph.find_by_name(&format!("cell{MAX_CONNECTIONS}")).unwrap();
        assert_eq!(graph.room(last).unwrap().num_connections(), 0);
    }
}
