//! byow-core: deterministic room-and-corridor world generation
//!
//! Given a seed and grid dimensions, builds a tile grid of non-overlapping
//! rooms joined by L-shaped corridors, tracks reachability with a disjoint
//! set, and answers shortest room-to-room path queries over the room graph.
//!
//! This crate performs no I/O. Diagnostics go through the `log` facade and
//! are silent unless the embedding program installs a logger.

pub mod config;
pub mod snapshot;
pub mod world;

mod consts;
mod error;

pub use byow_rng::Lcg;
pub use config::{ConnectorKind, GenerationConfig, OverlapPolicy};
pub use consts::*;
pub use error::WorldError;
pub use snapshot::{RoomRecord, Snapshot, SnapshotEncoder};
pub use world::{
    ConnectStatus, Corridor, DisjointSet, Point, Room, RoomGraph, RoomPath, Tile, TileGrid,
    World, generate, generate_with_config,
};
