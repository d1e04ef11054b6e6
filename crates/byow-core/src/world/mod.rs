//! World state: tile grid, rooms, corridors and the room graph.
//!
//! A `World` is created once per generation request, populated by the room
//! placer, connected by a connector, then queried. Mutating passes take
//! `&mut World`; queries take `&World` and may run side by side.

mod connector;
mod corridor;
mod disjoint_set;
mod generation;
mod graph;
mod placement;
mod room;
mod tile;

pub use connector::{ConnectStatus, connect_rooms_nearest, connect_rooms_with_mst};
pub use corridor::{Corridor, draw_corridor};
pub use disjoint_set::DisjointSet;
pub use generation::{generate, generate_with_config};
pub use graph::{RoomGraph, RoomPath};
pub use placement::{generate_rooms, place_fallback_room};
pub use room::{Point, Room};
pub use tile::{Tile, TileGrid};

use crate::{ConnectorKind, GenerationConfig, WorldError};

/// A generated world
#[derive(Debug, Clone)]
pub struct World {
    seed: i64,
    pub(crate) grid: TileGrid,
    pub(crate) rooms: Vec<Room>,
    pub(crate) corridors: Vec<Corridor>,
    pub(crate) graph: RoomGraph,
    pub(crate) sets: DisjointSet,
    pub(crate) config: GenerationConfig,
}

impl World {
    /// Create an all-wall world with the default configuration.
    ///
    /// Fails if either dimension is below 5; clamps dimensions above 100.
    pub fn new(seed: i64, width: usize, height: usize) -> Result<Self, WorldError> {
        Self::with_config(seed, width, height, GenerationConfig::default())
    }

    /// Create an all-wall world under the given configuration
    pub fn with_config(
        seed: i64,
        width: usize,
        height: usize,
        config: GenerationConfig,
    ) -> Result<Self, WorldError> {
        config.validate()?;
        let (width, height) = config.clamp_dimensions(width, height)?;
        let grid = TileGrid::new(width, height)?;

        Ok(Self {
            seed,
            grid,
            rooms: Vec::new(),
            corridors: Vec::new(),
            graph: RoomGraph::default(),
            sets: DisjointSet::new(config.room_capacity),
            config,
        })
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Tile at `(x, y)`; walls outside the grid
    pub fn tile(&self, x: i32, y: i32) -> Tile {
        self.grid.get(x, y)
    }

    /// Overwrite a tile; ignored outside the grid
    pub fn set_tile(&mut self, x: i32, y: i32, tile: Tile) {
        self.grid.set(x, y, tile);
    }

    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        self.grid.in_bounds(x, y)
    }

    /// Every room ever placed, retired ones included, indexed by id
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Rooms that still exist
    pub fn existing_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| room.exists)
    }

    /// Existing room by id
    pub fn room(&self, id: usize) -> Option<&Room> {
        self.rooms.get(id).filter(|room| room.exists)
    }

    /// Size of the dense id space
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn existing_room_count(&self) -> usize {
        self.existing_rooms().count()
    }

    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    pub fn corridor_count(&self) -> usize {
        self.corridors.len()
    }

    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    /// Disjoint-set state left by the last connection pass
    pub fn disjoint_set(&self) -> &DisjointSet {
        &self.sets
    }

    /// Append a room with the next id and rasterize it as room tiles.
    pub(crate) fn add_room(&mut self, mut room: Room) {
        room.id = self.rooms.len();
        self.grid
            .fill_rect(room.x, room.y, room.width, room.height, Tile::Room);
        self.rooms.push(room);
    }

    /// Mark a room absent. Its id stays reserved and its tiles stay as they are.
    pub fn retire_room(&mut self, id: usize) -> Result<(), WorldError> {
        match self.rooms.get_mut(id) {
            Some(room) if room.exists => {
                room.exists = false;
                log::debug!("room {id} retired");
                Ok(())
            }
            _ => Err(WorldError::InvalidRoomId { id }),
        }
    }

    /// Discard corridors, graph edges and disjoint-set state
    pub(crate) fn reset_connections(&mut self) {
        self.corridors.clear();
        self.graph.reset(self.rooms.len());
        self.sets.init(self.rooms.len());
    }

    /// Carve a corridor between two room centers and record it everywhere.
    pub(crate) fn add_corridor(&mut self, a: usize, b: usize) {
        let start = self.rooms[a].center();
        let end = self.rooms[b].center();
        let corridor = Corridor::new(self.corridors.len(), start, end);
        let carved = draw_corridor(&mut self.grid, start, end);
        log::trace!(
            "corridor {} joins room {a} ({}, {}) to room {b} ({}, {}), {carved} new tiles",
            corridor.id,
            start.x,
            start.y,
            end.x,
            end.y
        );

        self.corridors.push(corridor);
        self.graph.connect(a, b);
        self.sets.union(a, b);
    }

    /// Run the connector selected by the configuration
    pub fn connect_rooms(&mut self) -> ConnectStatus {
        match self.config.connector {
            ConnectorKind::Mst => connect_rooms_with_mst(self),
            ConnectorKind::NearestNeighbor => connect_rooms_nearest(self),
        }
    }

    /// Whether every existing room shares room 0's set (vacuously true for
    /// fewer than two rooms).
    pub fn is_connected(&self) -> bool {
        let mut existing = self.existing_rooms();
        let Some(first) = existing.next() else {
            return true;
        };
        let root = self.sets.root(first.id);
        existing.all(|room| self.sets.root(room.id) == root)
    }

    /// Shortest room-to-room path over the room graph.
    ///
    /// The path includes both ends; asking for a room's path to itself yields
    /// `[room]`. Fails with `InvalidRoomId` for unknown or retired rooms and
    /// with `NoPath` when the target is unreachable or the path would be
    /// longer than `max_length` rooms.
    pub fn find_shortest_path(
        &self,
        start: usize,
        end: usize,
        max_length: usize,
    ) -> Result<RoomPath, WorldError> {
        for id in [start, end] {
            if self.room(id).is_none() {
                return Err(WorldError::InvalidRoomId { id });
            }
        }

        let path = if start == end {
            vec![start]
        } else {
            self.graph
                .shortest_path(start, end, |id| self.room(id).is_some())
                .ok_or(WorldError::NoPath { start, end })?
        };

        if path.len() > max_length {
            log::debug!(
                "path {start} -> {end} has {} rooms, limit is {max_length}",
                path.len()
            );
            return Err(WorldError::NoPath { start, end });
        }
        Ok(RoomPath::new(path))
    }

    /// [`Self::find_shortest_path`] bounded by the configured maximum
    pub fn find_path(&self, start: usize, end: usize) -> Result<RoomPath, WorldError> {
        self.find_shortest_path(start, end, self.config.max_path_length)
    }
}
