//! Generation configuration
//!
//! Limits are explicit and validated. Dimensions above the maxima are clamped;
//! rooms and corridors never exceed their capacities.

use serde::{Deserialize, Serialize};

use crate::WorldError;
use crate::consts::*;

/// How the room placer decides that two rooms collide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlapPolicy {
    /// Rooms that share an edge count as overlapping (one wall cell between rooms minimum)
    #[default]
    Inclusive,
    /// Rooms may sit side by side as long as no cell is shared
    AllowTouching,
}

/// Which corridor builder a generation pass runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectorKind {
    /// Kruskal spanning tree over center distances
    #[default]
    Mst,
    /// Each room joins its nearest higher-id neighbor
    NearestNeighbor,
}

/// Parameters of a generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationConfig {
    pub min_room_size: i32,
    pub max_room_size: i32,
    /// Target number of rooms; placement gets `max_rooms * 5` attempts
    pub max_rooms: usize,
    pub max_width: usize,
    pub max_height: usize,
    pub room_capacity: usize,
    pub corridor_capacity: usize,
    /// Default `max_length` for [`crate::World::find_path`]
    pub max_path_length: usize,
    pub overlap: OverlapPolicy,
    pub connector: ConnectorKind,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
            max_room_size: DEFAULT_MAX_ROOM_SIZE,
            max_rooms: DEFAULT_MAX_ROOMS,
            max_width: MAX_WORLD_WIDTH,
            max_height: MAX_WORLD_HEIGHT,
            room_capacity: MAX_ROOMS,
            corridor_capacity: MAX_CORRIDORS,
            max_path_length: MAX_PATH_LEN,
            overlap: OverlapPolicy::Inclusive,
            connector: ConnectorKind::Mst,
        }
    }
}

impl GenerationConfig {
    /// Parse a (possibly partial) JSON document; missing keys take defaults.
    pub fn from_json(contents: &str) -> Result<Self, WorldError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration against its own limits
    pub fn validate(&self) -> Result<(), WorldError> {
        if self.min_room_size < 1 {
            return Err(WorldError::config(format!(
                "minRoomSize must be at least 1, got {}",
                self.min_room_size
            )));
        }
        if self.min_room_size > self.max_room_size {
            return Err(WorldError::config(format!(
                "minRoomSize {} exceeds maxRoomSize {}",
                self.min_room_size, self.max_room_size
            )));
        }
        if self.room_capacity == 0 || self.room_capacity > ROOM_CAPACITY_LIMIT {
            return Err(WorldError::config(format!(
                "roomCapacity must be in 1..={ROOM_CAPACITY_LIMIT}, got {}",
                self.room_capacity
            )));
        }
        if self.corridor_capacity > CORRIDOR_CAPACITY_LIMIT {
            return Err(WorldError::config(format!(
                "corridorCapacity must be at most {CORRIDOR_CAPACITY_LIMIT}, got {}",
                self.corridor_capacity
            )));
        }
        // A spanning tree over a full room list must always fit.
        if self.corridor_capacity < self.room_capacity - 1 {
            return Err(WorldError::config(format!(
                "corridorCapacity {} cannot join roomCapacity {} rooms",
                self.corridor_capacity, self.room_capacity
            )));
        }
        if self.max_rooms > self.room_capacity {
            return Err(WorldError::config(format!(
                "maxRooms {} exceeds roomCapacity {}",
                self.max_rooms, self.room_capacity
            )));
        }
        if self.max_width < MIN_WORLD_SIZE || self.max_height < MIN_WORLD_SIZE {
            return Err(WorldError::config(format!(
                "maximum dimensions {}x{} are below the minimum world size {}",
                self.max_width, self.max_height, MIN_WORLD_SIZE
            )));
        }
        if i32::try_from(self.max_width).is_err() || i32::try_from(self.max_height).is_err() {
            return Err(WorldError::config(
                "maximum dimensions must fit in a 32-bit coordinate",
            ));
        }
        let largest_room = self.max_width.max(self.max_height) - 2;
        if i64::from(self.max_room_size) > largest_room as i64 {
            return Err(WorldError::config(format!(
                "maxRoomSize {} cannot fit a {}x{} world",
                self.max_room_size, self.max_width, self.max_height
            )));
        }
        Ok(())
    }

    /// Reject grids too small for any room, clamp oversized ones.
    pub fn clamp_dimensions(&self, width: usize, height: usize) -> Result<(usize, usize), WorldError> {
        if width < MIN_WORLD_SIZE || height < MIN_WORLD_SIZE {
            return Err(WorldError::InvalidDimension {
                width,
                height,
                min: MIN_WORLD_SIZE,
            });
        }

        let clamped = (width.min(self.max_width), height.min(self.max_height));
        if clamped != (width, height) {
            log::warn!(
                "requested {}x{} world clamped to {}x{}",
                width,
                height,
                clamped.0,
                clamped.1
            );
        }
        Ok(clamped)
    }
}
