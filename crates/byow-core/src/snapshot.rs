//! JSON snapshots of a world and bounded encoding.
//!
//! A snapshot carries `seed, width, height, roomCount, corridorCount, rooms,
//! corridors, map`, in that key order. `map` is row-major tile codes.
//!
//! [`SnapshotEncoder`] writes into an output of fixed capacity. Output that
//! would not fit is reported as [`WorldError::EncodingOverflow`] and nothing
//! is returned, so consumers never see a truncated document.

use std::io;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_ENCODE_CAPACITY;
use crate::world::{Corridor, Room, RoomPath, Tile, World};
use crate::WorldError;

/// Room as it appears in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub id: usize,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<&Room> for RoomRecord {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            x: room.x,
            y: room.y,
            width: room.width,
            height: room.height,
        }
    }
}

/// Full serialized state of a world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub seed: i64,
    pub width: usize,
    pub height: usize,
    /// Size of the room id space, retired rooms included
    pub room_count: usize,
    pub corridor_count: usize,
    /// Existing rooms only
    pub rooms: Vec<RoomRecord>,
    pub corridors: Vec<Corridor>,
    pub map: Vec<Vec<Tile>>,
}

impl Snapshot {
    pub fn from_world(world: &World) -> Self {
        Self {
            seed: world.seed(),
            width: world.width(),
            height: world.height(),
            room_count: world.room_count(),
            corridor_count: world.corridor_count(),
            rooms: world.existing_rooms().map(RoomRecord::from).collect(),
            corridors: world.corridors().to_vec(),
            map: world.grid().to_rows(),
        }
    }

    /// Compact JSON, unbounded
    pub fn to_json(&self) -> Result<String, WorldError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON, unbounded
    pub fn to_json_pretty(&self) -> Result<String, WorldError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(contents: &str) -> Result<Self, WorldError> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, WorldError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl World {
    /// Capture the world's current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_world(self)
    }
}

/// Sink that keeps at most `capacity` bytes but counts everything offered.
struct BoundedBuffer {
    bytes: Vec<u8>,
    capacity: usize,
    needed: usize,
}

impl io::Write for BoundedBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.needed = self.needed.saturating_add(data.len());
        if self.needed <= self.capacity {
            self.bytes.extend_from_slice(data);
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// JSON encoder with a hard output limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotEncoder {
    capacity: usize,
    pretty: bool,
}

impl Default for SnapshotEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_ENCODE_CAPACITY)
    }
}

impl SnapshotEncoder {
    /// Encoder whose output never exceeds `capacity` bytes
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            pretty: false,
        }
    }

    /// Emit indented JSON instead of compact
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Encode any serializable value.
    ///
    /// Returns the complete document, or `EncodingOverflow` with the number of
    /// bytes the document needs when it is larger than the capacity.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, WorldError> {
        let mut buffer = BoundedBuffer {
            bytes: Vec::with_capacity(self.capacity.min(DEFAULT_ENCODE_CAPACITY)),
            capacity: self.capacity,
            needed: 0,
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut buffer, value)?;
        } else {
            serde_json::to_writer(&mut buffer, value)?;
        }

        if buffer.needed > self.capacity {
            log::debug!(
                "encoded output needs {} bytes, capacity is {}",
                buffer.needed,
                self.capacity
            );
            return Err(WorldError::EncodingOverflow {
                capacity: self.capacity,
                needed: buffer.needed,
            });
        }
        Ok(buffer.bytes)
    }

    /// Whole-world snapshot
    pub fn encode_world(&self, world: &World) -> Result<Vec<u8>, WorldError> {
        self.encode(&world.snapshot())
    }

    /// Existing rooms as `[{id,x,y,width,height}, ...]`
    pub fn encode_rooms(&self, world: &World) -> Result<Vec<u8>, WorldError> {
        let rooms: Vec<RoomRecord> = world.existing_rooms().map(RoomRecord::from).collect();
        self.encode(&rooms)
    }

    pub fn encode_corridors(&self, world: &World) -> Result<Vec<u8>, WorldError> {
        self.encode(world.corridors())
    }

    /// Tile codes, one array per row
    pub fn encode_map(&self, world: &World) -> Result<Vec<u8>, WorldError> {
        self.encode(&world.grid().to_rows())
    }

    pub fn encode_path(&self, path: &RoomPath) -> Result<Vec<u8>, WorldError> {
        self.encode(path)
    }
}
