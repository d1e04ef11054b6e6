//! Generation limits and defaults

/// Smallest legal grid edge: a 3x3 room plus a one-cell border
pub const MIN_WORLD_SIZE: usize = 5;

/// Default clamp for requested widths
pub const MAX_WORLD_WIDTH: usize = 100;

/// Default clamp for requested heights
pub const MAX_WORLD_HEIGHT: usize = 100;

/// Default room capacity
pub const MAX_ROOMS: usize = 50;

/// Default corridor capacity
pub const MAX_CORRIDORS: usize = 100;

/// Largest room capacity a configuration may ask for
pub const ROOM_CAPACITY_LIMIT: usize = 1024;

/// Largest corridor capacity a configuration may ask for
pub const CORRIDOR_CAPACITY_LIMIT: usize = 2048;

/// Default bound on path query results
pub const MAX_PATH_LEN: usize = 256;

/// Edge of the room placed when random placement yields nothing
pub const FALLBACK_ROOM_SIZE: i32 = 3;

/// Room placement defaults used by [`crate::generate`]
pub const DEFAULT_MIN_ROOM_SIZE: i32 = 3;
pub const DEFAULT_MAX_ROOM_SIZE: i32 = 6;
pub const DEFAULT_MAX_ROOMS: usize = 25;

/// Placement attempts granted per requested room
pub const ATTEMPTS_PER_ROOM: usize = 5;

/// Default bounded-encoding capacity (128 KiB)
pub const DEFAULT_ENCODE_CAPACITY: usize = 128 * 1024;
