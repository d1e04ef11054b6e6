//! Room placement by rejection sampling

use byow_rng::Lcg;

use crate::consts::{ATTEMPTS_PER_ROOM, FALLBACK_ROOM_SIZE};
use crate::WorldError;

use super::{Room, World};

/// Place up to `max_rooms` non-overlapping rooms with edges in
/// `[min_size, max_size]`, using at most `max_rooms * 5` attempts.
///
/// Accepted rooms get the next dense id and are rasterized immediately.
/// Candidates that collide with an existing room, or that cannot fit with a
/// one-cell margin, are dropped. Returns the number of rooms placed.
pub fn generate_rooms(
    world: &mut World,
    rng: &mut Lcg,
    min_size: i32,
    max_size: i32,
    max_rooms: usize,
) -> Result<usize, WorldError> {
    if min_size < 1 || min_size > max_size {
        return Err(WorldError::InvalidConfig {
            reason: format!("room size range {min_size}..={max_size} is empty"),
        });
    }
    let capacity = world.config.room_capacity;
    if world.rooms.len() + max_rooms > capacity {
        return Err(WorldError::InvalidConfig {
            reason: format!(
                "placing {max_rooms} rooms next to {} existing exceeds capacity {capacity}",
                world.rooms.len()
            ),
        });
    }

    let width = world.width() as i32;
    let height = world.height() as i32;
    let policy = world.config.overlap;
    let max_attempts = max_rooms * ATTEMPTS_PER_ROOM;
    let mut placed = 0;
    let mut attempts = 0;

    while placed < max_rooms && attempts < max_attempts {
        attempts += 1;

        let w = rng.range(min_size, max_size);
        let h = rng.range(min_size, max_size);
        let x = rng.range(1, width - w - 1);
        let y = rng.range(1, height - h - 1);

        let candidate = Room::new(world.rooms.len(), x, y, w, h);
        if !candidate.fits_inside(world.width(), world.height()) {
            continue;
        }
        if world
            .rooms
            .iter()
            .any(|room| room.exists && candidate.overlaps(room, policy))
        {
            continue;
        }

        world.add_room(candidate);
        placed += 1;
    }

    log::debug!(
        "placed {} of {} rooms in {} attempts on a {}x{} grid",
        placed,
        max_rooms,
        attempts,
        width,
        height
    );
    Ok(placed)
}

/// Place one minimal room centered in the grid when the world has none.
///
/// Returns true if a room was placed. Leaves the world untouched when it
/// already has rooms or is too small to hold the fallback with a border.
pub fn place_fallback_room(world: &mut World) -> bool {
    if world.existing_room_count() > 0 || world.rooms.len() >= world.config.room_capacity {
        return false;
    }

    let size = FALLBACK_ROOM_SIZE;
    let width = world.width() as i32;
    let height = world.height() as i32;
    if width < size + 2 || height < size + 2 {
        return false;
    }

    let x = ((width - size) / 2).clamp(1, width - size - 1);
    let y = ((height - size) / 2).clamp(1, height - size - 1);

    log::debug!("no room placed at random; fallback {size}x{size} room at ({x}, {y})");
    world.add_room(Room::new(world.rooms.len(), x, y, size, size));
    true
}
