//! Top-level generation pipeline

use byow_rng::Lcg;

use crate::{GenerationConfig, WorldError};

use super::{World, generate_rooms, place_fallback_room};

/// Generate a world with the default configuration.
///
/// The same `(seed, width, height)` always yields the same world.
pub fn generate(seed: i64, width: usize, height: usize) -> Result<World, WorldError> {
    generate_with_config(seed, width, height, GenerationConfig::default())
}

/// Generate a world: place rooms, fall back to a single centered room when
/// none fit, then join rooms with the configured connector.
pub fn generate_with_config(
    seed: i64,
    width: usize,
    height: usize,
    config: GenerationConfig,
) -> Result<World, WorldError> {
    let mut world = World::with_config(seed, width, height, config)?;
    let mut rng = Lcg::new(seed);

    let (min_size, max_size, max_rooms) = (
        world.config.min_room_size,
        world.config.max_room_size,
        world.config.max_rooms,
    );
    generate_rooms(&mut world, &mut rng, min_size, max_size, max_rooms)?;
    place_fallback_room(&mut world);

    let status = world.connect_rooms();
    log::info!(
        "generated {}x{} world from seed {}: {} rooms, {} corridors ({:?})",
        world.width(),
        world.height(),
        seed,
        world.room_count(),
        world.corridor_count(),
        status
    );
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConnectorKind, Tile};

    #[test]
    fn test_same_seed_same_world() {
        let a = generate(42, 80, 50).unwrap();
        let b = generate(42, 80, 50).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.rooms(), b.rooms());
        assert_eq!(a.corridors(), b.corridors());
    }

    #[test]
    fn test_generated_world_is_connected() {
        let world = generate(42, 80, 50).unwrap();
        assert!(world.room_count() >= 1);
        assert!(world.is_connected());
        assert_eq!(world.corridor_count(), world.room_count() - 1);
    }

    #[test]
    fn test_minimum_world_gets_fallback() {
        let world = generate(1, 5, 5).unwrap();
        assert_eq!(world.room_count(), 1);
        assert_eq!(world.corridor_count(), 0);
        assert_eq!(world.grid().count(Tile::Room), 9);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            generate(1, 3, 40),
            Err(WorldError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_configs_that_cannot_connect_are_rejected() {
        let config = GenerationConfig::from_json(r#"{"roomCapacity": 25}"#).unwrap();
        assert!(generate_with_config(42, 80, 50, config).is_ok());

        let config = GenerationConfig {
            corridor_capacity: 1,
            ..Default::default()
        };
        assert!(matches!(
            generate_with_config(42, 80, 50, config),
            Err(WorldError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_nearest_neighbor_config() {
        let config = GenerationConfig {
            connector: ConnectorKind::NearestNeighbor,
            ..Default::default()
        };
        let world = generate_with_config(7, 60, 40, config).unwrap();
        assert!(world.is_connected());
        assert_eq!(world.corridor_count(), world.room_count() - 1);
    }
}
