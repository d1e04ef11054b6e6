//! Invariants that hold for every seed and every legal grid size

use byow_core::{OverlapPolicy, Tile, generate};
use proptest::prelude::*;

fn dimensions() -> impl Strategy<Value = (i64, usize, usize)> {
    (any::<i64>(), 5usize..=100, 5usize..=100)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generation_is_deterministic((seed, width, height) in dimensions()) {
        let a = generate(seed, width, height).unwrap();
        let b = generate(seed, width, height).unwrap();
        prop_assert_eq!(a.grid(), b.grid());
        prop_assert_eq!(a.rooms(), b.rooms());
        prop_assert_eq!(a.corridors(), b.corridors());
    }

    #[test]
    fn worlds_are_connected_spanning_trees((seed, width, height) in dimensions()) {
        let world = generate(seed, width, height).unwrap();
        prop_assert!(world.room_count() >= 1);
        prop_assert!(world.is_connected());
        prop_assert_eq!(world.corridor_count(), world.room_count() - 1);
        prop_assert_eq!(world.graph().edge_count(), world.corridor_count());

        let sets = world.disjoint_set();
        let root = sets.root(0);
        prop_assert!(root.is_some());
        for room in world.rooms() {
            prop_assert_eq!(sets.root(room.id), root);
        }
        prop_assert_eq!(sets.set_count(), 1);
    }

    #[test]
    fn rooms_never_overlap_or_touch_the_border((seed, width, height) in dimensions()) {
        let world = generate(seed, width, height).unwrap();
        let rooms = world.rooms();
        for (i, a) in rooms.iter().enumerate() {
            prop_assert!(a.fits_inside(world.width(), world.height()));
            for b in &rooms[i + 1..] {
                prop_assert!(!a.overlaps(b, OverlapPolicy::Inclusive));
            }
        }
    }

    #[test]
    fn corridors_never_cover_rooms((seed, width, height) in dimensions()) {
        let world = generate(seed, width, height).unwrap();
        let area: i32 = world.rooms().iter().map(|room| room.area()).sum();
        prop_assert_eq!(world.grid().count(Tile::Room), area as usize);
        for room in world.rooms() {
            for y in room.y..room.y + room.height {
                for x in room.x..room.x + room.width {
                    prop_assert_eq!(world.tile(x, y), Tile::Room);
                }
            }
        }
    }

    #[test]
    fn outside_the_grid_is_wall(
        (seed, width, height) in dimensions(),
        x in -200i32..200,
        y in -200i32..200,
    ) {
        let world = generate(seed, width, height).unwrap();
        if !world.is_valid_position(x, y) {
            prop_assert_eq!(world.tile(x, y), Tile::Wall);
        }
        prop_assert_eq!(world.tile(-1, 0), Tile::Wall);
        prop_assert_eq!(world.tile(world.width() as i32, 0), Tile::Wall);
    }

    #[test]
    fn paths_walk_graph_edges(
        (seed, width, height) in dimensions(),
        from in 0usize..50,
        to in 0usize..50,
    ) {
        let world = generate(seed, width, height).unwrap();
        let rooms = world.room_count();
        let (from, to) = (from % rooms, to % rooms);

        let path = world.find_path(from, to).unwrap();
        prop_assert_eq!(path.path.first(), Some(&from));
        prop_assert_eq!(path.path.last(), Some(&to));
        prop_assert_eq!(path.length, path.path.len());
        for pair in path.path.windows(2) {
            prop_assert!(world.graph().are_adjacent(pair[0], pair[1]));
        }
    }

    #[test]
    fn every_room_reaches_itself((seed, width, height) in dimensions()) {
        let world = generate(seed, width, height).unwrap();
        for room in 0..world.room_count() {
            let path = world.find_shortest_path(room, room, 1).unwrap();
            prop_assert_eq!(path.path, vec![room]);
        }
    }
}
