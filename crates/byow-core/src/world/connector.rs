//! Corridor builders: Kruskal spanning tree and nearest-neighbor joining.
//!
//! Both discard the previous room graph, corridor list and disjoint-set state
//! before running, so calling them again never duplicates edges. A validated
//! configuration leaves room for `roomCapacity - 1` corridors, so a spanning
//! tree always fits.

use super::World;

/// Outcome of a connection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectStatus {
    /// Corridors were built
    Connected { corridors: usize },
    /// Fewer than two existing rooms; nothing was built
    NothingToConnect { rooms: usize },
}

impl ConnectStatus {
    pub fn is_connected(self) -> bool {
        matches!(self, ConnectStatus::Connected { .. })
    }
}

/// Candidate corridor between two rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    a: usize,
    b: usize,
    weight: i32,
}

/// Join all existing rooms with a minimum spanning tree over center
/// distances (Kruskal). Yields `rooms - 1` corridors for `rooms >= 2`.
pub fn connect_rooms_with_mst(world: &mut World) -> ConnectStatus {
    world.reset_connections();

    let existing = world.existing_room_count();
    if existing < 2 {
        log::debug!("mst: {existing} room(s), nothing to connect");
        return ConnectStatus::NothingToConnect { rooms: existing };
    }

    let mut edges = Vec::with_capacity(existing * (existing - 1) / 2);
    for (i, a) in world.rooms.iter().enumerate().filter(|(_, r)| r.exists) {
        for (j, b) in world.rooms.iter().enumerate().skip(i + 1).filter(|(_, r)| r.exists) {
            edges.push(Edge {
                a: i,
                b: j,
                weight: a.distance(b),
            });
        }
    }
    // Stable: ties keep pair order.
    edges.sort_by_key(|edge| edge.weight);

    for edge in edges {
        if world.sets.connected(edge.a, edge.b) {
            continue;
        }
        world.add_corridor(edge.a, edge.b);
    }

    let corridors = world.corridors.len();
    log::debug!("mst: {existing} rooms joined by {corridors} corridors");
    ConnectStatus::Connected { corridors }
}

/// Join each existing room to its nearest existing room with a higher id.
///
/// Every room but the last links upward, so all rooms end up reachable from
/// the highest-id room. Edges are not minimal: the total corridor length is
/// usually larger than the spanning tree's.
pub fn connect_rooms_nearest(world: &mut World) -> ConnectStatus {
    world.reset_connections();

    let existing = world.existing_room_count();
    if existing < 2 {
        log::debug!("nearest: {existing} room(s), nothing to connect");
        return ConnectStatus::NothingToConnect { rooms: existing };
    }

    for i in 0..world.rooms.len() {
        if !world.rooms[i].exists {
            continue;
        }
        let nearest = world.rooms[i + 1..]
            .iter()
            .filter(|room| room.exists)
            .map(|room| (world.rooms[i].distance(room), room.id))
            .min_by_key(|&(distance, _)| distance);

        let Some((_, j)) = nearest else {
            continue;
        };
        world.add_corridor(i, j);
    }

    let corridors = world.corridors.len();
    log::debug!("nearest: {existing} rooms, {corridors} corridors");
    ConnectStatus::Connected { corridors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Room;
    use crate::{GenerationConfig, Tile};

    fn world_with_rooms(rooms: &[(i32, i32, i32, i32)]) -> World {
        let mut world = World::new(0, 60, 30).unwrap();
        for &(x, y, w, h) in rooms {
            world.add_room(Room::new(world.room_count(), x, y, w, h));
        }
        world
    }

    #[test]
    fn test_spanning_tree_size() {
        let mut world = world_with_rooms(&[
            (2, 2, 3, 3),
            (20, 2, 3, 3),
            (40, 2, 3, 3),
            (2, 20, 3, 3),
            (40, 20, 4, 4),
        ]);
        let status = connect_rooms_with_mst(&mut world);
        assert_eq!(status, ConnectStatus::Connected { corridors: 4 });
        assert_eq!(world.corridor_count(), 4);
        assert_eq!(world.graph().edge_count(), 4);
        assert!(world.is_connected());
    }

    #[test]
    fn test_picks_shortest_edges() {
        // Three rooms on a line: 0-1 and 1-2 are short, 0-2 is long.
        let mut world = world_with_rooms(&[(2, 2, 3, 3), (10, 2, 3, 3), (18, 2, 3, 3)]);
        connect_rooms_with_mst(&mut world);
        assert!(world.graph().are_adjacent(0, 1));
        assert!(world.graph().are_adjacent(1, 2));
        assert!(!world.graph().are_adjacent(0, 2));
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let mut world = world_with_rooms(&[(2, 2, 3, 3), (10, 8, 3, 3), (30, 4, 5, 5)]);
        connect_rooms_with_mst(&mut world);
        let corridors = world.corridors().to_vec();
        let grid = world.grid().clone();

        connect_rooms_with_mst(&mut world);
        assert_eq!(world.corridors(), corridors.as_slice());
        assert_eq!(world.graph().edge_count(), 2);
        assert_eq!(world.grid(), &grid);
    }

    #[test]
    fn test_single_room_is_a_no_op() {
        let mut world = world_with_rooms(&[(2, 2, 3, 3)]);
        assert_eq!(
            connect_rooms_with_mst(&mut world),
            ConnectStatus::NothingToConnect { rooms: 1 }
        );
        assert_eq!(world.corridor_count(), 0);
        assert!(world.is_connected());

        let mut empty = world_with_rooms(&[]);
        assert!(!connect_rooms_with_mst(&mut empty).is_connected());
        assert!(empty.is_connected());
    }

    #[test]
    fn test_retired_rooms_are_skipped() {
        let mut world = world_with_rooms(&[(2, 2, 3, 3), (10, 2, 3, 3), (18, 2, 3, 3)]);
        world.retire_room(1).unwrap();
        connect_rooms_with_mst(&mut world);
        assert_eq!(world.corridor_count(), 1);
        assert!(world.graph().are_adjacent(0, 2));
        assert!(world.is_connected());
    }

    #[test]
    fn test_short_corridor_capacity_is_rejected() {
        let config = GenerationConfig {
            corridor_capacity: 2,
            ..Default::default()
        };
        assert!(World::with_config(0, 60, 30, config).is_err());
    }

    #[test]
    fn test_corridors_join_centers() {
        let mut world = world_with_rooms(&[(2, 2, 3, 3), (12, 8, 5, 3)]);
        connect_rooms_with_mst(&mut world);
        let corridor = &world.corridors()[0];
        assert_eq!(corridor.start, world.rooms()[0].center());
        assert_eq!(corridor.end, world.rooms()[1].center());
        assert!(corridor.is_turning);
        // room interiors untouched
        assert_eq!(world.grid().count(Tile::Room), 9 + 15);
    }

    #[test]
    fn test_nearest_neighbor() {
        let mut world = world_with_rooms(&[
            (2, 2, 3, 3),
            (40, 2, 3, 3),
            (8, 2, 3, 3),
            (46, 2, 3, 3),
        ]);
        let status = connect_rooms_nearest(&mut world);
        assert_eq!(status, ConnectStatus::Connected { corridors: 3 });
        assert!(world.graph().are_adjacent(0, 2));
        assert!(world.graph().are_adjacent(1, 3));
        assert!(world.graph().are_adjacent(2, 3));
    }

    #[test]
    fn test_nearest_neighbor_is_connected() {
        let mut world = world_with_rooms(&[
            (30, 20, 3, 3),
            (2, 2, 3, 3),
            (50, 4, 4, 4),
            (8, 20, 3, 3),
            (20, 10, 3, 3),
        ]);
        connect_rooms_nearest(&mut world);
        assert_eq!(world.corridor_count(), 4);
        assert!(world.is_connected());
        for room in 0..4 {
            assert!(world.find_path(room, 4).is_ok());
        }
    }
}
