//! Room adjacency graph and breadth-first pathfinding.
//!
//! Neighbors are visited most-recently-connected first. Path *lengths* are
//! always shortest; which of several equal-length paths is returned depends on
//! the order corridors were added.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Undirected adjacency lists indexed by room id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomGraph {
    adjacency: Vec<Vec<usize>>,
}

/// Result of a path query: room ids from start to end inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPath {
    pub path: Vec<usize>,
    pub length: usize,
}

impl RoomPath {
    pub fn new(path: Vec<usize>) -> Self {
        let length = path.len();
        Self { path, length }
    }
}

impl RoomGraph {
    /// Empty graph over `room_count` rooms
    pub fn new(room_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); room_count],
        }
    }

    /// Drop every edge and resize to `room_count` rooms
    pub fn reset(&mut self, room_count: usize) {
        self.adjacency.clear();
        self.adjacency.resize(room_count, Vec::new());
    }

    /// Number of rooms the graph covers
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Record an undirected edge. Ids beyond the graph grow it.
    pub fn connect(&mut self, a: usize, b: usize) {
        let needed = a.max(b) + 1;
        if self.adjacency.len() < needed {
            self.adjacency.resize(needed, Vec::new());
        }
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    /// Neighbors of `room`, most recently connected first
    pub fn neighbors(&self, room: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .get(room)
            .into_iter()
            .flat_map(|list| list.iter().rev().copied())
    }

    pub fn degree(&self, room: usize) -> usize {
        self.adjacency.get(room).map_or(0, Vec::len)
    }

    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.adjacency.get(a).is_some_and(|list| list.contains(&b))
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Breadth-first search from `start` to `end`, skipping rooms for which
    /// `passable` is false. Returns the room ids along the path, both ends
    /// included, or `None` if `end` is unreachable.
    pub fn shortest_path(
        &self,
        start: usize,
        end: usize,
        passable: impl Fn(usize) -> bool,
    ) -> Option<Vec<usize>> {
        if start >= self.len() || end >= self.len() {
            return None;
        }
        if start == end {
            return Some(vec![start]);
        }

        let mut visited = vec![false; self.len()];
        let mut parent: Vec<Option<usize>> = vec![None; self.len()];
        let mut queue = VecDeque::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == end {
                let mut path = vec![end];
                let mut node = end;
                while let Some(prev) = parent[node] {
                    path.push(prev);
                    node = prev;
                }
                path.reverse();
                return Some(path);
            }

            for next in self.neighbors(current) {
                if !visited[next] && passable(next) {
                    visited[next] = true;
                    parent[next] = Some(current);
                    queue.push_back(next);
                }
            }
        }

        None
    }
}
