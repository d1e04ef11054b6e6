//! Union-find over room ids, with path compression and union by rank.
//!
//! The backing store has a fixed capacity. `init` always resets every slot,
//! not just the first `count`, so a structure reused across connection passes
//! never reads stale parents.

/// Disjoint-set forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    /// Number of distinct sets among the active elements
    count: usize,
}

impl DisjointSet {
    /// Create a forest with `capacity` slots, all active
    pub fn new(capacity: usize) -> Self {
        Self {
            parent: (0..capacity).collect(),
            rank: vec![0; capacity],
            count: capacity,
        }
    }

    /// Reset every slot to its own root with rank 0 and track `count` sets.
    pub fn init(&mut self, count: usize) {
        for (i, parent) in self.parent.iter_mut().enumerate() {
            *parent = i;
        }
        self.rank.fill(0);
        self.count = count.min(self.capacity());
    }

    pub fn capacity(&self) -> usize {
        self.parent.len()
    }

    /// Number of distinct sets left
    pub fn set_count(&self) -> usize {
        self.count
    }

    /// Root of `x`, compressing the walked path. `None` if `x` is out of range.
    pub fn find(&mut self, x: usize) -> Option<usize> {
        let root = self.root(x)?;

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Some(root)
    }

    /// Root of `x` without modifying the forest
    pub fn root(&self, x: usize) -> Option<usize> {
        if x >= self.capacity() {
            return None;
        }
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        Some(root)
    }

    /// Merge the sets of `x` and `y`. Returns true if a merge happened.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (Some(root_x), Some(root_y)) = (self.find(x), self.find(y)) else {
            return false;
        };
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            core::cmp::Ordering::Less => self.parent[root_x] = root_y,
            core::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            core::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] = self.rank[root_x].saturating_add(1);
            }
        }

        self.count = self.count.saturating_sub(1);
        true
    }

    /// Check if two elements share a set; false if either is out of range
    pub fn connected(&self, x: usize, y: usize) -> bool {
        match (self.root(x), self.root(y)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
