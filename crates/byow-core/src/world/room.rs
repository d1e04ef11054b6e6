//! Rooms and grid coordinates

use serde::{Deserialize, Serialize};

use crate::OverlapPolicy;

/// Grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangular room
///
/// Rooms are never removed from a world's room list; retiring one clears
/// `exists` so ids stay dense and stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Dense 0-based id, equal to the room's index in the world
    pub id: usize,
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub exists: bool,
}

impl Room {
    /// Create an existing room
    pub fn new(id: usize, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            exists: true,
        }
    }

    /// Center cell (integer division)
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if the point is inside the room
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Check if this room collides with another under the given policy
    pub fn overlaps(&self, other: &Room, policy: OverlapPolicy) -> bool {
        match policy {
            // Rectangles separated by less than one full cell collide.
            OverlapPolicy::Inclusive => !(self.x + self.width < other.x
                || other.x + other.width < self.x
                || self.y + self.height < other.y
                || other.y + other.height < self.y),
            OverlapPolicy::AllowTouching => !(self.x + self.width <= other.x
                || other.x + other.width <= self.x
                || self.y + self.height <= other.y
                || other.y + other.height <= self.y),
        }
    }

    /// Center-to-center Euclidean distance, truncated
    pub fn distance(&self, other: &Room) -> i32 {
        let a = self.center();
        let b = other.center();
        let dx = f64::from(a.x - b.x);
        let dy = f64::from(a.y - b.y);
        (dx * dx + dy * dy).sqrt() as i32
    }

    /// Whether the room lies strictly inside a `width x height` grid,
    /// never touching the outermost ring of cells
    pub fn fits_inside(&self, width: usize, height: usize) -> bool {
        self.x >= 1
            && self.y >= 1
            && i64::from(self.x) + i64::from(self.width) <= width as i64 - 1
            && i64::from(self.y) + i64::from(self.height) <= height as i64 - 1
    }

    /// Interior cell count
    pub fn area(&self) -> i32 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        assert_eq!(Room::new(0, 2, 3, 5, 4).center(), Point::new(4, 5));
        assert_eq!(Room::new(0, 1, 1, 3, 3).center(), Point::new(2, 2));
    }

    #[test]
    fn test_contains() {
        let room = Room::new(0, 2, 2, 3, 3);
        assert!(room.contains(2, 2));
        assert!(room.contains(4, 4));
        assert!(!room.contains(5, 4));
        assert!(!room.contains(1, 3));
    }

    #[test]
    fn test_touching_rooms_overlap_inclusively() {
        // a covers x 1..=3, b starts at x 4
        let a = Room::new(0, 1, 1, 3, 3);
        let b = Room::new(1, 4, 1, 3, 3);
        assert!(a.overlaps(&b, OverlapPolicy::Inclusive));
        assert!(!a.overlaps(&b, OverlapPolicy::AllowTouching));
    }

    #[test]
    fn test_one_cell_gap_is_accepted() {
        let a = Room::new(0, 1, 1, 3, 3);
        let b = Room::new(1, 5, 1, 3, 3);
        assert!(!a.overlaps(&b, OverlapPolicy::Inclusive));
        assert!(!b.overlaps(&a, OverlapPolicy::Inclusive));
    }

    #[test]
    fn test_shared_cells_always_overlap() {
        let a = Room::new(0, 1, 1, 4, 4);
        let b = Room::new(1, 3, 3, 4, 4);
        assert!(a.overlaps(&b, OverlapPolicy::Inclusive));
        assert!(a.overlaps(&b, OverlapPolicy::AllowTouching));
    }

    #[test]
    fn test_distance_truncates() {
        let a = Room::new(0, 0, 0, 1, 1);
        let b = Room::new(1, 3, 4, 1, 1);
        assert_eq!(a.distance(&b), 5);
        let c = Room::new(2, 1, 1, 1, 1);
        // sqrt(2) truncates to 1
        assert_eq!(a.distance(&c), 1);
    }

    #[test]
    fn test_fits_inside() {
        assert!(Room::new(0, 1, 1, 3, 3).fits_inside(5, 5));
        assert!(!Room::new(0, 1, 1, 4, 3).fits_inside(5, 5));
        assert!(!Room::new(0, 0, 1, 3, 3).fits_inside(10, 10));
        assert!(!Room::new(0, 1, 1, i32::MAX, 3).fits_inside(100, 100));
        assert!(!Room::new(0, i32::MAX, i32::MAX, i32::MAX, i32::MAX).fits_inside(100, 100));
    }
}
