//! Corridor records and L-shaped corridor carving

use serde::{Deserialize, Serialize};

use super::{Point, Tile, TileGrid};

/// Corridor between two room centers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corridor {
    pub id: usize,
    pub start: Point,
    pub end: Point,
    /// Whether the path bends (both axes change)
    pub is_turning: bool,
}

impl Corridor {
    pub fn new(id: usize, start: Point, end: Point) -> Self {
        Self {
            id,
            start,
            end,
            is_turning: start.x != end.x && start.y != end.y,
        }
    }

    /// Cells on the carved path, in walking order: horizontal leg along the
    /// start row, then vertical leg along the end column, ending at `end`.
    pub fn cells(&self) -> impl Iterator<Item = Point> + use<> {
        let Corridor { start, end, .. } = *self;
        let step_x = if end.x > start.x { 1 } else { -1 };
        let step_y = if end.y > start.y { 1 } else { -1 };
        let horizontal = (0..(end.x - start.x).abs())
            .map(move |i| Point::new(start.x + i * step_x, start.y));
        let vertical =
            (0..(end.y - start.y).abs()).map(move |i| Point::new(end.x, start.y + i * step_y));
        horizontal.chain(vertical).chain(core::iter::once(end))
    }
}

/// Carve an L-shaped corridor from `start` to `end`.
///
/// Only wall cells become corridor; room tiles are never downgraded.
pub fn draw_corridor(grid: &mut TileGrid, start: Point, end: Point) -> usize {
    let mut carved = 0;
    let mut current = start;

    let step_x = if end.x > current.x { 1 } else { -1 };
    while current.x != end.x {
        if grid.replace(current.x, current.y, Tile::Wall, Tile::Corridor) {
            carved += 1;
        }
        current.x += step_x;
    }

    let step_y = if end.y > current.y { 1 } else { -1 };
    while current.y != end.y {
        if grid.replace(current.x, current.y, Tile::Wall, Tile::Corridor) {
            carved += 1;
        }
        current.y += step_y;
    }

    if grid.replace(end.x, end.y, Tile::Wall, Tile::Corridor) {
        carved += 1;
    }
    carved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turning_flag() {
        assert!(Corridor::new(0, Point::new(1, 1), Point::new(5, 4)).is_turning);
        assert!(!Corridor::new(0, Point::new(1, 1), Point::new(5, 1)).is_turning);
        assert!(!Corridor::new(0, Point::new(2, 1), Point::new(2, 8)).is_turning);
    }

    #[test]
    fn test_corridor_json_keys() {
        let corridor = Corridor::new(3, Point::new(1, 2), Point::new(4, 2));
        let json = serde_json::to_string(&corridor).unwrap();
        assert_eq!(
            json,
            r#"{"id":3,"start":{"x":1,"y":2},"end":{"x":4,"y":2},"isTurning":false}"#
        );
    }

    #[test]
    fn test_l_shape() {
        let mut grid = TileGrid::new(10, 10).unwrap();
        let carved = draw_corridor(&mut grid, Point::new(1, 1), Point::new(4, 3));
        // 3 horizontal + 2 vertical + end
        assert_eq!(carved, 6);
        for x in 1..=4 {
            assert_eq!(grid.get(x, 1), Tile::Corridor);
        }
        assert_eq!(grid.get(4, 2), Tile::Corridor);
        assert_eq!(grid.get(4, 3), Tile::Corridor);
        assert_eq!(grid.get(1, 3), Tile::Wall);
    }

    #[test]
    fn test_walks_backwards() {
        let mut grid = TileGrid::new(10, 10).unwrap();
        draw_corridor(&mut grid, Point::new(7, 6), Point::new(2, 2));
        for x in 2..=7 {
            assert_eq!(grid.get(x, 6), Tile::Corridor);
        }
        for y in 2..=6 {
            assert_eq!(grid.get(2, y), Tile::Corridor);
        }
        assert_eq!(grid.count(Tile::Corridor), 10);
    }

    #[test]
    fn test_never_overwrites_rooms() {
        let mut grid = TileGrid::new(12, 6).unwrap();
        grid.fill_rect(1, 1, 3, 3, Tile::Room);
        grid.fill_rect(8, 1, 3, 3, Tile::Room);
        draw_corridor(&mut grid, Point::new(2, 2), Point::new(9, 2));
        assert_eq!(grid.count(Tile::Room), 18);
        for x in 4..8 {
            assert_eq!(grid.get(x, 2), Tile::Corridor);
        }
    }

    #[test]
    fn test_cells_match_carving() {
        let corridor = Corridor::new(0, Point::new(6, 1), Point::new(2, 5));
        let mut grid = TileGrid::new(10, 10).unwrap();
        draw_corridor(&mut grid, corridor.start, corridor.end);
        let cells: Vec<Point> = corridor.cells().collect();
        assert_eq!(cells.first(), Some(&Point::new(6, 1)));
        assert_eq!(cells.last(), Some(&Point::new(2, 5)));
        assert_eq!(cells.len(), grid.count(Tile::Corridor));
        assert!(cells.iter().all(|p| grid.get(p.x, p.y) == Tile::Corridor));
    }

    #[test]
    fn test_degenerate_corridor_marks_single_cell() {
        let mut grid = TileGrid::new(5, 5).unwrap();
        assert_eq!(draw_corridor(&mut grid, Point::new(2, 2), Point::new(2, 2)), 1);
        assert_eq!(grid.get(2, 2), Tile::Corridor);
    }
}
