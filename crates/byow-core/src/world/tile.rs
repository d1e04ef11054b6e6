//! Tile codes and the bounded tile grid

use core::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::WorldError;

/// Tile type. The numeric codes are part of the external snapshot format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Tile {
    Floor = 0,
    #[default]
    Wall = 1,
    Room = 2,
    Corridor = 3,
}

impl Tile {
    /// Numeric tile code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Character used by the text renderer
    pub const fn glyph(self) -> char {
        match self {
            Tile::Floor => ',',
            Tile::Wall => '#',
            Tile::Room => '.',
            Tile::Corridor => '+',
        }
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> Self {
        tile.code()
    }
}

impl TryFrom<u8> for Tile {
    type Error = WorldError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Tile::Floor),
            1 => Ok(Tile::Wall),
            2 => Ok(Tile::Room),
            3 => Ok(Tile::Corridor),
            other => Err(WorldError::InvalidTileCode(other)),
        }
    }
}

/// Row-major grid of tiles with bounds-checked access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Allocate a `width * height` grid filled with walls.
    pub fn new(width: usize, height: usize) -> Result<Self, WorldError> {
        let cells = width
            .checked_mul(height)
            .ok_or(WorldError::AllocationFailure { cells: usize::MAX })?;

        let mut tiles = Vec::new();
        tiles
            .try_reserve_exact(cells)
            .map_err(|_| WorldError::AllocationFailure { cells })?;
        tiles.resize(cells, Tile::Wall);

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a coordinate lies inside the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    /// Tile at `(x, y)`; anything outside the grid reads as a wall.
    pub fn get(&self, x: i32, y: i32) -> Tile {
        self.index(x, y).map_or(Tile::Wall, |i| self.tiles[i])
    }

    /// Set the tile at `(x, y)`; writes outside the grid are ignored.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(i) = self.index(x, y) {
            self.tiles[i] = tile;
        }
    }

    /// Replace the tile at `(x, y)` only if it currently equals `from`.
    pub fn replace(&mut self, x: i32, y: i32, from: Tile, to: Tile) -> bool {
        match self.index(x, y) {
            Some(i) if self.tiles[i] == from => {
                self.tiles[i] = to;
                true
            }
            _ => false,
        }
    }

    /// Fill the rectangle with top-left `(x, y)`, clipped to the grid.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, tile: Tile) {
        for ry in y..y + height {
            for rx in x..x + width {
                self.set(rx, ry, tile);
            }
        }
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width.max(1))
    }

    /// Number of tiles of the given kind
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Grid as nested rows of tiles
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for tile in row {
                write!(f, "{}", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
