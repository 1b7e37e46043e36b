//! Placed tiles and the grid abstraction the autotiler works against

use crate::{Coordinate, TileCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A tile sitting in one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub position: Coordinate,
    pub category: TileCategory,
    /// Index into the category's frame list
    pub frame_variant: usize,
}

impl PlacedTile {
    pub fn new(position: Coordinate, category: TileCategory) -> Self {
        Self {
            position,
            category,
            frame_variant: 0,
        }
    }

    pub fn with_frame(mut self, frame_variant: usize) -> Self {
        self.frame_variant = frame_variant;
        self
    }
}

/// Errors from grid mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell {0} is already occupied")]
    Occupied(Coordinate),
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Coordinate),
}

/// Storage mapping coordinates to placed tiles
///
/// Cells that cannot hold a tile (outside a bounded grid) read as empty.
pub trait TileGrid {
    fn get(&self, coord: Coordinate) -> Option<&PlacedTile>;

    fn get_mut(&mut self, coord: Coordinate) -> Option<&mut PlacedTile>;

    /// Put a tile at `tile.position`; occupied cells are rejected
    fn place(&mut self, tile: PlacedTile) -> Result<(), GridError>;

    /// Take the tile out of `coord`, if any
    fn remove(&mut self, coord: Coordinate) -> Option<PlacedTile>;

    fn is_occupied(&self, coord: Coordinate) -> bool {
        self.get(coord).is_some()
    }
}

/// Unbounded grid keyed by coordinate
impl TileGrid for HashMap<Coordinate, PlacedTile> {
    fn get(&self, coord: Coordinate) -> Option<&PlacedTile> {
        HashMap::get(self, &coord)
    }

    fn get_mut(&mut self, coord: Coordinate) -> Option<&mut PlacedTile> {
        HashMap::get_mut(self, &coord)
    }

    fn place(&mut self, tile: PlacedTile) -> Result<(), GridError> {
        if self.contains_key(&tile.position) {
            return Err(GridError::Occupied(tile.position));
        }
        self.insert(tile.position, tile);
        Ok(())
    }

    fn remove(&mut self, coord: Coordinate) -> Option<PlacedTile> {
        HashMap::remove(self, &coord)
    }
}
