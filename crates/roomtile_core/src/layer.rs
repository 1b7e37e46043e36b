//! Rooms (bounded tile grids) and the layers that group them

use crate::{Coordinate, GridError, PlacedTile, TileGrid};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default room width in tiles
pub const DEFAULT_ROOM_WIDTH: u32 = 24;
/// Default room height in tiles
pub const DEFAULT_ROOM_HEIGHT: u32 = 16;

/// A fixed-size tile grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Row-major tile storage - None means empty
    tiles: Vec<Option<PlacedTile>>,
}

impl Room {
    /// Create a new empty room
    pub fn new(name: String, width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            id: Uuid::new_v4(),
            name,
            width,
            height,
            tiles: vec![None; size],
        }
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y as usize * self.width as usize + coord.x as usize)
        } else {
            None
        }
    }

    /// Iterate over every placed tile
    pub fn tiles(&self) -> impl Iterator<Item = &PlacedTile> {
        self.tiles.iter().flatten()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    pub fn clear(&mut self) {
        self.tiles.iter_mut().for_each(|t| *t = None);
    }
}

impl TileGrid for Room {
    fn get(&self, coord: Coordinate) -> Option<&PlacedTile> {
        self.index(coord).and_then(|i| self.tiles[i].as_ref())
    }

    fn get_mut(&mut self, coord: Coordinate) -> Option<&mut PlacedTile> {
        let i = self.index(coord)?;
        self.tiles[i].as_mut()
    }

    fn place(&mut self, tile: PlacedTile) -> Result<(), GridError> {
        let i = self
            .index(tile.position)
            .ok_or(GridError::OutOfBounds(tile.position))?;
        if self.tiles[i].is_some() {
            return Err(GridError::Occupied(tile.position));
        }
        self.tiles[i] = Some(tile);
        Ok(())
    }

    fn remove(&mut self, coord: Coordinate) -> Option<PlacedTile> {
        let i = self.index(coord)?;
        self.tiles[i].take()
    }
}

/// A drawing layer holding a block of rooms laid out `rooms_wide` per row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub id: Uuid,
    pub name: String,
    pub visible: bool,
    pub rooms_wide: u32,
    pub rooms: Vec<Room>,
}

impl Layer {
    /// Create a layer of `room_count` empty rooms
    pub fn new(
        name: String,
        rooms_wide: u32,
        room_count: usize,
        room_width: u32,
        room_height: u32,
    ) -> Self {
        let rooms = (0..room_count)
            .map(|i| Room::new(format!("room {i}"), room_width, room_height))
            .collect();
        Self {
            id: Uuid::new_v4(),
            name,
            visible: true,
            rooms_wide: rooms_wide.max(1),
            rooms,
        }
    }

    /// Column and row of a room in room units
    ///
    /// Returns `None` for an index past the layer's rooms.
    pub fn room_origin(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.rooms.len() {
            return None;
        }
        let i = u32::try_from(index).ok()?;
        Some((i % self.rooms_wide, i / self.rooms_wide))
    }

    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    pub fn room_mut(&mut self, index: usize) -> Option<&mut Room> {
        self.rooms.get_mut(index)
    }
}
