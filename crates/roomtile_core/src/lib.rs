//! Core data structures for roomtile
//!
//! This crate provides the fundamental types for tile-based rooms:
//! - `Coordinate` / `Direction` - Cell addressing and the 8 neighbor directions
//! - `TileCategory` - Terrain kinds and which of them visually connect
//! - `PlacedTile` / `TileGrid` - Tiles in cells and the grid abstraction over them
//! - `Room` / `Layer` / `World` - Bounded grids grouped into layers
//! - `SpriteSheet` - Frame rectangles and authored bitmask tables per category

mod category;
mod coord;
mod grid;
mod layer;
mod sprite_sheet;
mod world;

pub use category::{TileCategory, UnknownCategory};
pub use coord::{Coordinate, Direction};
pub use grid::{GridError, PlacedTile, TileGrid};
pub use layer::{Layer, Room, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH};
pub use sprite_sheet::{Frame, SheetError, SpriteData, SpriteSheet};
pub use world::World;
