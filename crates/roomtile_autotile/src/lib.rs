//! Bitmask autotiling for roomtile
//!
//! This crate picks the frame variant of a placed tile from which of its 8
//! neighbors hold a connectable tile, and keeps the neighbors consistent
//! after every placement or removal.
//!
//! # Features
//! - 8-bit neighbor masks with edge-gated corners (47-tile blob layout)
//! - Authored mask -> frame tables per tile category
//! - Depth-capped propagation: one grid mutation re-resolves at most 9 tiles
//!
//! # Example
//!
//! ```rust,ignore
//! use roomtile_autotile::{AutotileResolver, BitmaskTable, BitmaskTables};
//! use roomtile_core::{Coordinate, PlacedTile, Room, TileCategory, TileGrid};
//!
//! let tables = BitmaskTables::new().with_table(TileCategory::Grass, BitmaskTable::blob_47(0));
//! let mut room = Room::new("Start".to_string(), 24, 16);
//!
//! let at = Coordinate::new(3, 4);
//! room.place(PlacedTile::new(at, TileCategory::Grass))?;
//! let report = AutotileResolver::new(&tables).resolve(&mut room, at)?;
//! ```

pub mod bitmask;
pub mod resolver;
pub mod table;

use roomtile_core::{Coordinate, TileCategory};
use thiserror::Error;

pub use bitmask::{calculate_mask, gate_diagonals, is_legal_mask, legal_masks, neighbors};
pub use resolver::{AutotileResolver, Depth, IncompleteEntry, ResolveReport, TileUpdate};
pub use table::{BitmaskProvider, BitmaskTable, BitmaskTables};

// Re-export roomtile_core
pub use roomtile_core;

/// Errors raised by the autotiler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutotileError {
    /// Resolve was asked about a cell in the wrong state: an empty cell for
    /// `resolve`, an occupied one for `resolve_vacated`
    #[error("no valid tile state at {0} for this resolve call")]
    InvalidCoordinate(Coordinate),
    #[error("bitmask table for {category} is missing {} legal masks", missing.len())]
    IncompleteTable {
        category: TileCategory,
        missing: Vec<u8>,
    },
}
