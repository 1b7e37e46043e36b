//! roomtile_editor - Headless room editor with bitmask autotiling
//!
//! This crate provides the editing model behind a tile room editor:
//! - Editor settings (TOML) describing tile size and world layout
//! - Sprite sheet metadata loading (JSON frames + bitmask tables)
//! - An `EditorSession` with a sprite brush, layer/room selection, and
//!   place/erase operations that keep every tile's frame autotiled
//!
//! Rendering, input devices and windowing are left to the embedding
//! application; it feeds pixel or tile positions into the session.
//!
//! # Usage
//!
//! ```rust,ignore
//! use roomtile_editor::{EditorSession, EditorSettings};
//! use std::path::Path;
//!
//! let settings = EditorSettings::load(Path::new("editor.toml"))?;
//! let mut session = EditorSession::from_settings(settings)?;
//!
//! session.place_at_pixel(40, 72)?;
//! session.erase_at_pixel(40, 72)?;
//! ```

pub mod loader;
pub mod session;
pub mod settings;

// Re-export core types from roomtile_* crates
pub use roomtile_autotile;
pub use roomtile_core;

pub use loader::{load_sprite_sheet, parse_sprite_sheet};
pub use session::EditorSession;
pub use settings::EditorSettings;

use roomtile_autotile::AutotileError;
use roomtile_core::{GridError, SheetError};
use thiserror::Error;

/// Errors surfaced by the editor
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to write settings: {0}")]
    TomlWrite(#[from] toml::ser::Error),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("sprite sheet error: {0}")]
    Sheet(#[from] SheetError),
    #[error("sprite sheet has no sprites")]
    EmptySpriteSheet,
    #[error("no room {room} on layer {layer}")]
    RoomNotFound { layer: usize, room: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Autotile(#[from] AutotileError),
}
