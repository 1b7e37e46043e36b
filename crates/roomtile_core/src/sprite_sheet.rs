//! Sprite sheet metadata: per-category frame rectangles and bitmask tables
//!
//! The on-disk form is a JSON object keyed by sprite name:
//!
//! ```json
//! {
//!   "grass_block": {
//!     "frames_list": [{ "x": 0, "y": 0, "w": 18, "h": 18 }],
//!     "bitmasks": { "0": 0, "2": 1 }
//!   }
//! }
//! ```
//!
//! Bitmask keys are neighbor masks (0-255) written as decimal strings, values
//! are indices into `frames_list`. An empty `bitmasks` object marks a sprite
//! that does not autotile.

use crate::category::UnknownCategory;
use crate::TileCategory;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// A sub-rectangle of the sprite sheet image, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Frame {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Frames and bitmask mapping for one sprite
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpriteData {
    pub frames_list: Vec<Frame>,
    /// Neighbor mask -> frame index
    #[serde(default)]
    pub bitmasks: HashMap<u8, usize>,
}

impl SpriteData {
    pub fn new(frames_list: Vec<Frame>) -> Self {
        Self {
            frames_list,
            bitmasks: HashMap::new(),
        }
    }

    pub fn with_bitmasks(mut self, bitmasks: HashMap<u8, usize>) -> Self {
        self.bitmasks = bitmasks;
        self
    }

    /// Whether this sprite selects its frame from neighbors
    pub fn autotiles(&self) -> bool {
        !self.bitmasks.is_empty()
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames_list.get(index)
    }
}

/// Errors from building or validating a sprite sheet
#[derive(Debug, Error)]
pub enum SheetError {
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
    #[error("sprite {0} has no frames")]
    NoFrames(TileCategory),
    #[error("sprite {category} maps mask {mask} to frame {frame}, but only {frame_count} frames exist")]
    FrameOutOfRange {
        category: TileCategory,
        mask: u8,
        frame: usize,
        frame_count: usize,
    },
    #[error("failed to parse sprite sheet JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// All sprites available to the editor, keyed by category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, SpriteData>",
    into = "BTreeMap<String, SpriteData>"
)]
pub struct SpriteSheet {
    sprites: BTreeMap<TileCategory, SpriteData>,
}

impl SpriteSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate sprite sheet JSON
    pub fn from_json_str(json: &str) -> Result<Self, SheetError> {
        let sheet: SpriteSheet = serde_json::from_str(json)?;
        Ok(sheet)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, SheetError> {
        let sheet: SpriteSheet = serde_json::from_slice(bytes)?;
        Ok(sheet)
    }

    pub fn to_json_string(&self) -> Result<String, SheetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add or replace a sprite, validating its bitmask targets
    pub fn insert(&mut self, category: TileCategory, data: SpriteData) -> Result<(), SheetError> {
        validate_sprite(category, &data)?;
        self.sprites.insert(category, data);
        Ok(())
    }

    pub fn get(&self, category: TileCategory) -> Option<&SpriteData> {
        self.sprites.get(&category)
    }

    /// Categories present in the sheet, in stable enum order
    pub fn categories(&self) -> Vec<TileCategory> {
        self.sprites.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileCategory, &SpriteData)> {
        self.sprites.iter().map(|(c, d)| (*c, d))
    }

    /// Check every sprite's bitmask entries point at real frames
    pub fn validate(&self) -> Result<(), SheetError> {
        for (category, data) in self.iter() {
            validate_sprite(category, data)?;
        }
        Ok(())
    }
}

fn validate_sprite(category: TileCategory, data: &SpriteData) -> Result<(), SheetError> {
    if data.frames_list.is_empty() {
        return Err(SheetError::NoFrames(category));
    }
    let frame_count = data.frames_list.len();
    // Sorted so the reported entry is deterministic
    let mut entries: Vec<_> = data.bitmasks.iter().collect();
    entries.sort();
    for (&mask, &frame) in entries {
        if frame >= frame_count {
            return Err(SheetError::FrameOutOfRange {
                category,
                mask,
                frame,
                frame_count,
            });
        }
    }
    Ok(())
}

impl TryFrom<BTreeMap<String, SpriteData>> for SpriteSheet {
    type Error = SheetError;

    fn try_from(raw: BTreeMap<String, SpriteData>) -> Result<Self, Self::Error> {
        let mut sheet = SpriteSheet::new();
        for (name, data) in raw {
            let category: TileCategory = name.parse()?;
            sheet.insert(category, data)?;
        }
        Ok(sheet)
    }
}

impl From<SpriteSheet> for BTreeMap<String, SpriteData> {
    fn from(sheet: SpriteSheet) -> Self {
        sheet
            .sprites
            .into_iter()
            .map(|(c, d)| (c.name().to_string(), d))
            .collect()
    }
}
