//! Tile categories and the connectability rule

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// What kind of terrain a tile is
///
/// Serialized by the sprite name used in sprite sheet data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TileCategory {
    #[serde(rename = "grass_block")]
    Grass,
    #[serde(rename = "dirt_block")]
    Dirt,
    #[serde(rename = "snow_block")]
    Snow,
    #[serde(rename = "stone_block")]
    Stone,
    #[serde(rename = "brick_block")]
    Brick,
    #[serde(rename = "wood_block")]
    Wood,
    #[serde(rename = "decoration")]
    Decoration,
}

impl TileCategory {
    pub const ALL: [TileCategory; 7] = [
        TileCategory::Grass,
        TileCategory::Dirt,
        TileCategory::Snow,
        TileCategory::Stone,
        TileCategory::Brick,
        TileCategory::Wood,
        TileCategory::Decoration,
    ];

    /// Sprite name for this category
    pub const fn name(self) -> &'static str {
        match self {
            TileCategory::Grass => "grass_block",
            TileCategory::Dirt => "dirt_block",
            TileCategory::Snow => "snow_block",
            TileCategory::Stone => "stone_block",
            TileCategory::Brick => "brick_block",
            TileCategory::Wood => "wood_block",
            TileCategory::Decoration => "decoration",
        }
    }

    /// Ground tiles all bridge to each other
    pub const fn is_ground(self) -> bool {
        match self {
            TileCategory::Grass | TileCategory::Dirt | TileCategory::Snow => true,
            TileCategory::Stone
            | TileCategory::Brick
            | TileCategory::Wood
            | TileCategory::Decoration => false,
        }
    }

    /// Whether a tile of this category visually joins a tile of `other`
    ///
    /// Any two ground categories connect; everything else connects only to
    /// its own category. The relation is symmetric.
    pub fn connects_to(self, other: TileCategory) -> bool {
        if self.is_ground() && other.is_ground() {
            return true;
        }
        self == other
    }
}

impl fmt::Display for TileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tile category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for TileCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TileCategory::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_categories_bridge() {
        assert!(TileCategory::Grass.connects_to(TileCategory::Snow));
        assert!(TileCategory::Dirt.connects_to(TileCategory::Grass));
        assert!(TileCategory::Snow.connects_to(TileCategory::Snow));
    }

    #[test]
    fn test_non_ground_requires_exact_match() {
        assert!(TileCategory::Brick.connects_to(TileCategory::Brick));
        assert!(!TileCategory::Brick.connects_to(TileCategory::Stone));
        assert!(!TileCategory::Grass.connects_to(TileCategory::Decoration));
        assert!(!TileCategory::Decoration.connects_to(TileCategory::Grass));
    }

    #[test]
    fn test_connectability_is_symmetric() {
        for a in TileCategory::ALL {
            for b in TileCategory::ALL {
                assert_eq!(a.connects_to(b), b.connects_to(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_name_round_trip() {
        for c in TileCategory::ALL {
            assert_eq!(c.name().parse::<TileCategory>(), Ok(c));
        }
        assert!("lava_block".parse::<TileCategory>().is_err());
    }

    #[test]
    fn test_serde_uses_sprite_names() {
        let json = serde_json::to_string(&TileCategory::Snow).unwrap();
        assert_eq!(json, "\"snow_block\"");
        let back: TileCategory = serde_json::from_str("\"wood_block\"").unwrap();
        assert_eq!(back, TileCategory::Wood);
    }
}
