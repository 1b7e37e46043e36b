//! Editor settings loaded from TOML
//!
//! Every field has a default, so an empty file (or no file) yields the
//! stock 24×16-tile rooms at 18px per tile.

use crate::EditorError;
use roomtile_core::{DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings that shape the world and where sprite data comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Tile edge length in pixels
    pub tile_size: u32,
    /// Room width in tiles
    pub room_width: u32,
    /// Room height in tiles
    pub room_height: u32,
    /// Rooms per row when laying a layer out
    pub rooms_wide: u32,
    pub rooms_per_layer: usize,
    pub layers: usize,
    /// Path to the sprite sheet JSON metadata
    pub sprite_sheet: PathBuf,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tile_size: 18,
            room_width: DEFAULT_ROOM_WIDTH,
            room_height: DEFAULT_ROOM_HEIGHT,
            rooms_wide: 3,
            rooms_per_layer: 9,
            layers: 3,
            sprite_sheet: PathBuf::from("data/sprite_sheet.json"),
        }
    }
}

impl EditorSettings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, EditorError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, EditorError> {
        let settings: EditorSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings as TOML
    pub fn save(&self, path: &Path) -> Result<(), EditorError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the session cannot build a world from
    pub(crate) fn validate(&self) -> Result<(), EditorError> {
        if self.tile_size == 0 || i32::try_from(self.tile_size).is_err() {
            return Err(EditorError::InvalidSettings(format!(
                "tile_size must be between 1 and {}",
                i32::MAX
            )));
        }
        if self.room_width == 0 || self.room_height == 0 {
            return Err(EditorError::InvalidSettings(
                "rooms need at least one tile in each direction".to_string(),
            ));
        }
        if self.room_width.checked_mul(self.room_height).is_none() {
            return Err(EditorError::InvalidSettings(format!(
                "room of {}x{} tiles is too large",
                self.room_width, self.room_height
            )));
        }
        if self.layers == 0 || self.rooms_per_layer == 0 {
            return Err(EditorError::InvalidSettings(
                "the world needs at least one layer and one room".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let settings = EditorSettings::from_toml_str("").unwrap();
        assert_eq!(settings, EditorSettings::default());
        assert_eq!(settings.tile_size, 18);
        assert_eq!((settings.room_width, settings.room_height), (24, 16));
    }

    #[test]
    fn test_partial_toml_overrides() {
        let settings = EditorSettings::from_toml_str(
            r#"
tile_size = 16
layers = 1
sprite_sheet = "assets/tiles.json"
"#,
        )
        .unwrap();

        assert_eq!(settings.tile_size, 16);
        assert_eq!(settings.layers, 1);
        assert_eq!(settings.sprite_sheet, PathBuf::from("assets/tiles.json"));
        assert_eq!(settings.room_width, 24);
    }

    #[test]
    fn test_zero_tile_size_rejected() {
        assert!(matches!(
            EditorSettings::from_toml_str("tile_size = 0"),
            Err(EditorError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_degenerate_world_rejected() {
        for content in [
            "room_width = 0",
            "room_height = 0",
            "layers = 0",
            "rooms_per_layer = 0",
            "tile_size = 4294967295",
            "room_width = 65536\nroom_height = 65536",
        ] {
            assert!(
                matches!(
                    EditorSettings::from_toml_str(content),
                    Err(EditorError::InvalidSettings(_))
                ),
                "accepted {content:?}"
            );
        }
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        assert!(matches!(
            EditorSettings::from_toml_str("tile_size = \"big\""),
            Err(EditorError::Toml(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("editor.toml");

        let settings = EditorSettings {
            rooms_wide: 4,
            ..EditorSettings::default()
        };
        settings.save(&path).unwrap();

        assert_eq!(EditorSettings::load(&path).unwrap(), settings);
    }
}
