//! Sprite sheet metadata loading

use crate::EditorError;
use log::{info, warn};
use roomtile_autotile::BitmaskTable;
use roomtile_core::SpriteSheet;
use std::path::Path;

/// Load and validate a sprite sheet JSON file
pub fn load_sprite_sheet(path: &Path) -> Result<SpriteSheet, EditorError> {
    let content = std::fs::read_to_string(path)?;
    let sheet = parse_sprite_sheet(&content)?;
    info!(
        "Loaded {} sprites from {}",
        sheet.len(),
        path.display()
    );
    Ok(sheet)
}

/// Parse a sprite sheet from JSON
///
/// Autotiling sprites whose tables miss legal masks are accepted; each gap
/// is logged once here and again whenever a tile hits it.
pub fn parse_sprite_sheet(json: &str) -> Result<SpriteSheet, EditorError> {
    let sheet = SpriteSheet::from_json_str(json)?;

    if sheet.is_empty() {
        return Err(EditorError::EmptySpriteSheet);
    }

    for (category, data) in sheet.iter().filter(|(_, d)| d.autotiles()) {
        let missing = BitmaskTable::from(data.bitmasks.clone()).missing_masks();
        if !missing.is_empty() {
            warn!(
                "Sprite {category} bitmask table is missing {} of 47 masks: {missing:?}",
                missing.len()
            );
        }
    }

    Ok(sheet)
}
