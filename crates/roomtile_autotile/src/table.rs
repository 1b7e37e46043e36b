//! Authored mask -> frame tables and the provider trait the resolver reads

use crate::bitmask::legal_masks;
use crate::AutotileError;
use roomtile_core::{SpriteSheet, TileCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from neighbor mask to frame variant for one category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitmaskTable {
    entries: HashMap<u8, usize>,
}

impl BitmaskTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard 47-tile blob mapping: legal masks in ascending order map to
    /// consecutive frames starting at `first_frame`
    pub fn blob_47(first_frame: usize) -> Self {
        let entries = legal_masks()
            .into_iter()
            .enumerate()
            .map(|(i, mask)| (mask, first_frame + i))
            .collect();
        Self { entries }
    }

    pub fn insert(&mut self, mask: u8, frame_variant: usize) -> Option<usize> {
        self.entries.insert(mask, frame_variant)
    }

    pub fn lookup(&self, mask: u8) -> Option<usize> {
        self.entries.get(&mask).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Legal masks with no authored frame
    pub fn missing_masks(&self) -> Vec<u8> {
        legal_masks()
            .into_iter()
            .filter(|m| !self.entries.contains_key(m))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_masks().is_empty()
    }
}

impl From<HashMap<u8, usize>> for BitmaskTable {
    fn from(entries: HashMap<u8, usize>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(u8, usize)> for BitmaskTable {
    fn from_iter<I: IntoIterator<Item = (u8, usize)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Source of bitmask tables, keyed by category
///
/// A category whose table is absent or empty does not autotile.
pub trait BitmaskProvider {
    fn has_table(&self, category: TileCategory) -> bool;

    fn lookup(&self, category: TileCategory, mask: u8) -> Option<usize>;
}

/// Owned set of tables for every autotiling category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BitmaskTables {
    tables: HashMap<TileCategory, BitmaskTable>,
}

impl BitmaskTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the non-empty bitmask tables out of a sprite sheet
    pub fn from_sprite_sheet(sheet: &SpriteSheet) -> Self {
        let tables = sheet
            .iter()
            .filter(|(_, data)| data.autotiles())
            .map(|(category, data)| (category, BitmaskTable::from(data.bitmasks.clone())))
            .collect();
        Self { tables }
    }

    pub fn insert(&mut self, category: TileCategory, table: BitmaskTable) {
        self.tables.insert(category, table);
    }

    pub fn with_table(mut self, category: TileCategory, table: BitmaskTable) -> Self {
        self.insert(category, table);
        self
    }

    pub fn get(&self, category: TileCategory) -> Option<&BitmaskTable> {
        self.tables.get(&category)
    }

    /// Fail on the first category (in enum order) whose table misses a legal mask
    pub fn validate_complete(&self) -> Result<(), AutotileError> {
        let mut categories: Vec<_> = self.tables.keys().copied().collect();
        categories.sort();
        for category in categories {
            let Some(table) = self.tables.get(&category) else {
                continue;
            };
            if table.is_empty() {
                continue;
            }
            let missing = table.missing_masks();
            if !missing.is_empty() {
                return Err(AutotileError::IncompleteTable { category, missing });
            }
        }
        Ok(())
    }
}

impl BitmaskProvider for BitmaskTables {
    fn has_table(&self, category: TileCategory) -> bool {
        self.tables.get(&category).is_some_and(|t| !t.is_empty())
    }

    fn lookup(&self, category: TileCategory, mask: u8) -> Option<usize> {
        self.tables.get(&category)?.lookup(mask)
    }
}

impl BitmaskProvider for SpriteSheet {
    fn has_table(&self, category: TileCategory) -> bool {
        self.get(category).is_some_and(|s| s.autotiles())
    }

    fn lookup(&self, category: TileCategory, mask: u8) -> Option<usize> {
        self.get(category)?.bitmasks.get(&mask).copied()
    }
}
