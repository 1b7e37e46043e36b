//! Headless editing session: brush, layer/room selection and autotiled edits

use crate::loader::load_sprite_sheet;
use crate::settings::EditorSettings;
use crate::EditorError;
use log::{debug, warn};
use roomtile_autotile::{AutotileResolver, BitmaskProvider, ResolveReport};
use roomtile_core::{Coordinate, PlacedTile, Room, SpriteSheet, TileCategory, TileGrid, World};

/// Editor state between input events
///
/// Every edit goes through [`place`](Self::place) or [`erase`](Self::erase),
/// which mutate exactly one cell and then run the autotiler, so frame
/// variants are consistent whenever control returns to the caller.
#[derive(Debug, Clone)]
pub struct EditorSession {
    settings: EditorSettings,
    sheet: SpriteSheet,
    /// Brush cycle order
    categories: Vec<TileCategory>,
    world: World,
    sprite_index: usize,
    frame_index: usize,
    layer_index: usize,
    room_index: usize,
}

impl EditorSession {
    pub fn new(settings: EditorSettings, sheet: SpriteSheet) -> Result<Self, EditorError> {
        settings.validate()?;
        if sheet.is_empty() {
            return Err(EditorError::EmptySpriteSheet);
        }
        let world = World::new(
            settings.layers,
            settings.rooms_wide,
            settings.rooms_per_layer,
            settings.room_width,
            settings.room_height,
        );
        Ok(Self {
            categories: sheet.categories(),
            settings,
            sheet,
            world,
            sprite_index: 0,
            frame_index: 0,
            layer_index: 0,
            room_index: 0,
        })
    }

    /// Build a session, loading the sprite sheet named in `settings`
    pub fn from_settings(settings: EditorSettings) -> Result<Self, EditorError> {
        let sheet = load_sprite_sheet(&settings.sprite_sheet)?;
        Self::new(settings, sheet)
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn sprite_sheet(&self) -> &SpriteSheet {
        &self.sheet
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    // Brush

    /// Category the brush currently places
    pub fn brush(&self) -> TileCategory {
        self.categories[self.sprite_index]
    }

    /// Frame a freshly placed tile starts on before autotiling
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    fn frame_count(&self) -> usize {
        self.sheet
            .get(self.brush())
            .map(|s| s.frames_list.len())
            .unwrap_or(0)
    }

    /// Select a sprite by its position in the brush cycle; resets the frame
    pub fn select_sprite(&mut self, index: usize) -> bool {
        if index >= self.categories.len() {
            return false;
        }
        self.sprite_index = index;
        self.frame_index = 0;
        true
    }

    pub fn next_sprite(&mut self) -> bool {
        self.select_sprite(self.sprite_index + 1)
    }

    pub fn prev_sprite(&mut self) -> bool {
        match self.sprite_index.checked_sub(1) {
            Some(i) => self.select_sprite(i),
            None => false,
        }
    }

    pub fn next_frame(&mut self) -> bool {
        if self.frame_index + 1 < self.frame_count() {
            self.frame_index += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_frame(&mut self) -> bool {
        if self.frame_index > 0 {
            self.frame_index -= 1;
            true
        } else {
            false
        }
    }

    // Layer / room selection

    pub fn layer_index(&self) -> usize {
        self.layer_index
    }

    pub fn room_index(&self) -> usize {
        self.room_index
    }

    /// Switch layers, keeping the room index; out-of-range is ignored
    pub fn select_layer(&mut self, index: usize) -> bool {
        if index >= self.world.layers.len() {
            return false;
        }
        self.layer_index = index;
        true
    }

    /// Switch rooms within the current layer; out-of-range is ignored
    pub fn select_room(&mut self, index: usize) -> bool {
        let room_count = self
            .world
            .layers
            .get(self.layer_index)
            .map(|l| l.rooms.len())
            .unwrap_or(0);
        if index >= room_count {
            return false;
        }
        self.room_index = index;
        true
    }

    /// Column and row of the current room within its layer
    pub fn room_origin(&self) -> Result<(u32, u32), EditorError> {
        self.world
            .layers
            .get(self.layer_index)
            .and_then(|l| l.room_origin(self.room_index))
            .ok_or(EditorError::RoomNotFound {
                layer: self.layer_index,
                room: self.room_index,
            })
    }

    pub fn room(&self) -> Result<&Room, EditorError> {
        self.world
            .room(self.layer_index, self.room_index)
            .ok_or(EditorError::RoomNotFound {
                layer: self.layer_index,
                room: self.room_index,
            })
    }

    /// Tile coordinate under a pixel position in room space
    pub fn world_to_tile(&self, px: i32, py: i32) -> Coordinate {
        let size = self.settings.tile_size as i32;
        Coordinate::new(px.div_euclid(size), py.div_euclid(size))
    }

    // Editing

    /// Place a tile of the brush category at `coord` and autotile around it
    ///
    /// Returns `None` when nothing was placed (occupied or off-room cell).
    pub fn place(&mut self, coord: Coordinate) -> Result<Option<ResolveReport>, EditorError> {
        let category = self.brush();
        let frame = self.frame_index;
        let (layer, room_index) = (self.layer_index, self.room_index);

        let room = self
            .world
            .room_mut(layer, room_index)
            .ok_or(EditorError::RoomNotFound {
                layer,
                room: room_index,
            })?;

        if !room.contains(coord) {
            warn!("Dropped placement of {category} at {coord}: outside the room");
            return Ok(None);
        }
        if room.is_occupied(coord) {
            debug!("Cell {coord} already occupied");
            return Ok(None);
        }

        room.place(PlacedTile::new(coord, category).with_frame(frame))?;

        if !self.sheet.has_table(category) {
            return Ok(Some(ResolveReport::default()));
        }

        let report = AutotileResolver::new(&self.sheet).resolve(room, coord)?;
        Ok(Some(report))
    }

    /// Remove the tile at `coord` and autotile its former neighbors
    ///
    /// Returns `None` when the cell was already empty.
    pub fn erase(&mut self, coord: Coordinate) -> Result<Option<ResolveReport>, EditorError> {
        let (layer, room_index) = (self.layer_index, self.room_index);
        let room = self
            .world
            .room_mut(layer, room_index)
            .ok_or(EditorError::RoomNotFound {
                layer,
                room: room_index,
            })?;

        let Some(removed) = room.remove(coord) else {
            return Ok(None);
        };
        debug!("Erased {} at {coord}", removed.category);

        let report = AutotileResolver::new(&self.sheet).resolve_vacated(room, coord)?;
        Ok(Some(report))
    }

    pub fn place_at_pixel(&mut self, px: i32, py: i32) -> Result<Option<ResolveReport>, EditorError> {
        self.place(self.world_to_tile(px, py))
    }

    pub fn erase_at_pixel(&mut self, px: i32, py: i32) -> Result<Option<ResolveReport>, EditorError> {
        self.erase(self.world_to_tile(px, py))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomtile_core::{Frame, SpriteData};
    use std::collections::HashMap;

    fn sheet() -> SpriteSheet {
        let mut sheet = SpriteSheet::new();
        let frames = vec![Frame::new(0, 0, 18, 18); 3];
        sheet
            .insert(
                TileCategory::Grass,
                SpriteData::new(frames.clone())
                    .with_bitmasks(HashMap::from([(0, 0), (8, 1), (16, 2)])),
            )
            .unwrap();
        sheet
            .insert(TileCategory::Decoration, SpriteData::new(frames))
            .unwrap();
        sheet
    }

    fn small_settings() -> EditorSettings {
        EditorSettings {
            room_width: 4,
            room_height: 4,
            rooms_wide: 2,
            rooms_per_layer: 4,
            layers: 2,
            ..EditorSettings::default()
        }
    }

    fn session() -> EditorSession {
        EditorSession::new(small_settings(), sheet()).unwrap()
    }

    #[test]
    fn test_brush_cycles_and_clamps() {
        let mut s = session();
        assert_eq!(s.brush(), TileCategory::Grass);
        assert!(!s.prev_sprite());

        assert!(s.next_frame());
        assert_eq!(s.frame_index(), 1);
        assert!(s.next_sprite());
        assert_eq!(s.brush(), TileCategory::Decoration);
        assert_eq!(s.frame_index(), 0);
        assert!(!s.next_sprite());
    }

    #[test]
    fn test_frame_index_clamped_to_frames() {
        let mut s = session();
        assert!(s.next_frame());
        assert!(s.next_frame());
        assert!(!s.next_frame());
        assert_eq!(s.frame_index(), 2);
        assert!(s.prev_frame());
        assert!(s.prev_frame());
        assert!(!s.prev_frame());
    }

    #[test]
    fn test_select_room_and_layer() {
        let mut s = session();
        assert!(s.select_room(3));
        assert_eq!(s.room_origin().unwrap(), (1, 1));
        assert!(!s.select_room(4));
        assert_eq!(s.room_index(), 3);

        assert!(s.select_layer(1));
        assert!(!s.select_layer(2));
        assert_eq!(s.layer_index(), 1);
        assert_eq!(s.room_index(), 3);
    }

    #[test]
    fn test_place_resolves_pair() {
        let mut s = session();
        s.place(Coordinate::new(0, 0)).unwrap().unwrap();
        let report = s.place(Coordinate::new(1, 0)).unwrap().unwrap();

        let room = s.room().unwrap();
        assert_eq!(room.get(Coordinate::new(0, 0)).unwrap().frame_variant, 2);
        assert_eq!(room.get(Coordinate::new(1, 0)).unwrap().frame_variant, 1);
        assert_eq!(report.updated.len(), 2);
    }

    #[test]
    fn test_place_on_occupied_is_noop() {
        let mut s = session();
        s.place(Coordinate::new(2, 2)).unwrap();
        s.next_sprite();
        assert!(s.place(Coordinate::new(2, 2)).unwrap().is_none());
        assert_eq!(
            s.room().unwrap().get(Coordinate::new(2, 2)).unwrap().category,
            TileCategory::Grass
        );
    }

    #[test]
    fn test_place_outside_room_is_dropped() {
        let mut s = session();
        assert!(s.place(Coordinate::new(4, 0)).unwrap().is_none());
        assert!(s.place(Coordinate::new(-1, 0)).unwrap().is_none());
        assert_eq!(s.room().unwrap().tile_count(), 0);
    }

    #[test]
    fn test_non_autotiling_sprite_keeps_manual_frame() {
        let mut s = session();
        s.next_sprite();
        s.next_frame();
        s.next_frame();

        let report = s.place(Coordinate::new(0, 0)).unwrap().unwrap();
        s.place(Coordinate::new(1, 0)).unwrap();

        assert!(report.updated.is_empty());
        let room = s.room().unwrap();
        assert_eq!(room.get(Coordinate::new(0, 0)).unwrap().frame_variant, 2);
        assert_eq!(room.get(Coordinate::new(1, 0)).unwrap().frame_variant, 2);
    }

    #[test]
    fn test_erase_updates_neighbor() {
        let mut s = session();
        s.place(Coordinate::new(0, 0)).unwrap();
        s.place(Coordinate::new(1, 0)).unwrap();

        let report = s.erase(Coordinate::new(1, 0)).unwrap().unwrap();
        assert_eq!(report.updated.len(), 1);
        assert_eq!(
            s.room().unwrap().get(Coordinate::new(0, 0)).unwrap().frame_variant,
            0
        );
        assert!(s.erase(Coordinate::new(1, 0)).unwrap().is_none());
    }

    #[test]
    fn test_edits_stay_in_selected_room() {
        let mut s = session();
        s.place(Coordinate::new(0, 0)).unwrap();
        s.select_room(1);
        assert_eq!(s.room().unwrap().tile_count(), 0);
        s.select_layer(1);
        s.select_room(0);
        assert_eq!(s.room().unwrap().tile_count(), 0);
        assert_eq!(s.world().room(0, 0).unwrap().tile_count(), 1);
    }

    #[test]
    fn test_world_to_tile() {
        let s = session();
        assert_eq!(s.world_to_tile(0, 0), Coordinate::new(0, 0));
        assert_eq!(s.world_to_tile(17, 18), Coordinate::new(0, 1));
        assert_eq!(s.world_to_tile(-1, 36), Coordinate::new(-1, 2));
    }

    #[test]
    fn test_place_at_pixel() {
        let mut s = session();
        s.place_at_pixel(20, 40).unwrap();
        assert!(s.room().unwrap().is_occupied(Coordinate::new(1, 2)));
        s.erase_at_pixel(35, 53).unwrap();
        assert!(!s.room().unwrap().is_occupied(Coordinate::new(1, 2)));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let rejected = [
            EditorSettings {
                tile_size: 0,
                ..small_settings()
            },
            EditorSettings {
                layers: 0,
                ..small_settings()
            },
            EditorSettings {
                rooms_per_layer: 0,
                ..small_settings()
            },
            EditorSettings {
                room_width: 0,
                ..small_settings()
            },
            EditorSettings {
                room_width: u32::MAX,
                room_height: 2,
                ..small_settings()
            },
        ];
        for settings in rejected {
            assert!(matches!(
                EditorSession::new(settings, sheet()),
                Err(EditorError::InvalidSettings(_))
            ));
        }
    }

    #[test]
    fn test_empty_sheet_rejected() {
        assert!(matches!(
            EditorSession::new(small_settings(), SpriteSheet::new()),
            Err(EditorError::EmptySpriteSheet)
        ));
    }
}
