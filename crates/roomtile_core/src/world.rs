//! The full editable world: a stack of layers, each with its own rooms

use crate::{Layer, Room};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    pub layers: Vec<Layer>,
}

impl World {
    /// Build a world where every layer has the same room layout
    pub fn new(
        layer_count: usize,
        rooms_wide: u32,
        rooms_per_layer: usize,
        room_width: u32,
        room_height: u32,
    ) -> Self {
        let layers = (0..layer_count)
            .map(|i| {
                Layer::new(
                    format!("layer {i}"),
                    rooms_wide,
                    rooms_per_layer,
                    room_width,
                    room_height,
                )
            })
            .collect();
        Self { layers }
    }

    pub fn room(&self, layer: usize, room: usize) -> Option<&Room> {
        self.layers.get(layer)?.room(room)
    }

    pub fn room_mut(&mut self, layer: usize, room: usize) -> Option<&mut Room> {
        self.layers.get_mut(layer)?.room_mut(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_layout() {
        let world = World::new(3, 3, 9, 24, 16);
        assert_eq!(world.layers.len(), 3);
        assert!(world.layers.iter().all(|l| l.rooms.len() == 9));
        assert_eq!(world.room(2, 8).map(|r| r.width), Some(24));
        assert!(world.room(3, 0).is_none());
        assert!(world.room(0, 9).is_none());
    }

    #[test]
    fn test_layers_have_independent_rooms() {
        let world = World::new(2, 1, 1, 4, 4);
        assert_ne!(world.layers[0].rooms[0].id, world.layers[1].rooms[0].id);
    }
}
