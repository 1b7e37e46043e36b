//! 8-neighbor bitmask packing
//!
//! Bit layout (Y-down):
//! ```text
//!  TL(1)  T(2)  TR(4)
//!   L(8)   *    R(16)
//!  BL(32) B(64) BR(128)
//! ```
//! Corner bits only count when both flanking edge bits are set, which leaves
//! 47 distinct masks for a full blob tileset.

use roomtile_core::{Coordinate, Direction};

/// Neighbor direction flags for bitmask calculation
pub mod neighbors {
    use roomtile_core::Direction;

    pub const TL: u8 = Direction::TopLeft.bit(); // 0b0000_0001
    pub const T: u8 = Direction::Top.bit(); // 0b0000_0010
    pub const TR: u8 = Direction::TopRight.bit(); // 0b0000_0100
    pub const L: u8 = Direction::Left.bit(); // 0b0000_1000
    pub const R: u8 = Direction::Right.bit(); // 0b0001_0000
    pub const BL: u8 = Direction::BottomLeft.bit(); // 0b0010_0000
    pub const B: u8 = Direction::Bottom.bit(); // 0b0100_0000
    pub const BR: u8 = Direction::BottomRight.bit(); // 0b1000_0000

    pub const ORTHOGONAL: u8 = T | L | R | B;
    pub const DIAGONAL: u8 = TL | TR | BL | BR;
}

/// Clear every corner bit that lacks both of its flanking edge bits
pub fn gate_diagonals(raw: u8) -> u8 {
    let mut result = raw;

    for corner in Direction::DIAGONAL {
        if let Some((a, b)) = corner.orthogonal_pair() {
            let edges = a.bit() | b.bit();
            if raw & edges != edges {
                result &= !corner.bit();
            }
        }
    }

    result
}

/// Calculate the gated neighbor mask for the cell at `coord`
pub fn calculate_mask<F>(coord: Coordinate, is_connected: F) -> u8
where
    F: Fn(Coordinate) -> bool,
{
    let mut raw = 0u8;

    for (direction, neighbor) in coord.neighbors() {
        if is_connected(neighbor) {
            raw |= direction.bit();
        }
    }

    gate_diagonals(raw)
}

/// Whether `mask` can come out of [`gate_diagonals`]
pub fn is_legal_mask(mask: u8) -> bool {
    gate_diagonals(mask) == mask
}

/// Every mask a fully populated blob table must cover, ascending
pub fn legal_masks() -> Vec<u8> {
    (0..=u8::MAX).filter(|&m| is_legal_mask(m)).collect()
}
