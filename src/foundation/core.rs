/// Rectangle in pixel coordinates, `(x1, y1)` inclusive top-left and `(x2, y2)` exclusive
/// bottom-right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x1: u32,
    /// Top edge.
    pub y1: u32,
    /// Right edge (exclusive).
    pub x2: u32,
    /// Bottom edge (exclusive).
    pub y2: u32,
}

impl Rect {
    /// Create a rectangle from its corners.
    pub const fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width in pixels, zero for degenerate rectangles.
    pub fn width(self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    /// Height in pixels, zero for degenerate rectangles.
    pub fn height(self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Return `true` when the rectangle covers no pixels.
    pub fn is_empty(self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Return `true` when both corners fit the 16-bit coordinate fields of the hardware.
    pub fn fits_coordinate_fields(self) -> bool {
        [self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|&v| v <= u32::from(u16::MAX))
    }
}

/// Pack an `(x, y)` coordinate into one register word (`y` in the high half).
pub(crate) fn pack_offset(x: u32, y: u32) -> u32 {
    ((y & 0xffff) << 16) | (x & 0xffff)
}

/// Replicate an 8-bit global alpha into all four byte lanes (`0x80` becomes `0x8080_8080`).
pub(crate) fn replicate_alpha(alpha: u8) -> u32 {
    u32::from_ne_bytes([alpha; 4])
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
