/// Rotation or flip applied while copying the source into the destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    /// No rotation.
    #[default]
    Origin,
    /// 90 degrees.
    Rot90,
    /// 180 degrees.
    Rot180,
    /// 270 degrees.
    Rot270,
    /// Mirror across the horizontal axis (rows reversed).
    #[serde(rename = "xflip")]
    XFlip,
    /// Mirror across the vertical axis (columns reversed).
    #[serde(rename = "yflip")]
    YFlip,
}

/// Memory walk direction along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Addressing {
    /// Increasing addresses.
    #[default]
    Forward,
    /// Decreasing addresses.
    Reverse,
}

/// Addressing state realizing a [`Rotation`].
///
/// Directions apply to the destination plane; `rotate90` applies to the source and mask planes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AddressingPlan {
    /// Horizontal direction.
    pub dir_x: Addressing,
    /// Vertical direction.
    pub dir_y: Addressing,
    /// Counter-clockwise 90 degree rotate primitive.
    pub rotate90: bool,
}

impl AddressingPlan {
    /// Return `true` when any axis walks in reverse.
    pub fn reverses_any_axis(self) -> bool {
        self.dir_x == Addressing::Reverse || self.dir_y == Addressing::Reverse
    }
}

/// Map a rotation onto the hardware's rotate-90 primitive and axis reversal.
///
/// 90 and 270 share the rotate primitive and differ only in direction; 180 is pure reversal.
pub fn map_rotation(rot: Rotation) -> AddressingPlan {
    use Addressing::{Forward, Reverse};

    let (dir_x, dir_y, rotate90) = match rot {
        Rotation::Origin => (Forward, Forward, false),
        Rotation::Rot90 => (Reverse, Reverse, true),
        Rotation::Rot180 => (Reverse, Reverse, false),
        Rotation::Rot270 => (Forward, Forward, true),
        Rotation::XFlip => (Forward, Reverse, false),
        Rotation::YFlip => (Reverse, Forward, false),
    };

    AddressingPlan {
        dir_x,
        dir_y,
        rotate90,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/rotation.rs"]
mod tests;
