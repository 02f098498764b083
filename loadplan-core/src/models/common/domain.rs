use crate::models::common::{Coordinate, Size3D};
use crate::utils::Float;
use std::fmt::{Display, Formatter};

/// Specifies where an order has to be delivered.
#[derive(Clone, Debug, PartialEq)]
pub enum Destination {
    /// A free form address which has to be resolved by location oracle.
    Address(String),
    /// An already known coordinate.
    Coordinate(Coordinate),
}

impl Display for Destination {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Address(address) => write!(f, "{address}"),
            Destination::Coordinate(Coordinate { lat, lng }) => write!(f, "{lat},{lng}"),
        }
    }
}

/// A pallet standard which defines in which vehicle slots a palette can be put.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PalletStandard {
    /// EUR/EPAL pallet, 1.2 x 0.8 m footprint.
    European,
    /// US standard pallet, 1.2 x 1.0 m footprint.
    American,
}

/// A rotation of a palette around vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rotation {
    /// Palette length goes along vehicle length.
    Deg0,
    /// Palette length and width are swapped.
    Deg90,
}

impl Rotation {
    /// Returns rotation angle in degrees.
    pub fn degrees(&self) -> u32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
        }
    }

    /// Applies rotation to the given size.
    pub fn apply(&self, size: &Size3D) -> Size3D {
        match self {
            Rotation::Deg0 => *size,
            Rotation::Deg90 => size.rotated(),
        }
    }
}

/// A placement of a palette lower corner inside vehicle cargo space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position3D {
    /// Offset along vehicle length, from the cab wall.
    pub x: Float,
    /// Offset along vehicle width.
    pub y: Float,
    /// Offset from the floor.
    pub z: Float,
    /// Rotation around vertical axis.
    pub rotation: Rotation,
}
