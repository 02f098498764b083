#[cfg(test)]
#[path = "../../../tests/unit/construction/packing/geometry_test.rs"]
mod geometry_test;

use crate::models::common::{Size3D, Volume};
use crate::utils::{Float, GEOMETRY_EPSILON, is_close};

/// An axis aligned box given by its lower corner and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cuboid {
    /// Lower corner along length axis.
    pub x: Float,
    /// Lower corner along width axis.
    pub y: Float,
    /// Lower corner along vertical axis.
    pub z: Float,
    /// Size after rotation.
    pub size: Size3D,
}

impl Cuboid {
    /// Creates a new instance of `Cuboid`.
    pub fn new(x: Float, y: Float, z: Float, size: Size3D) -> Self {
        Self { x, y, z, size }
    }

    /// Returns upper bound along length axis.
    pub fn x_max(&self) -> Float {
        self.x + self.size.length
    }

    /// Returns upper bound along width axis.
    pub fn y_max(&self) -> Float {
        self.y + self.size.width
    }

    /// Returns upper bound along vertical axis.
    pub fn z_max(&self) -> Float {
        self.z + self.size.height
    }

    /// Returns volume.
    pub fn volume(&self) -> Volume {
        self.size.volume()
    }

    /// Returns footprint center.
    pub fn center_xy(&self) -> (Float, Float) {
        (self.x + self.size.length / 2., self.y + self.size.width / 2.)
    }

    /// Checks whether cuboid lies within `[0, bounds]` on every axis.
    pub fn is_within(&self, bounds: &Size3D) -> bool {
        self.x > -GEOMETRY_EPSILON
            && self.y > -GEOMETRY_EPSILON
            && self.z > -GEOMETRY_EPSILON
            && self.x_max() < bounds.length + GEOMETRY_EPSILON
            && self.y_max() < bounds.width + GEOMETRY_EPSILON
            && self.z_max() < bounds.height + GEOMETRY_EPSILON
    }

    /// Checks 3D interval overlap on all three axes, touching faces do not overlap.
    pub fn overlaps(&self, other: &Cuboid) -> bool {
        overlap_length(self.z, self.z_max(), other.z, other.z_max()) > GEOMETRY_EPSILON
            && self.footprints_intersect(other)
    }

    /// Returns area of horizontal footprint intersection.
    pub fn footprint_overlap(&self, other: &Cuboid) -> Float {
        overlap_length(self.x, self.x_max(), other.x, other.x_max())
            * overlap_length(self.y, self.y_max(), other.y, other.y_max())
    }

    /// Checks whether footprints share an area (not just an edge).
    pub fn footprints_intersect(&self, other: &Cuboid) -> bool {
        overlap_length(self.x, self.x_max(), other.x, other.x_max()) > GEOMETRY_EPSILON
            && overlap_length(self.y, self.y_max(), other.y, other.y_max()) > GEOMETRY_EPSILON
    }

    /// Checks whether this cuboid rests directly on top of another one.
    pub fn rests_on(&self, other: &Cuboid) -> bool {
        is_close(self.z, other.z_max()) && self.footprints_intersect(other)
    }

    /// Returns four footprint corners.
    pub fn corners_xy(&self) -> [(Float, Float); 4] {
        [(self.x, self.y), (self.x_max(), self.y), (self.x, self.y_max()), (self.x_max(), self.y_max())]
    }

    /// Checks whether a point lies within closed footprint.
    pub fn covers_xy(&self, (x, y): (Float, Float)) -> bool {
        x > self.x - GEOMETRY_EPSILON
            && x < self.x_max() + GEOMETRY_EPSILON
            && y > self.y - GEOMETRY_EPSILON
            && y < self.y_max() + GEOMETRY_EPSILON
    }
}

/// Returns length of intersection of two closed intervals, zero if they are disjoint.
pub fn overlap_length(a_min: Float, a_max: Float, b_min: Float, b_max: Float) -> Float {
    (a_max.min(b_max) - a_min.max(b_min)).max(0.)
}
