#[cfg(test)]
#[path = "../../../tests/unit/models/common/primitives_test.rs"]
mod primitives_test;

use crate::utils::{Float, GEOMETRY_EPSILON};

/// Represents a time in seconds since unix epoch.
pub type Timestamp = Float;

/// Specifies cost value.
pub type Cost = Float;

/// Specifies a weight in kilograms.
pub type Weight = Float;

/// Specifies a volume in cubic meters.
pub type Volume = Float;

/// Specifies a temperature in degrees Celsius.
pub type Temperature = Float;

/// Specifies a distance in kilometers.
pub type Distance = Float;

/// Physical size of a rectangular unit load in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size3D {
    /// Size along vehicle length axis when not rotated.
    pub length: Float,
    /// Size along vehicle width axis when not rotated.
    pub width: Float,
    /// Vertical size.
    pub height: Float,
}

impl Size3D {
    /// Creates a new instance of `Size3D`.
    pub fn new(length: Float, width: Float, height: Float) -> Self {
        Self { length, width, height }
    }

    /// Returns volume.
    pub fn volume(&self) -> Volume {
        self.length * self.width * self.height
    }

    /// Returns base area.
    pub fn base_area(&self) -> Float {
        self.length * self.width
    }

    /// Returns size with length and width swapped (90° rotation around vertical axis).
    pub fn rotated(&self) -> Self {
        Self { length: self.width, width: self.length, height: self.height }
    }

    /// Checks that every dimension is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.length > 0. && self.width > 0. && self.height > 0.
    }
}

/// A closed interval of allowed temperatures, each bound is optional.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TemperatureBand {
    /// Minimum allowed temperature.
    pub min: Option<Temperature>,
    /// Maximum allowed temperature.
    pub max: Option<Temperature>,
}

impl TemperatureBand {
    /// Creates a new instance of `TemperatureBand`.
    pub fn new(min: Option<Temperature>, max: Option<Temperature>) -> Self {
        Self { min, max }
    }

    /// Returns true if any bound is set.
    pub fn is_constrained(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Returns false when both bounds are set and min exceeds max.
    pub fn is_consistent(&self) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }

    /// Checks whether two bands overlap: `max(minA, minB) <= min(maxA, maxB)`, a missing bound is unconstrained.
    pub fn overlaps(&self, other: &Self) -> bool {
        let intersection = self.intersect(other);

        match (intersection.min, intersection.max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }

    /// Returns the tightest band satisfying both.
    pub fn intersect(&self, other: &Self) -> Self {
        let min = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        let max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };

        Self { min, max }
    }

    /// Checks whether given temperature lies within the band.
    pub fn contains(&self, value: Temperature) -> bool {
        self.min.is_none_or(|min| value >= min - GEOMETRY_EPSILON)
            && self.max.is_none_or(|max| value <= max + GEOMETRY_EPSILON)
    }
}

/// Represents a time window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    /// Start of time window.
    pub start: Timestamp,
    /// End of time window.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new [`TimeWindow`].
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Returns unlimited time window.
    pub fn max() -> Self {
        Self { start: 0., end: Float::MAX }
    }

    /// Checks whether time window is well formed.
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }
}

/// A geographic coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// Latitude.
    pub lat: Float,
    /// Longitude.
    pub lng: Float,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lat: Float, lng: Float) -> Self {
        Self { lat, lng }
    }
}
