use crate::models::common::*;
use crate::models::problem::{Palette, Vehicle};
use crate::models::solution::Group;
use crate::utils::Float;
use std::sync::Arc;

/// A palette placed inside vehicle cargo space.
#[derive(Clone, Debug)]
pub struct LoadedPalette {
    /// A placed palette.
    pub palette: Arc<Palette>,
    /// An id of the order which owns the palette.
    pub order_id: String,
    /// A destination of the owning order.
    pub destination: Destination,
    /// Lower corner position and rotation.
    pub position: Position3D,
    /// Footprint size after rotation.
    pub size: Size3D,
}

impl LoadedPalette {
    /// Returns true if palette was rotated by 90°.
    pub fn is_rotated(&self) -> bool {
        self.position.rotation == Rotation::Deg90
    }

    /// Returns footprint center in horizontal plane.
    pub fn center(&self) -> (Float, Float) {
        (self.position.x + self.size.length / 2., self.position.y + self.size.width / 2.)
    }

    /// Returns top z coordinate.
    pub fn top(&self) -> Float {
        self.position.z + self.size.height
    }
}

/// A post-hoc scoring of a completed placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanMetrics {
    /// `1 - deviation / max_deviation` of weight centroid from vehicle center.
    pub weight_distribution_score: Float,
    /// Placed volume divided by usable volume.
    pub space_utilization: Float,
}

/// A loading plan of one vehicle. Immutable after creation.
#[derive(Clone, Debug)]
pub struct LoadingPlan {
    /// A vehicle used by the plan.
    pub vehicle: Arc<Vehicle>,
    /// A group of orders loaded on the vehicle.
    pub group: Group,
    /// Placed palettes in placement order.
    pub palettes: Vec<LoadedPalette>,
    /// Plan metrics.
    pub metrics: PlanMetrics,
    /// Estimated cost.
    pub estimated_cost: Cost,
}

impl LoadingPlan {
    /// Returns vehicle id.
    pub fn vehicle_id(&self) -> &str {
        self.vehicle.id.as_str()
    }

    /// Returns total weight of placed palettes.
    pub fn total_weight(&self) -> Weight {
        self.palettes.iter().map(|loaded| loaded.palette.weight).sum()
    }

    /// Returns total volume of placed palettes.
    pub fn total_volume(&self) -> Volume {
        self.palettes.iter().map(|loaded| loaded.size.volume()).sum()
    }
}

/// A group assigned to a vehicle, input of packing.
#[derive(Clone, Debug)]
pub struct Assignment {
    /// Assigned vehicle.
    pub vehicle: Arc<Vehicle>,
    /// Assigned group.
    pub group: Group,
    /// Utilization score of the assignment.
    pub score: Float,
}

/// A loading dock slot of a plan.
#[derive(Clone, Debug, PartialEq)]
pub struct DockSlot {
    /// Vehicle id.
    pub vehicle_id: String,
    /// Dock index.
    pub dock: usize,
    /// Loading batch index.
    pub batch: usize,
    /// Loading start time.
    pub start: Timestamp,
    /// Loading end time.
    pub end: Timestamp,
    /// True if loading ends after the group's earliest deadline.
    pub deadline_at_risk: bool,
}
