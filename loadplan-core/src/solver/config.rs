use crate::models::common::{Distance, Timestamp};
use crate::utils::Float;
use std::time::Duration;

/// Specifies how candidate placement positions are generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateStrategy {
    /// Every grid cell footprint origin at every support level.
    Grid,
    /// Origin plus corner projections of already placed palettes.
    ExtremePoints,
}

/// Specifies how loading/unloading sequence is scored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingSequence {
    /// Palettes delivered earlier are placed closer to the rear door.
    DeliveryOrder,
    /// Sequence is ignored, remaining weights are renormalized.
    Disabled,
}

/// Spatial packer settings.
#[derive(Clone, Debug)]
pub struct PackingConfig {
    /// Grid resolution in meters.
    pub resolution: Float,
    /// Candidate generation strategy.
    pub strategy: CandidateStrategy,
    /// Loading sequence rule.
    pub loading_sequence: LoadingSequence,
    /// Minimum fraction of base area which should be supported when not on the floor.
    pub min_support_ratio: Float,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            resolution: 0.1,
            strategy: CandidateStrategy::Grid,
            loading_sequence: LoadingSequence::DeliveryOrder,
            min_support_ratio: 0.5,
        }
    }
}

/// Location oracle call settings.
#[derive(Clone, Debug)]
pub struct OracleConfig {
    /// Timeout of a single call.
    pub timeout: Duration,
    /// Amount of retries after a service failure.
    pub retries: usize,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(5), retries: 3 }
    }
}

/// Loading dock schedule settings.
#[derive(Clone, Debug)]
pub struct ScheduleConfig {
    /// Time when loading starts, no schedule is built without it.
    pub planning_start: Option<Timestamp>,
    /// Amount of docks loading vehicles simultaneously.
    pub dock_count: usize,
    /// Loading duration of one vehicle in seconds.
    pub loading_duration: Float,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { planning_start: None, dock_count: 1, loading_duration: 40. * 60. }
    }
}

/// Planner settings.
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Max distance in kilometers between a group reference point and its member destinations.
    pub proximity_threshold: Distance,
    /// Packer settings.
    pub packing: PackingConfig,
    /// Oracle settings.
    pub oracle: OracleConfig,
    /// Schedule settings.
    pub schedule: ScheduleConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            proximity_threshold: 50.,
            packing: PackingConfig::default(),
            oracle: OracleConfig::default(),
            schedule: ScheduleConfig::default(),
        }
    }
}
