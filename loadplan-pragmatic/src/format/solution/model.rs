use crate::format::{FormatError, MultiFormatError};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// Represents solution statistic.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    /// Amount of loading plans.
    pub plans: usize,
    /// Amount of failures.
    pub failures: usize,
    /// Amount of used vehicles.
    pub vehicles: usize,
    /// Amount of loaded palettes.
    pub palettes: usize,
    /// Total estimated cost.
    pub cost: f64,
    /// Planning duration in milliseconds.
    pub duration_ms: u64,
}

/// A position of a palette inside vehicle cargo space.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoadedPalette {
    /// Palette id.
    pub id: String,
    /// Id of the order which owns the palette.
    pub order_id: String,
    /// Offset along vehicle length from the cab wall.
    pub x: f64,
    /// Offset along vehicle width.
    pub y: f64,
    /// Offset from the floor.
    pub z: f64,
    /// Rotation around vertical axis in degrees: 0 or 90.
    pub rotation: u32,
    /// Occupied length after rotation.
    pub length: f64,
    /// Occupied width after rotation.
    pub width: f64,
    /// Occupied height.
    pub height: f64,
}

/// Plan metrics.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// A score in `[0, 1]`, 1 means the weight centroid is in the vehicle center.
    pub weight_distribution: f64,
    /// Loaded volume divided by usable volume.
    pub space_utilization: f64,
    /// Total loaded weight.
    pub total_weight: f64,
    /// Total loaded volume.
    pub total_volume: f64,
}

/// A loading plan of one vehicle.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Vehicle id.
    pub vehicle_id: String,
    /// Vehicle category.
    pub category: String,
    /// Id of the loaded group.
    pub group_id: String,
    /// Ids of loaded orders.
    pub orders: Vec<String>,
    /// Palettes in loading order.
    pub palettes: Vec<LoadedPalette>,
    /// Plan metrics.
    pub metrics: Metrics,
    /// Estimated cost.
    pub estimated_cost: f64,
}

/// Specifies what a failure refers to.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// The failure refers to a single order.
    Order,
    /// The failure refers to a group of orders.
    Group,
}

/// A planning failure.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    /// A stable reason code.
    pub code: String,
    /// Specifies whether `id` is an order or a group id.
    pub kind: FailureKind,
    /// Id of the failed order or group.
    pub id: String,
    /// Ids of affected orders.
    pub orders: Vec<String>,
    /// A human readable reason.
    pub reason: String,
    /// Vehicle id, set when packing fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    /// Palette id, set when a specific palette cannot be placed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_id: Option<String>,
}

/// A loading dock slot.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DockSlot {
    /// Vehicle id.
    pub vehicle_id: String,
    /// Dock index.
    pub dock: usize,
    /// Loading batch index.
    pub batch: usize,
    /// Loading start in RFC3339 format.
    pub start: String,
    /// Loading end in RFC3339 format.
    pub end: String,
    /// True if loading ends after the earliest deadline of loaded orders.
    pub deadline_at_risk: bool,
}

/// A planning solution.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Solution statistic.
    pub statistic: Statistic,
    /// Loading plans in vehicle input order.
    pub plans: Vec<Plan>,
    /// Planning failures in detection order.
    pub failures: Vec<Failure>,
    /// Loading dock schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<DockSlot>>,
}

/// Serializes solution into json format.
pub fn serialize_solution<W: Write>(solution: &Solution, writer: &mut BufWriter<W>) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, solution).map_err(Error::from)
}

/// Deserializes solution from json format.
pub fn deserialize_solution<R: Read>(reader: BufReader<R>) -> Result<Solution, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new(
            "E0001".to_string(),
            "cannot deserialize solution".to_string(),
            format!("check input json: '{err}'"),
        )
        .into()
    })
}
