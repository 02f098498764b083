#[cfg(test)]
#[path = "../../../tests/unit/format/problem/model_test.rs"]
mod model_test;

use crate::format::{FormatError, MultiFormatError};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A temperature range in degrees Celsius, a missing bound is unconstrained.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct TemperatureRange {
    /// Minimum allowed temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Maximum allowed temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Physical and thermal constraints of one product type. Every missing property uses the least
/// restrictive default.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    /// Product type tag referenced by palettes.
    pub id: String,
    /// Nothing can be put on top of fragile goods. Default is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragile: Option<bool>,
    /// Whether length and width can be swapped. Default is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotatable: Option<bool>,
    /// Product types which cannot travel together with this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incompatible_with: Option<Vec<String>>,
    /// Allowed transport temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<TemperatureRange>,
    /// Max weight in kilograms which can rest on a palette of this type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stack_weight: Option<f64>,
    /// Goods must keep their orientation. Default is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_vertical: Option<bool>,
    /// Loading priority from 1 (highest) to 5 (lowest). Default is 3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading_priority: Option<u8>,
}

/// A catalog of product types.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Product types.
    pub product_types: Vec<ProductType>,
}

/// A pallet standard.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PalletStandard {
    /// EUR/EPAL pallet.
    European,
    /// US standard pallet.
    American,
}

/// A palette of an order.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// Palette id, unique across all orders.
    pub id: String,
    /// Product type id.
    pub product_type: String,
    /// Pallet standard.
    pub standard: PalletStandard,
    /// Length in meters.
    pub length: f64,
    /// Width in meters.
    pub width: f64,
    /// Height in meters.
    pub height: f64,
    /// Weight in kilograms including the pallet itself.
    pub weight: f64,
}

/// Specifies order destination.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Destination {
    /// A geocoordinate with latitude and longitude.
    Coordinate {
        /// Latitude.
        lat: f64,
        /// Longitude.
        lng: f64,
    },
    /// A free form address resolved using problem locations or `"lat,lng"` notation.
    Address(String),
}

/// A delivery order.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id.
    pub id: String,
    /// Delivery date in `YYYY-MM-DD` format.
    pub delivery_date: String,
    /// Delivery destination.
    pub destination: Destination,
    /// Earliest delivery deadline in RFC3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest: Option<String>,
    /// Latest delivery deadline in RFC3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
    /// Ordered palettes.
    pub palettes: Vec<Palette>,
}

/// A vehicle of the fleet.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Vehicle id.
    pub id: String,
    /// Vehicle category name, for example `van` or `semi_reefer`.
    pub category: String,
    /// Whether vehicle can be used. Default is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    /// A per trip transport cost.
    pub transport_cost: f64,
    /// A temperature setpoint of refrigerated vehicle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// A known location used to resolve address destinations.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Location {
    /// Address as used in order destinations.
    pub address: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// A loading planning problem.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Product type catalog.
    pub catalog: Catalog,
    /// Orders to plan.
    pub orders: Vec<Order>,
    /// Available vehicles.
    pub vehicles: Vec<Vehicle>,
    /// Known locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,
    /// Loading start time in RFC3339 format, a dock schedule is created when it is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planning_start: Option<String>,
}

/// Deserializes problem in json format from `BufReader`.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> Result<Problem, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new(
            "E0000".to_string(),
            "cannot deserialize problem".to_string(),
            format!("check input json: '{err}'"),
        )
        .into()
    })
}

/// Serializes `problem` in json from `writer`.
pub fn serialize_problem<W: Write>(problem: &Problem, writer: &mut BufWriter<W>) -> Result<(), std::io::Error> {
    serde_json::to_writer_pretty(writer, problem).map_err(std::io::Error::from)
}
