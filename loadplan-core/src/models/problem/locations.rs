#[cfg(test)]
#[path = "../../../tests/unit/models/problem/locations_test.rs"]
mod locations_test;

use crate::models::common::{Coordinate, Distance};
use rustc_hash::FxHashMap;
use std::fmt::{Display, Formatter};

const EARTH_RADIUS_KM: Distance = 6371.;

/// An error returned by location oracle.
#[derive(Clone, Debug, PartialEq)]
pub enum OracleError {
    /// Address cannot be resolved to a coordinate.
    NotFound,
    /// Distance between two points cannot be computed.
    Unavailable,
    /// External service failed, the call can be retried.
    Service(String),
}

impl Display for OracleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleError::NotFound => write!(f, "location not found"),
            OracleError::Unavailable => write!(f, "distance unavailable"),
            OracleError::Service(reason) => write!(f, "location service failure: {reason}"),
        }
    }
}

/// Provides geocoding and road distance. Implementations are expected to be idempotent
/// reads, so calls can be retried.
pub trait LocationOracle {
    /// Resolves address to a coordinate.
    fn resolve(&self, address: &str) -> Result<Coordinate, OracleError>;

    /// Returns distance between two points in kilometers.
    fn distance(&self, from: Coordinate, to: Coordinate) -> Result<Distance, OracleError>;
}

/// Returns great circle distance in kilometers using haversine formula.
pub fn haversine_distance(from: Coordinate, to: Coordinate) -> Distance {
    let (lat1, lat2) = (from.lat.to_radians(), to.lat.to_radians());
    let d_lat = lat2 - lat1;
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.).sin().powi(2);

    2. * EARTH_RADIUS_KM * a.sqrt().atan2((1. - a).sqrt())
}

/// Parses `"lat,lng"` formatted string.
pub fn parse_coordinate(value: &str) -> Option<Coordinate> {
    let (lat, lng) = value.split_once(',')?;
    let lat = lat.trim().parse::<f64>().ok()?;
    let lng = lng.trim().parse::<f64>().ok()?;

    let is_valid = (-90. ..=90.).contains(&lat) && (-180. ..=180.).contains(&lng);

    is_valid.then_some(Coordinate::new(lat, lng))
}

/// An offline oracle which resolves addresses from a known coordinate table or from `"lat,lng"`
/// strings, and uses great circle distance.
#[derive(Clone, Debug, Default)]
pub struct GreatCircleOracle {
    known: FxHashMap<String, Coordinate>,
}

impl GreatCircleOracle {
    /// Creates a new instance of `GreatCircleOracle` with known addresses.
    pub fn new(known: impl IntoIterator<Item = (String, Coordinate)>) -> Self {
        Self { known: known.into_iter().collect() }
    }
}

impl LocationOracle for GreatCircleOracle {
    fn resolve(&self, address: &str) -> Result<Coordinate, OracleError> {
        self.known.get(address).copied().or_else(|| parse_coordinate(address)).ok_or(OracleError::NotFound)
    }

    fn distance(&self, from: Coordinate, to: Coordinate) -> Result<Distance, OracleError> {
        Ok(haversine_distance(from, to))
    }
}
