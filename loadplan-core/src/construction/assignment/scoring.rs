#[cfg(test)]
#[path = "../../../tests/unit/construction/assignment/scoring_test.rs"]
mod scoring_test;

use super::GroupRequirements;
use crate::models::problem::Vehicle;
use crate::utils::{Float, is_not_greater};
use std::fmt::{Display, Formatter};

/// A reason why a vehicle cannot take a set of orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rejection {
    /// Vehicle is marked as not available.
    Unavailable,
    /// Usable volume is too small.
    Volume,
    /// Payload capacity is too small.
    Payload,
    /// Refrigeration is required, but vehicle has no refrigeration unit.
    Refrigeration,
    /// Vehicle setpoint does not satisfy required temperature.
    Temperature,
    /// Not enough pallet slots.
    PalletSlots,
    /// Vehicle passes hard filters, but its utilization score is zero.
    Utilization,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Rejection::Unavailable => "vehicle is not available",
            Rejection::Volume => "insufficient usable volume",
            Rejection::Payload => "insufficient payload capacity",
            Rejection::Refrigeration => "refrigeration is required",
            Rejection::Temperature => "temperature setpoint does not satisfy required band",
            Rejection::PalletSlots => "insufficient pallet slots",
            Rejection::Utilization => "zero utilization score",
        };

        write!(f, "{reason}")
    }
}

/// Scores utilization ratio: rewards ratios in `[0.75, 0.9]` and penalizes both under and over filling.
pub fn utilization_score(ratio: Float) -> Float {
    match ratio {
        ratio if ratio < 0.75 => (ratio / 0.75).max(0.),
        ratio if ratio <= 0.9 => 1.,
        ratio if ratio <= 1. => 1. - (ratio - 0.9) / 0.1,
        _ => 0.,
    }
}

/// Checks refrigeration and temperature requirements only.
pub fn check_temperature(requirements: &GroupRequirements, vehicle: &Vehicle) -> Result<(), Rejection> {
    if !requirements.needs_refrigeration {
        return Ok(());
    }

    if !vehicle.is_refrigerated() {
        return Err(Rejection::Refrigeration);
    }

    match vehicle.temperature {
        Some(setpoint) if requirements.temperature.contains(setpoint) => Ok(()),
        _ => Err(Rejection::Temperature),
    }
}

/// Applies all hard filters to the vehicle.
pub fn check_vehicle(requirements: &GroupRequirements, vehicle: &Vehicle) -> Result<(), Rejection> {
    let spec = vehicle.spec();

    if !vehicle.available {
        return Err(Rejection::Unavailable);
    }

    if !is_not_greater(requirements.volume, spec.usable_volume) {
        return Err(Rejection::Volume);
    }

    if !is_not_greater(requirements.weight, spec.payload) {
        return Err(Rejection::Payload);
    }

    check_temperature(requirements, vehicle)?;

    if !is_not_greater(requirements.slot_usage(&spec), 1.) {
        return Err(Rejection::PalletSlots);
    }

    Ok(())
}

/// Returns a mean of volume, weight and pallet slot utilization scores, or rejection reason when
/// a hard filter fails or the score is not positive.
pub fn score_vehicle(requirements: &GroupRequirements, vehicle: &Vehicle) -> Result<Float, Rejection> {
    check_vehicle(requirements, vehicle)?;

    let spec = vehicle.spec();
    let score = [
        requirements.volume / spec.usable_volume,
        requirements.weight / spec.payload,
        requirements.slot_usage(&spec),
    ]
    .into_iter()
    .map(utilization_score)
    .sum::<Float>()
        / 3.;

    if score > 0. { Ok(score) } else { Err(Rejection::Utilization) }
}
