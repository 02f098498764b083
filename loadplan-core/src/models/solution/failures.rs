#[cfg(test)]
#[path = "../../../tests/unit/models/solution/failures_test.rs"]
mod failures_test;

use thiserror::Error;

/// A typed, non fatal planning failure. Each variant keeps the identifier it originates from.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PlanningError {
    /// Malformed order or palette, rejected before grouping.
    #[error("order '{order_id}' is invalid: {reason}")]
    Validation {
        /// Order id.
        order_id: String,
        /// Failure reason.
        reason: String,
    },

    /// Order destination cannot be resolved, it is excluded from grouping. Location service
    /// failures which survive all retries are reported this way too.
    #[error("order '{order_id}' has unresolvable location: {reason}")]
    UnresolvableLocation {
        /// Order id.
        order_id: String,
        /// Failure reason.
        reason: String,
    },

    /// A group or sub-group passes hard filters for no vehicle.
    #[error("no suitable vehicle for group '{group_id}': {reason}")]
    NoSuitableVehicle {
        /// Group id.
        group_id: String,
        /// Ids of group orders.
        order_ids: Vec<String>,
        /// Failure reason.
        reason: String,
    },

    /// A palette cannot be placed, the whole plan of the vehicle is discarded.
    #[error("cannot pack group '{group_id}' into vehicle '{vehicle_id}': {reason}")]
    PackingInfeasible {
        /// Group id.
        group_id: String,
        /// Vehicle id.
        vehicle_id: String,
        /// Ids of group orders.
        order_ids: Vec<String>,
        /// Palette which cannot be placed, if any.
        palette_id: Option<String>,
        /// Failure reason.
        reason: String,
    },
}

impl PlanningError {
    /// Returns a stable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            PlanningError::Validation { .. } => "VALIDATION",
            PlanningError::UnresolvableLocation { .. } => "UNRESOLVABLE_LOCATION",
            PlanningError::NoSuitableVehicle { .. } => "NO_SUITABLE_VEHICLE",
            PlanningError::PackingInfeasible { .. } => "PACKING_INFEASIBLE",
        }
    }

    /// Returns the identifier the failure originates from: an order id for order level failures,
    /// a group id otherwise.
    pub fn origin_id(&self) -> &str {
        match self {
            PlanningError::Validation { order_id, .. }
            | PlanningError::UnresolvableLocation { order_id, .. } => order_id,
            PlanningError::NoSuitableVehicle { group_id, .. } | PlanningError::PackingInfeasible { group_id, .. } => {
                group_id
            }
        }
    }

    /// Returns ids of orders affected by the failure.
    pub fn order_ids(&self) -> Vec<String> {
        match self {
            PlanningError::Validation { order_id, .. }
            | PlanningError::UnresolvableLocation { order_id, .. } => vec![order_id.clone()],
            PlanningError::NoSuitableVehicle { order_ids, .. } | PlanningError::PackingInfeasible { order_ids, .. } => {
                order_ids.clone()
            }
        }
    }

    /// Returns a human readable reason.
    pub fn reason(&self) -> &str {
        match self {
            PlanningError::Validation { reason, .. }
            | PlanningError::UnresolvableLocation { reason, .. }
            | PlanningError::NoSuitableVehicle { reason, .. }
            | PlanningError::PackingInfeasible { reason, .. } => reason,
        }
    }
}
