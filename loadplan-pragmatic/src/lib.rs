//! Pragmatic crate aims to describe real world loading planning problems via simple **pragmatic**
//! json format: a catalog of product types, orders with their palettes and a fleet of vehicles.
//!
//! # Examples
//!
//! Read a problem, run the planner and write the solution:
//!
//! ```
//! use loadplan_core::prelude::*;
//! use loadplan_pragmatic::format::problem::PragmaticProblem;
//! use loadplan_pragmatic::format::solution::create_solution;
//! use std::time::Duration;
//!
//! let problem = r#"
//! {
//!   "catalog": { "productTypes": [{ "id": "dry" }] },
//!   "orders": [{
//!     "id": "o1",
//!     "deliveryDate": "2024-05-01",
//!     "destination": { "lat": 52.52, "lng": 13.40 },
//!     "palettes": [{
//!       "id": "p1", "productType": "dry", "standard": "european",
//!       "length": 1.2, "width": 0.8, "height": 1.0, "weight": 300
//!     }]
//!   }],
//!   "vehicles": [{ "id": "v1", "category": "small_van", "transportCost": 100 }]
//! }"#;
//!
//! let problem = problem.to_string().read_pragmatic().unwrap();
//! let planner = Planner::new(problem.create_context(PlannerConfig::default(), Environment::quiet_sequential()));
//! let result = planner.run(problem.orders, problem.vehicles).unwrap();
//! let solution = create_solution(&result, Duration::from_millis(1));
//!
//! assert_eq!(solution.plans.len(), 1);
//! assert_eq!(solution.statistic.palettes, 1);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
pub mod features;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub mod checker;
pub mod format;

mod utils;
mod validation;

use loadplan_core::models::common::Timestamp;
use loadplan_core::utils::GenericError;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Formats unix timestamp in seconds as RFC3339 string.
pub fn format_time(time: Timestamp) -> String {
    OffsetDateTime::from_unix_timestamp(time as i64)
        .ok()
        .and_then(|time| time.format(&Rfc3339).ok())
        .unwrap_or_else(|| time.to_string())
}

/// Parses RFC3339 string into unix timestamp in seconds.
pub fn parse_time_safe(time: &str) -> Result<Timestamp, GenericError> {
    OffsetDateTime::parse(time, &Rfc3339)
        .map(|time| time.unix_timestamp() as Timestamp)
        .map_err(|err| format!("cannot parse time '{time}': {err}").into())
}

/// Parses calendar date in `YYYY-MM-DD` format.
pub fn parse_date_safe(date: &str) -> Result<Date, GenericError> {
    let format = format_description!("[year]-[month]-[day]");

    Date::parse(date, &format).map_err(|err| format!("cannot parse date '{date}': {err}").into())
}

/// Formats calendar date in `YYYY-MM-DD` format.
pub fn format_date(date: Date) -> String {
    let format = format_description!("[year]-[month]-[day]");

    date.format(&format).unwrap_or_else(|_| date.to_string())
}
