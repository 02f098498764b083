//! Planner configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use loadplan_core::solver::{CandidateStrategy, LoadingSequence, PlannerConfig};
use loadplan_core::utils::{Environment, InfoLogger, Parallelism, ParallelismDegree};
use loadplan_pragmatic::parse_time_safe;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;
use std::time::Duration;

/// A planner configuration. Every missing setting keeps its default value.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies order grouping settings.
    pub grouping: Option<GroupingConfig>,
    /// Specifies spatial packer settings.
    pub packing: Option<PackingConfig>,
    /// Specifies location oracle settings.
    pub oracle: Option<OracleConfig>,
    /// Specifies loading dock schedule settings.
    pub schedule: Option<ScheduleConfig>,
    /// Specifies environment settings.
    pub environment: Option<EnvironmentConfig>,
}

/// Order grouping settings.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GroupingConfig {
    /// Max distance in kilometers between group reference point and member destinations.
    pub proximity_threshold: Option<f64>,
}

/// A candidate generation strategy.
#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CandidateStrategyType {
    /// Every grid cell at every support level.
    Grid,
    /// Corner projections of already placed palettes.
    ExtremePoints,
}

/// A loading sequence rule.
#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LoadingSequenceType {
    /// Earlier deliveries are placed closer to the rear door.
    DeliveryOrder,
    /// No loading sequence scoring.
    Disabled,
}

/// Spatial packer settings.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PackingConfig {
    /// Grid resolution in meters.
    pub resolution: Option<f64>,
    /// Candidate generation strategy.
    pub strategy: Option<CandidateStrategyType>,
    /// Loading sequence rule.
    pub loading_sequence: Option<LoadingSequenceType>,
    /// Minimum supported fraction of base area.
    pub min_support_ratio: Option<f64>,
}

/// Location oracle settings.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OracleConfig {
    /// Timeout of a single call in milliseconds.
    pub timeout_ms: Option<u64>,
    /// Amount of retries after a service failure.
    pub retries: Option<usize>,
}

/// Loading dock schedule settings.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    /// Loading start in RFC3339 format, overrides problem's planning start.
    pub planning_start: Option<String>,
    /// Amount of docks.
    pub dock_count: Option<usize>,
    /// Loading duration of one vehicle in minutes.
    pub loading_duration_minutes: Option<f64>,
}

/// Environment settings.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// Specifies parallelism settings.
    pub parallelism: Option<ParallelismConfig>,
    /// Specifies logging settings.
    pub logging: Option<LoggingConfig>,
}

/// Parallelism settings: amount of threads used on each level, all cpus are used when missing.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ParallelismConfig {
    /// Amount of threads used to pack independent assignments.
    pub outer: Option<usize>,
    /// Amount of threads used to score placement candidates.
    pub inner: Option<usize>,
}

/// Logging settings.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates planner config overlaying given config on defaults.
pub fn create_config(config: &Config) -> Result<PlannerConfig, String> {
    let mut planner_config = PlannerConfig::default();

    if let Some(threshold) = config.grouping.as_ref().and_then(|grouping| grouping.proximity_threshold) {
        if threshold < 0. {
            return Err(format!("proximity threshold cannot be negative, got '{threshold}'"));
        }
        planner_config.proximity_threshold = threshold;
    }

    if let Some(packing) = &config.packing {
        configure_packing(&mut planner_config, packing)?;
    }

    if let Some(oracle) = &config.oracle {
        if let Some(timeout_ms) = oracle.timeout_ms {
            planner_config.oracle.timeout = Duration::from_millis(timeout_ms);
        }
        if let Some(retries) = oracle.retries {
            planner_config.oracle.retries = retries;
        }
    }

    if let Some(schedule) = &config.schedule {
        configure_schedule(&mut planner_config, schedule)?;
    }

    Ok(planner_config)
}

/// Creates environment from config, logging is enabled either by config or by the flag.
pub fn create_environment(config: Option<&EnvironmentConfig>, is_logging: bool) -> Result<Environment, String> {
    let parallelism = config
        .and_then(|config| config.parallelism.as_ref())
        .map(|parallelism| {
            Ok::<_, String>(Parallelism::new(
                get_parallelism_degree(parallelism.outer, "outer")?,
                get_parallelism_degree(parallelism.inner, "inner")?,
            ))
        })
        .transpose()?
        .unwrap_or_default();

    let is_logging =
        is_logging || config.and_then(|config| config.logging.as_ref()).is_some_and(|logging| logging.enabled);

    let logger: InfoLogger = if is_logging { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_: &str| {}) };

    Ok(Environment::new(parallelism, logger))
}

fn configure_packing(planner_config: &mut PlannerConfig, packing: &PackingConfig) -> Result<(), String> {
    if let Some(resolution) = packing.resolution {
        if resolution <= 0. {
            return Err(format!("grid resolution should be positive, got '{resolution}'"));
        }
        planner_config.packing.resolution = resolution;
    }

    if let Some(strategy) = packing.strategy {
        planner_config.packing.strategy = match strategy {
            CandidateStrategyType::Grid => CandidateStrategy::Grid,
            CandidateStrategyType::ExtremePoints => CandidateStrategy::ExtremePoints,
        };
    }

    if let Some(sequence) = packing.loading_sequence {
        planner_config.packing.loading_sequence = match sequence {
            LoadingSequenceType::DeliveryOrder => LoadingSequence::DeliveryOrder,
            LoadingSequenceType::Disabled => LoadingSequence::Disabled,
        };
    }

    if let Some(ratio) = packing.min_support_ratio {
        if !(0. ..=1.).contains(&ratio) {
            return Err(format!("min support ratio should be in [0, 1] range, got '{ratio}'"));
        }
        planner_config.packing.min_support_ratio = ratio;
    }

    Ok(())
}

fn configure_schedule(planner_config: &mut PlannerConfig, schedule: &ScheduleConfig) -> Result<(), String> {
    if let Some(planning_start) = &schedule.planning_start {
        let planning_start = parse_time_safe(planning_start).map_err(|err| err.to_string())?;
        planner_config.schedule.planning_start = Some(planning_start);
    }

    if let Some(dock_count) = schedule.dock_count {
        if dock_count == 0 {
            return Err("dock count should be at least 1".to_string());
        }
        planner_config.schedule.dock_count = dock_count;
    }

    if let Some(minutes) = schedule.loading_duration_minutes {
        if minutes < 0. {
            return Err(format!("loading duration cannot be negative, got '{minutes}'"));
        }
        planner_config.schedule.loading_duration = minutes * 60.;
    }

    Ok(())
}

fn get_parallelism_degree(threads: Option<usize>, name: &str) -> Result<ParallelismDegree, String> {
    match threads {
        None => Ok(ParallelismDegree::Full),
        Some(0) => Err(format!("{name} parallelism should use at least one thread")),
        Some(1) => Ok(ParallelismDegree::Sequential),
        Some(max) => Ok(ParallelismDegree::Limited { max }),
    }
}
