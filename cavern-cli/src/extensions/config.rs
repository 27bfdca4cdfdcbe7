//! Escape planner configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use cavern_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// Max planning time used when neither the config nor the command line specifies one.
pub const DEFAULT_MAX_TIME_MS: u64 = 10_000;

/// A planner run configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies planner settings.
    pub planner: Option<PlannerSettings>,
    /// Specifies search termination settings.
    pub termination: Option<TerminationConfig>,
    /// Specifies logging settings.
    pub logging: Option<LoggingConfig>,
    /// Specifies randomization seed.
    pub seed: Option<u64>,
}

/// Planner settings, missing values fall back to the defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerSettings {
    /// Amount of randomized walkers.
    pub walkers: Option<usize>,
    /// Specifies whether the sampler runs before the search.
    pub use_sampler: Option<bool>,
    /// Specifies whether root branches are searched in parallel.
    pub parallel_search: Option<bool>,
}

/// Termination settings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max planning time in milliseconds.
    pub max_time_ms: Option<u64>,
}

/// Logging settings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging to stdout is enabled.
    pub enabled: bool,
}

impl Config {
    /// Returns max planning time in milliseconds, if any.
    pub fn max_time_ms(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|termination| termination.max_time_ms)
    }

    /// Returns true if logging is enabled.
    pub fn is_logging_enabled(&self) -> bool {
        self.logging.as_ref().is_some_and(|logging| logging.enabled)
    }
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates a logger: stdout when logging is enabled, otherwise a no-op.
pub fn create_logger(config: &Config) -> InfoLogger {
    if config.is_logging_enabled() { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_: &str| {}) }
}

/// Returns max planning time in milliseconds, falling back to `DEFAULT_MAX_TIME_MS`.
pub fn get_max_time_ms(config: &Config, logger: &InfoLogger) -> u64 {
    match config.max_time_ms() {
        Some(max_time_ms) => {
            logger(&format!("configured to use max-time {max_time_ms}ms"));
            max_time_ms
        }
        None => {
            logger(&format!("configured to use default max-time ({DEFAULT_MAX_TIME_MS}ms)"));
            DEFAULT_MAX_TIME_MS
        }
    }
}

/// Creates an environment from the config and the given quota.
pub fn create_environment(config: &Config, quota: Option<Arc<dyn Quota + Send + Sync>>) -> Environment {
    let random: Arc<dyn Random + Send + Sync> =
        Arc::new(config.seed.map(DefaultRandom::new_with_seed).unwrap_or_default());

    Environment::new(random, quota, Parallelism::default(), create_logger(config))
}

/// Creates planner config: values missing in the config are taken from environment defaults.
pub fn create_planner_config(environment: &Environment, config: &Config) -> PlannerConfig {
    let defaults = PlannerConfig::new(environment);

    match config.planner.as_ref() {
        Some(planner) => PlannerConfig {
            walkers: planner.walkers.unwrap_or(defaults.walkers),
            use_sampler: planner.use_sampler.unwrap_or(defaults.use_sampler),
            parallel_search: planner.parallel_search.unwrap_or(defaults.parallel_search),
        },
        None => defaults,
    }
}
