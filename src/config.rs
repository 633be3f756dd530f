/*!
 * Simulator Configuration
 *
 * Defaults for runs that do not specify them, and the horizon guard that
 * bounds every unit-stepped simulation.
 */

use crate::core::limits::{DEFAULT_QUANTUM, MAX_SIMULATION_HORIZON};
use crate::core::{SimError, SimResult, Time};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the default round-robin quantum
pub const ENV_DEFAULT_QUANTUM: &str = "SCHED_DEFAULT_QUANTUM";
/// Environment variable overriding the horizon limit
pub const ENV_MAX_HORIZON: &str = "SCHED_MAX_HORIZON";
/// Environment variable enabling idle gap filling (`1`/`true`)
pub const ENV_FILL_IDLE: &str = "SCHED_FILL_IDLE";

/// Simulation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Quantum used for round-robin when none is supplied (default: 2)
    pub default_quantum: Time,

    /// Largest simulated clock value a run may reach (default: 1,000,000)
    pub max_horizon: Time,

    /// Emit explicit idle entries so timelines cover `[0, end)` contiguously
    pub fill_idle: bool,
}

impl SimulatorConfig {
    /// Create default configuration
    pub const fn new() -> Self {
        Self {
            default_quantum: DEFAULT_QUANTUM,
            max_horizon: MAX_SIMULATION_HORIZON,
            fill_idle: false,
        }
    }

    /// Configuration producing contiguous timelines, as a chart renderer wants them
    pub const fn contiguous() -> Self {
        Self {
            fill_idle: true,
            ..Self::new()
        }
    }

    /// Load configuration from `SCHED_*` environment variables over the defaults
    pub fn from_env() -> SimResult<Self> {
        let mut config = Self::new();

        if let Some(quantum) = read_env(ENV_DEFAULT_QUANTUM)? {
            let quantum = parse_time(ENV_DEFAULT_QUANTUM, &quantum)?;
            if quantum == 0 {
                return Err(SimError::Configuration(format!(
                    "{} must be greater than zero",
                    ENV_DEFAULT_QUANTUM
                )));
            }
            config.default_quantum = quantum;
        }

        if let Some(horizon) = read_env(ENV_MAX_HORIZON)? {
            config.max_horizon = parse_time(ENV_MAX_HORIZON, &horizon)?;
        }

        if let Some(fill) = read_env(ENV_FILL_IDLE)? {
            config.fill_idle = match fill.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(SimError::Configuration(format!(
                        "{} must be a boolean, got '{}'",
                        ENV_FILL_IDLE, other
                    )))
                }
            };
        }

        Ok(config)
    }

    pub fn with_default_quantum(mut self, quantum: Time) -> Self {
        self.default_quantum = quantum;
        self
    }

    pub fn with_max_horizon(mut self, horizon: Time) -> Self {
        self.max_horizon = horizon;
        self
    }

    pub fn with_fill_idle(mut self, fill_idle: bool) -> Self {
        self.fill_idle = fill_idle;
        self
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env(key: &str) -> SimResult<Option<String>> {
    match std::env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(SimError::Configuration(format!("{}: {}", key, e))),
    }
}

fn parse_time(key: &str, value: &str) -> SimResult<Time> {
    value.trim().parse::<Time>().map_err(|e| {
        SimError::Configuration(format!("{} has invalid value '{}': {}", key, value, e))
    })
}
