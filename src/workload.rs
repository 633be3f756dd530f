/*!
 * Workload Files
 *
 * JSON input describing one run, tagged by `kind`:
 *
 * ```json
 * { "kind": "cpu", "policy": "round_robin", "quantum": 2,
 *   "processes": [{ "pid": "P0", "arrival_time": 0, "burst_time": 5 }] }
 * ```
 *
 * Numbers stay signed until validation so negative input is reported as a
 * validation error rather than a decode error.
 */

use crate::banker::{matrix_from_signed, units_from_signed, RequestOutcome, ResourceState, SafetyReport};
use crate::core::{SimResult, ValidationResult};
use crate::monitoring::span_run;
use crate::process::{build_process_set, ProcessSpec};
use crate::realtime::{build_task_set, RateMonotonic, RmsReport, TaskSpec};
use crate::scheduler::{RunReport, SchedulingPolicy, Simulator, TimeQuantum};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Resource request to evaluate after the safety check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    pub process: usize,
    pub units: Vec<i64>,
}

/// One run described in a workload file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Workload {
    Cpu {
        policy: SchedulingPolicy,
        #[serde(default)]
        quantum: Option<i64>,
        processes: Vec<ProcessSpec>,
    },
    Compare {
        #[serde(default)]
        quantum: Option<i64>,
        processes: Vec<ProcessSpec>,
    },
    Bankers {
        available: Vec<i64>,
        max: Vec<Vec<i64>>,
        allocation: Vec<Vec<i64>>,
        #[serde(default)]
        request: Option<RequestSpec>,
    },
    RateMonotonic {
        tasks: Vec<TaskSpec>,
    },
}

/// Result of executing a [`Workload`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Cpu(RunReport),
    Compare {
        reports: Vec<RunReport>,
    },
    Bankers {
        safety: SafetyReport,
        #[serde(skip_serializing_if = "Option::is_none")]
        request: Option<RequestOutcome>,
    },
    RateMonotonic(RmsReport),
}

impl Workload {
    pub fn from_json(input: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading workload");
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Cpu { .. } => "cpu",
            Self::Compare { .. } => "compare",
            Self::Bankers { .. } => "bankers",
            Self::RateMonotonic { .. } => "rate_monotonic",
        }
    }

    fn size(&self) -> usize {
        match self {
            Self::Cpu { processes, .. } | Self::Compare { processes, .. } => processes.len(),
            Self::Bankers { max, .. } => max.len(),
            Self::RateMonotonic { tasks } => tasks.len(),
        }
    }

    /// Validate and run
    pub fn execute(&self, simulator: &Simulator) -> SimResult<Outcome> {
        let _span = span_run(self.kind(), self.size()).entered();

        let outcome = match self {
            Self::Cpu {
                policy,
                quantum,
                processes,
            } => {
                let mut set = build_process_set(processes)?;
                let quantum = quantum_from(*quantum)?;
                Outcome::Cpu(simulator.run(*policy, &mut set, quantum)?)
            }
            Self::Compare { quantum, processes } => {
                let set = build_process_set(processes)?;
                let quantum = quantum_from(*quantum)?;
                Outcome::Compare {
                    reports: simulator.compare(&set, quantum)?,
                }
            }
            Self::Bankers {
                available,
                max,
                allocation,
                request,
            } => {
                let state = ResourceState::new(
                    units_from_signed(available, "available")?,
                    matrix_from_signed(max, "max")?,
                    matrix_from_signed(allocation, "allocation")?,
                )?;
                let safety = state.check_safety();
                let request = request
                    .as_ref()
                    .map(|r| -> ValidationResult<RequestOutcome> {
                        state.request(r.process, &units_from_signed(&r.units, "request")?)
                    })
                    .transpose()?;
                Outcome::Bankers { safety, request }
            }
            Self::RateMonotonic { tasks } => {
                let tasks = build_task_set(tasks)?;
                Outcome::RateMonotonic(RateMonotonic::run(&tasks, simulator.config())?)
            }
        };

        Ok(outcome)
    }
}

fn quantum_from(value: Option<i64>) -> ValidationResult<Option<TimeQuantum>> {
    value.map(TimeQuantum::from_signed).transpose()
}
