/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Malformed or out-of-range input, raised before any simulation state is touched
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Process id cannot be empty")]
    #[diagnostic(
        code(validation::empty_pid),
        help("Give every process a non-blank identifier such as P0.")
    )]
    EmptyPid,

    #[error("Duplicate process id: {0}")]
    #[diagnostic(
        code(validation::duplicate_pid),
        help("Process ids must be unique within a run.")
    )]
    DuplicatePid(String),

    #[error("Process {pid} has non-positive burst time {burst}")]
    #[diagnostic(
        code(validation::non_positive_burst),
        help("Burst time must be greater than zero.")
    )]
    NonPositiveBurst { pid: String, burst: i64 },

    #[error("Process {pid} has negative arrival time {arrival}")]
    #[diagnostic(code(validation::negative_arrival))]
    NegativeArrival { pid: String, arrival: i64 },

    #[error("Process {pid} has negative priority {priority}")]
    #[diagnostic(code(validation::negative_priority))]
    NegativePriority { pid: String, priority: i64 },

    #[error("No processes to schedule")]
    #[diagnostic(
        code(validation::empty_process_set),
        help("Add at least one process before running a simulation.")
    )]
    EmptyProcessSet,

    #[error("Invalid quantum {0}: must be greater than zero")]
    #[diagnostic(code(validation::invalid_quantum))]
    InvalidQuantum(i64),

    #[error("Round-robin scheduling requires a time quantum")]
    #[diagnostic(code(validation::missing_quantum))]
    MissingQuantum,

    #[error("Invalid scheduling policy '{0}'")]
    #[diagnostic(
        code(validation::invalid_policy),
        help("Valid: fcfs, sjf, srtf, round_robin, priority_preemptive, priority_non_preemptive")
    )]
    InvalidPolicy(String),

    #[error("Matrix dimensions do not match: {0}")]
    #[diagnostic(
        code(validation::dimension_mismatch),
        help("available must have R entries and max/allocation must be P×R.")
    )]
    DimensionMismatch(String),

    #[error("P{process} claims {max} units of R{resource} but already holds {allocation}")]
    #[diagnostic(
        code(validation::negative_need),
        help("The claimed maximum must be at least the current allocation.")
    )]
    NegativeNeed {
        process: usize,
        resource: usize,
        max: u32,
        allocation: u32,
    },

    #[error("Negative resource count {value} in {context}")]
    #[diagnostic(code(validation::negative_units))]
    NegativeUnits { context: String, value: i64 },

    #[error("Process index {process} out of range ({count} processes)")]
    #[diagnostic(code(validation::unknown_process))]
    UnknownProcess { process: usize, count: usize },

    #[error("Task {task} has non-positive period {period}")]
    #[diagnostic(code(validation::non_positive_period))]
    NonPositivePeriod { task: usize, period: i64 },

    #[error("Task {task} has non-positive execution time {wcet}")]
    #[diagnostic(code(validation::non_positive_wcet))]
    NonPositiveWcet { task: usize, wcet: i64 },

    #[error("No periodic tasks given")]
    #[diagnostic(
        code(validation::empty_task_set),
        help("Hyperperiod and simulation are undefined for an empty task set.")
    )]
    EmptyTaskSet,

    #[error("Hyperperiod overflows the simulated clock")]
    #[diagnostic(code(validation::hyperperiod_overflow))]
    HyperperiodOverflow,

    #[error("Simulation horizon {horizon} exceeds limit {limit}")]
    #[diagnostic(
        code(validation::horizon_exceeded),
        help("Reduce burst times or periods, or raise SCHED_MAX_HORIZON.")
    )]
    HorizonExceeded { horizon: u64, limit: u64 },

    #[error("Malformed input: {0}")]
    #[diagnostic(code(validation::malformed))]
    Malformed(String),
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Validation error: {0}")]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error("Workload error: {0}")]
    #[diagnostic(
        code(sim::workload_error),
        help("The workload file must be JSON with a `kind` of cpu, compare, bankers or rate_monotonic.")
    )]
    Workload(String),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(sim::io_error),
        help("Check that the workload path exists and is readable.")
    )]
    Io(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(sim::configuration_error),
        help("Review SCHED_* environment variables.")
    )]
    Configuration(String),
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Workload(err.to_string())
    }
}

/// Result type for input validation and the algorithms themselves
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Result type for simulator operations
pub type SimResult<T> = std::result::Result<T, SimError>;
