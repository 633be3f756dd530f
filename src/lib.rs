/*!
 * Scheduling Lab Library
 * CPU scheduling strategies, Banker's safety check and rate-monotonic analysis
 */

pub mod banker;
pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod realtime;
pub mod report;
pub mod scheduler;
pub mod workload;

// Re-exports
pub use banker::{is_safe, RequestOutcome, ResourceState, SafetyReport, Units};
pub use config::SimulatorConfig;
pub use crate::core::{
    Priority, ProcessId, SimError, SimResult, Time, ValidationError, ValidationResult,
};
pub use monitoring::init_tracing;
pub use process::{Process, ProcessMetrics, ProcessSpec};
pub use realtime::{PeriodicTask, RateMonotonic, RmsReport, RmsVerdict, TaskSpec};
pub use report::TextReport;
pub use scheduler::{
    RunReport, SchedulingPolicy, Simulator, Slot, Strategy, TimeQuantum, Timeline, TimelineEntry,
};
pub use workload::{Outcome, Workload};
