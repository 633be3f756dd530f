/*!
 * Real-Time Module
 * Rate-monotonic schedulability test, hyperperiod and simulation
 */

pub mod analysis;
pub mod simulate;
pub mod task;

pub use analysis::{analyze, hyperperiod, is_schedulable, liu_layland_bound, utilization, Feasibility};
pub use simulate::{simulate, DeadlineMiss, RateMonotonic, RmsReport, RmsVerdict, Simulation};
pub use task::{build_task_set, parse_task_list, PeriodicTask, TaskSpec};
