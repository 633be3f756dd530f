/*!
 * Scheduler Module
 * CPU scheduling strategies, timelines and run metrics
 */

mod entry;
pub mod metrics;
pub mod simulator;
pub mod strategies;
pub mod timeline;
pub mod traits;
pub mod types;

// Re-export public API
pub use metrics::{Averages, RunReport};
pub use simulator::Simulator;
pub use strategies::{
    strategy_for, Fcfs, PriorityNonPreemptive, PriorityPreemptive, RoundRobin, Sjf, Srtf,
};
pub use timeline::{Slot, Timeline, TimelineEntry};
pub use traits::Strategy;
pub use types::{SchedulingPolicy, TimeQuantum};
