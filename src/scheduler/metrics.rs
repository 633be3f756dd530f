/*!
 * Run Metrics
 * Per-process results, column averages and CPU utilization
 */

use super::timeline::Timeline;
use super::types::SchedulingPolicy;
use crate::core::Time;
use crate::process::{Process, ProcessMetrics};
use serde::Serialize;

/// Column averages over a completed run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    pub waiting: f64,
    pub turnaround: f64,
    pub response: f64,
}

impl Averages {
    /// Averages over completed processes (`None` for an empty set)
    pub fn from_metrics(metrics: &[ProcessMetrics]) -> Option<Self> {
        if metrics.is_empty() {
            return None;
        }

        let count = metrics.len() as f64;
        let sum = |f: fn(&ProcessMetrics) -> Time| metrics.iter().map(f).sum::<Time>() as f64;

        Some(Self {
            waiting: sum(|m| m.waiting_time) / count,
            turnaround: sum(|m| m.turnaround_time) / count,
            response: sum(|m| m.response_time) / count,
        })
    }
}

/// Outcome of one scheduling run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub policy: SchedulingPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Time>,
    pub timeline: Timeline,
    pub processes: Vec<ProcessMetrics>,
    pub averages: Averages,
    /// Busy time over makespan, in `[0, 1]`
    pub cpu_utilization: f64,
}

impl RunReport {
    /// Collect the report from a finished run, `None` if any process is incomplete
    pub fn collect(
        policy: SchedulingPolicy,
        quantum: Option<Time>,
        timeline: Timeline,
        processes: &[Process],
    ) -> Option<Self> {
        let metrics = processes
            .iter()
            .map(Process::metrics)
            .collect::<Option<Vec<_>>>()?;
        let averages = Averages::from_metrics(&metrics)?;

        let makespan = timeline.end_time();
        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            timeline.total_busy_time() as f64 / makespan as f64
        };

        Some(Self {
            policy,
            quantum,
            timeline,
            processes: metrics,
            averages,
            cpu_utilization,
        })
    }

    /// Completion time of the last process
    pub fn makespan(&self) -> Time {
        self.timeline.end_time()
    }
}
