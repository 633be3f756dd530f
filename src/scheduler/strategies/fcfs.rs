/*!
 * First-Come-First-Served
 */

use super::arrival_order;
use crate::core::{Time, ValidationResult};
use crate::process::{worst_case_horizon, Process};
use crate::scheduler::timeline::Timeline;
use crate::scheduler::traits::Strategy;
use crate::scheduler::types::{SchedulingPolicy, TimeQuantum};

/// Runs processes to completion in arrival order (ties keep input order)
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Strategy for Fcfs {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Fcfs
    }

    fn schedule(
        &self,
        processes: &mut [Process],
        _quantum: Option<TimeQuantum>,
    ) -> ValidationResult<Timeline> {
        worst_case_horizon(processes)?;

        let mut timeline = Timeline::with_capacity(processes.len());
        let mut now: Time = 0;

        for index in arrival_order(processes) {
            let process = &mut processes[index];
            // The clock never goes backward; idle forward to the arrival
            now = now.max(process.arrival_time());
            let start = now;
            process.mark_started(start);
            now += process.remaining_time;
            process.remaining_time = 0;
            process.complete(now);
            timeline.push_process(process.pid(), start, now);
        }

        Ok(timeline)
    }
}
