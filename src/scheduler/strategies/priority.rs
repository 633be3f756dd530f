/*!
 * Priority Scheduling
 * Lower priority value wins; ties go to the earlier arrival
 */

use super::{run_non_preemptive, run_preemptive};
use crate::core::ValidationResult;
use crate::process::Process;
use crate::scheduler::timeline::Timeline;
use crate::scheduler::traits::Strategy;
use crate::scheduler::types::{SchedulingPolicy, TimeQuantum};

/// Strictly higher-priority arrivals preempt the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityPreemptive;

impl Strategy for PriorityPreemptive {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::PriorityPreemptive
    }

    fn schedule(
        &self,
        processes: &mut [Process],
        _quantum: Option<TimeQuantum>,
    ) -> ValidationResult<Timeline> {
        run_preemptive(processes, |p| u64::from(p.priority()))
    }
}

/// Once started, a process runs to completion
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityNonPreemptive;

impl Strategy for PriorityNonPreemptive {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::PriorityNonPreemptive
    }

    fn schedule(
        &self,
        processes: &mut [Process],
        _quantum: Option<TimeQuantum>,
    ) -> ValidationResult<Timeline> {
        run_non_preemptive(processes, |p| u64::from(p.priority()))
    }
}
