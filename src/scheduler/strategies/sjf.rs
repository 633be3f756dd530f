/*!
 * Shortest-Job-First (non-preemptive)
 */

use super::run_non_preemptive;
use crate::core::ValidationResult;
use crate::process::Process;
use crate::scheduler::timeline::Timeline;
use crate::scheduler::traits::Strategy;
use crate::scheduler::types::{SchedulingPolicy, TimeQuantum};

/// Among arrived processes, the smallest burst runs to completion
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Strategy for Sjf {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Sjf
    }

    fn schedule(
        &self,
        processes: &mut [Process],
        _quantum: Option<TimeQuantum>,
    ) -> ValidationResult<Timeline> {
        run_non_preemptive(processes, |p| p.burst_time())
    }
}
