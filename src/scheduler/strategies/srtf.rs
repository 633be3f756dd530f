/*!
 * Shortest-Remaining-Time-First (preemptive)
 */

use super::run_preemptive;
use crate::core::ValidationResult;
use crate::process::Process;
use crate::scheduler::timeline::Timeline;
use crate::scheduler::traits::Strategy;
use crate::scheduler::types::{SchedulingPolicy, TimeQuantum};

/// Each time unit goes to the process with the least remaining work
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl Strategy for Srtf {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Srtf
    }

    fn schedule(
        &self,
        processes: &mut [Process],
        _quantum: Option<TimeQuantum>,
    ) -> ValidationResult<Timeline> {
        run_preemptive(processes, |p| p.remaining_time())
    }
}
