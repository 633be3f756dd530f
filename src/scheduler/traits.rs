/*!
 * Scheduler Traits
 * Interface shared by every scheduling discipline
 */

use super::timeline::Timeline;
use super::types::{SchedulingPolicy, TimeQuantum};
use crate::core::ValidationResult;
use crate::process::Process;

/// A scheduling discipline
///
/// `schedule` takes exclusive access to the process set for the duration of
/// one run, fills in every process's metrics and returns the timeline.
/// Processes must be in the reset state with unique pids; strategies other
/// than round-robin ignore `quantum`.
pub trait Strategy: Send + Sync {
    /// Policy implemented by this strategy
    fn policy(&self) -> SchedulingPolicy;

    /// Run the whole process set to completion
    fn schedule(
        &self,
        processes: &mut [Process],
        quantum: Option<TimeQuantum>,
    ) -> ValidationResult<Timeline>;
}
