/*!
 * Process Set Validation
 * Boundary checks applied before any simulation state is touched
 */

use super::types::{Process, ProcessSpec};
use crate::core::{Time, ValidationError, ValidationResult};
use std::collections::HashSet;

/// Validate a process set: non-empty with unique pids
pub fn validate_process_set(processes: &[Process]) -> ValidationResult<()> {
    if processes.is_empty() {
        return Err(ValidationError::EmptyProcessSet);
    }

    let mut seen = HashSet::with_capacity(processes.len());
    for process in processes {
        if !seen.insert(process.pid().as_str()) {
            return Err(ValidationError::DuplicatePid(process.pid().to_string()));
        }
    }

    Ok(())
}

/// Convert boundary descriptors into processes, all-or-nothing
pub fn build_process_set(specs: &[ProcessSpec]) -> ValidationResult<Vec<Process>> {
    let processes = specs
        .iter()
        .map(Process::try_from)
        .collect::<ValidationResult<Vec<_>>>()?;
    validate_process_set(&processes)?;
    Ok(processes)
}

/// Latest clock value any strategy can reach: last arrival plus all work
pub fn worst_case_horizon(processes: &[Process]) -> ValidationResult<Time> {
    let last_arrival = processes
        .iter()
        .map(Process::arrival_time)
        .max()
        .unwrap_or(0);

    processes
        .iter()
        .try_fold(last_arrival, |acc, p| acc.checked_add(p.burst_time()))
        .ok_or(ValidationError::HorizonExceeded {
            horizon: Time::MAX,
            limit: Time::MAX,
        })
}
