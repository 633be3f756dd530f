/*!
 * Banker's Safety Algorithm
 *
 * Scan policy: each pass walks unfinished processes in index order and
 * finishes every process whose need fits the current work vector as soon as
 * it is seen, so a later index in the same pass already benefits from the
 * released allocation. The first safe sequence found this way is returned.
 */

use super::state::{ResourceState, Units};
use crate::core::limits::PROCESS_LABEL_PREFIX;
use crate::core::{ValidationError, ValidationResult};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Verdict of a safety check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyReport {
    pub safe: bool,
    /// Process indices in completion order; empty when unsafe
    pub sequence: Vec<usize>,
}

impl SafetyReport {
    /// Sequence rendered as `P1, P3, ...`
    pub fn labels(&self) -> Vec<String> {
        self.sequence
            .iter()
            .map(|i| format!("{}{}", PROCESS_LABEL_PREFIX, i))
            .collect()
    }

    fn unsafe_state() -> Self {
        Self {
            safe: false,
            sequence: Vec::new(),
        }
    }
}

/// Outcome of a resource request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RequestOutcome {
    /// Granting keeps the system safe; `state` is the post-grant snapshot
    Granted {
        state: ResourceState,
        sequence: Vec<usize>,
    },
    /// Not enough units free right now
    MustWait,
    /// Granting would leave no safe sequence
    Unsafe,
    /// Request exceeds the process's declared remaining need
    ExceedsClaim,
}

impl ResourceState {
    /// Search for a safe completion order without modifying the state
    pub fn check_safety(&self) -> SafetyReport {
        let processes = self.process_count();
        // Widened: available plus released allocations can exceed `Units::MAX`
        let mut work: Vec<u64> = self.available().iter().map(|&u| u64::from(u)).collect();
        let mut finished = vec![false; processes];
        let mut sequence = Vec::with_capacity(processes);

        // Each productive pass finishes at least one process
        for pass in 0..processes {
            let mut progressed = false;

            for p in 0..processes {
                if finished[p] || !fits_work(&self.need()[p], &work) {
                    continue;
                }
                for (w, &held) in work.iter_mut().zip(&self.allocation()[p]) {
                    *w += u64::from(held);
                }
                finished[p] = true;
                sequence.push(p);
                progressed = true;
                debug!(pass, process = p, work = ?work, "process can finish");
            }

            if sequence.len() == processes {
                break;
            }
            if !progressed {
                warn!(
                    finished = sequence.len(),
                    total = processes,
                    "No process can finish with the available work vector; state is unsafe"
                );
                return SafetyReport::unsafe_state();
            }
        }

        info!(sequence = ?sequence, "Safe sequence found");
        SafetyReport {
            safe: true,
            sequence,
        }
    }

    /// Resource-request algorithm for `process` asking for `request` units
    pub fn request(&self, process: usize, request: &[Units]) -> ValidationResult<RequestOutcome> {
        if process >= self.process_count() {
            return Err(ValidationError::UnknownProcess {
                process,
                count: self.process_count(),
            });
        }
        if request.len() != self.resource_count() {
            return Err(ValidationError::DimensionMismatch(format!(
                "request has {} entries, expected {}",
                request.len(),
                self.resource_count()
            )));
        }

        if !fits(request, &self.need()[process]) {
            return Ok(RequestOutcome::ExceedsClaim);
        }
        if !fits(request, self.available()) {
            return Ok(RequestOutcome::MustWait);
        }

        let tentative = self.with_granted(process, request);
        let report = tentative.check_safety();
        if report.safe {
            Ok(RequestOutcome::Granted {
                state: tentative,
                sequence: report.sequence,
            })
        } else {
            Ok(RequestOutcome::Unsafe)
        }
    }
}

/// Check whether the system described by the three matrices is in a safe state
pub fn is_safe(
    available: &[Units],
    max: &[Vec<Units>],
    allocation: &[Vec<Units>],
) -> ValidationResult<SafetyReport> {
    let state = ResourceState::new(available.to_vec(), max.to_vec(), allocation.to_vec())?;
    Ok(state.check_safety())
}

/// Component-wise `lhs <= rhs`
#[inline]
fn fits(lhs: &[Units], rhs: &[Units]) -> bool {
    lhs.iter().zip(rhs).all(|(l, r)| l <= r)
}

#[inline]
fn fits_work(need: &[Units], work: &[u64]) -> bool {
    need.iter().zip(work).all(|(&n, &w)| u64::from(n) <= w)
}
