/*!
 * Process Types
 * Schedulable unit with fixed inputs and per-run simulation state
 */

use crate::core::{Priority, ProcessId, Time, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

/// One schedulable unit
///
/// Inputs (`pid`, `arrival_time`, `burst_time`, `priority`) are fixed at
/// construction. Everything else is simulation state filled in by a strategy
/// and cleared by [`Process::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    pid: ProcessId,
    arrival_time: Time,
    burst_time: Time,
    priority: Priority,

    pub(crate) remaining_time: Time,
    pub(crate) start_time: Option<Time>,
    pub(crate) completion_time: Option<Time>,
    pub(crate) turnaround_time: Option<Time>,
    pub(crate) waiting_time: Option<Time>,
    pub(crate) response_time: Option<Time>,
}

impl Process {
    /// Create a process in the reset state
    pub fn new(
        pid: impl Into<ProcessId>,
        arrival_time: Time,
        burst_time: Time,
        priority: Priority,
    ) -> ValidationResult<Self> {
        let pid = pid.into();
        if pid.is_empty() {
            return Err(ValidationError::EmptyPid);
        }
        if burst_time == 0 {
            return Err(ValidationError::NonPositiveBurst {
                pid: pid.into(),
                burst: 0,
            });
        }

        Ok(Self {
            pid,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
            response_time: None,
        })
    }

    /// Restore simulation state so the same process can be scheduled again
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.completion_time = None;
        self.turnaround_time = None;
        self.waiting_time = None;
        self.response_time = None;
    }

    #[inline]
    pub fn pid(&self) -> &ProcessId {
        &self.pid
    }

    #[inline]
    pub const fn arrival_time(&self) -> Time {
        self.arrival_time
    }

    #[inline]
    pub const fn burst_time(&self) -> Time {
        self.burst_time
    }

    #[inline]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    #[inline]
    pub const fn remaining_time(&self) -> Time {
        self.remaining_time
    }

    #[inline]
    pub const fn start_time(&self) -> Option<Time> {
        self.start_time
    }

    #[inline]
    pub const fn completion_time(&self) -> Option<Time> {
        self.completion_time
    }

    #[inline]
    pub const fn turnaround_time(&self) -> Option<Time> {
        self.turnaround_time
    }

    #[inline]
    pub const fn waiting_time(&self) -> Option<Time> {
        self.waiting_time
    }

    #[inline]
    pub const fn response_time(&self) -> Option<Time> {
        self.response_time
    }

    /// True once the process has received all of its CPU time
    #[inline]
    pub const fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Record first dispatch; later dispatches keep the original start
    #[inline]
    pub(crate) fn mark_started(&mut self, now: Time) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    /// Fill in the derived metrics once the process finishes at `now`
    pub(crate) fn complete(&mut self, now: Time) {
        debug_assert_eq!(self.remaining_time, 0);
        let start = self.start_time.unwrap_or(now);
        let turnaround = now.saturating_sub(self.arrival_time);

        self.completion_time = Some(now);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround.saturating_sub(self.burst_time));
        self.response_time = Some(start.saturating_sub(self.arrival_time));
    }

    /// Snapshot of the computed metrics, `None` until the process completed
    pub fn metrics(&self) -> Option<ProcessMetrics> {
        Some(ProcessMetrics {
            pid: self.pid.clone(),
            arrival_time: self.arrival_time,
            burst_time: self.burst_time,
            priority: self.priority,
            start_time: self.start_time?,
            completion_time: self.completion_time?,
            turnaround_time: self.turnaround_time?,
            waiting_time: self.waiting_time?,
            response_time: self.response_time?,
        })
    }
}

/// Completed per-process metrics, one row of the output table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub pid: ProcessId,
    pub arrival_time: Time,
    pub burst_time: Time,
    pub priority: Priority,
    pub start_time: Time,
    pub completion_time: Time,
    pub turnaround_time: Time,
    pub waiting_time: Time,
    pub response_time: Time,
}

/// Process descriptor as collected at the input boundary (signed, unvalidated)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub pid: String,
    pub arrival_time: i64,
    pub burst_time: i64,
    #[serde(default)]
    pub priority: i64,
}

impl ProcessSpec {
    pub fn new(pid: impl Into<String>, arrival_time: i64, burst_time: i64, priority: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            priority,
        }
    }
}

impl TryFrom<&ProcessSpec> for Process {
    type Error = ValidationError;

    fn try_from(spec: &ProcessSpec) -> ValidationResult<Self> {
        let pid = spec.pid.trim();
        if pid.is_empty() {
            return Err(ValidationError::EmptyPid);
        }

        let arrival = Time::try_from(spec.arrival_time).map_err(|_| {
            ValidationError::NegativeArrival {
                pid: pid.to_string(),
                arrival: spec.arrival_time,
            }
        })?;

        let burst = Time::try_from(spec.burst_time)
            .ok()
            .filter(|&burst| burst > 0)
            .ok_or_else(|| ValidationError::NonPositiveBurst {
                pid: pid.to_string(),
                burst: spec.burst_time,
            })?;

        let priority = Priority::try_from(spec.priority).map_err(|_| {
            if spec.priority < 0 {
                ValidationError::NegativePriority {
                    pid: pid.to_string(),
                    priority: spec.priority,
                }
            } else {
                ValidationError::Malformed(format!(
                    "priority {} of {} is too large",
                    spec.priority, pid
                ))
            }
        })?;

        Process::new(pid, arrival, burst, priority)
    }
}

impl TryFrom<ProcessSpec> for Process {
    type Error = ValidationError;

    fn try_from(spec: ProcessSpec) -> ValidationResult<Self> {
        Process::try_from(&spec)
    }
}
